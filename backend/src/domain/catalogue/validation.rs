//! Validation helpers shared by catalogue records.

use chrono::NaiveDate;

use super::CatalogueValidationError;

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    if value.trim().is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    Ok(value)
}

pub(super) fn calendar_date(
    ymd: (i32, u32, u32),
    field: &'static str,
) -> Result<NaiveDate, CatalogueValidationError> {
    let (year, month, day) = ymd;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CatalogueValidationError::InvalidDate { field })
}
