//! Field-level validation failures shared by form handlers.

use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use super::Error;

/// Machine-readable reason a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// The field was missing or blank.
    Required,
    /// The value is not one of the accepted options.
    InvalidChoice,
    /// The value is not an ISO-8601 calendar date.
    InvalidDate,
    /// The value is not a non-negative amount with at most two decimals.
    InvalidAmount,
    /// The value is shorter than the minimum length.
    TooShort,
}

/// One rejected field, carried in `details.fields[]` of an error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[schema(value_type = String, example = "clientName")]
    pub field: &'static str,
    pub code: FieldErrorCode,
    #[schema(example = "Client name is required")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

impl Error {
    /// Invalid-request error listing every rejected field.
    ///
    /// # Examples
    /// ```
    /// use insure_backend::domain::{Error, FieldError, FieldErrorCode};
    ///
    /// let err = Error::invalid_fields(
    ///     "claim form is invalid",
    ///     &[FieldError::new("amount", FieldErrorCode::Required, "Amount is required")],
    /// );
    /// assert_eq!(err.details().unwrap()["fields"][0]["field"], "amount");
    /// ```
    pub fn invalid_fields(message: impl Into<String>, fields: &[FieldError]) -> Self {
        Self::invalid_request(message).with_details(json!({ "fields": fields }))
    }
}
