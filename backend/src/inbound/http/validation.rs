//! Shared validation helpers for inbound HTTP adapters.

use crate::domain::{AuthValidationError, Error, FieldError, FieldErrorCode};

/// Map a login or registration validation failure to a field-level error.
pub(crate) fn auth_validation_error(err: AuthValidationError) -> Error {
    let code = match err {
        AuthValidationError::UnknownRole(_) => FieldErrorCode::InvalidChoice,
        AuthValidationError::EmptyEmail
        | AuthValidationError::EmptyPassword
        | AuthValidationError::EmptyRole
        | AuthValidationError::EmptyDisplayName => FieldErrorCode::Required,
    };
    let message = err.to_string();
    Error::invalid_fields(message.clone(), &[FieldError::new(err.field(), code, message)])
}

/// Treat a blank query value as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(AuthValidationError::EmptyEmail, "email", "required")]
    #[case(AuthValidationError::EmptyPassword, "password", "required")]
    #[case(AuthValidationError::EmptyRole, "role", "required")]
    #[case(AuthValidationError::UnknownRole("root".into()), "role", "invalid_choice")]
    #[case(AuthValidationError::EmptyDisplayName, "name", "required")]
    fn auth_errors_name_the_field(
        #[case] err: AuthValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let mapped = auth_validation_error(err);
        assert_eq!(mapped.code(), ErrorCode::InvalidRequest);
        let details = mapped.details().expect("details");
        assert_eq!(details["fields"][0]["field"], json!(field));
        assert_eq!(details["fields"][0]["code"], json!(code));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some("Approved"), Some("Approved"))]
    #[case(Some(" Approved"), Some(" Approved"))]
    fn blank_query_values_are_absent(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(non_blank(raw), expected);
    }
}
