//! New-claim form validation and submission.
//!
//! A [`ClaimForm`] arrives as raw strings. [`ClaimForm::validate`] checks
//! every field and reports all failures together; only a clean form becomes
//! a [`ClaimIntake`]. [`ClaimIntakeService`] then drives the submission
//! through a [`SubmissionTracker`], the latency port and the submitter port,
//! turning the outcome into a user-facing [`Notification`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use utoipa::ToSchema;

use super::catalogue::{Money, MoneyParseError};
use super::ports::{ClaimSubmitter, SimulatedLatency};
use super::{Error, FieldError, FieldErrorCode, Notification, SubmissionTracker};

/// Minimum description length, counted in characters after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Kind of loss being claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Auto,
    Home,
    Health,
    Life,
    Travel,
    Other,
}

impl ClaimType {
    pub const ALL: [Self; 6] = [
        Self::Auto,
        Self::Home,
        Self::Health,
        Self::Life,
        Self::Travel,
        Self::Other,
    ];

    /// Form value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Home => "home",
            Self::Health => "health",
            Self::Life => "life",
            Self::Travel => "travel",
            Self::Other => "other",
        }
    }

    /// Label shown in the claim type picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto Insurance",
            Self::Home => "Home Insurance",
            Self::Health => "Health Insurance",
            Self::Life => "Life Insurance",
            Self::Travel => "Travel Insurance",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a claim type is not one of the picker values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown claim type: {0}")]
pub struct UnknownClaimTypeError(pub String);

impl FromStr for ClaimType {
    type Err = UnknownClaimTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownClaimTypeError(value.to_owned()))
    }
}

/// Raw new-claim form as posted by the dashboard.
///
/// Example JSON:
/// `{"clientName":"Jane Cooper","policyNumber":"POL-2501","claimType":"auto",
/// "incidentDate":"2024-03-01","amount":"1250.00","description":"Rear bumper damaged"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimForm {
    #[schema(example = "Jane Cooper")]
    pub client_name: String,
    #[schema(example = "POL-2501")]
    pub policy_number: String,
    #[schema(example = "auto")]
    pub claim_type: String,
    #[schema(example = "2024-03-01")]
    pub incident_date: String,
    #[schema(example = "1250.00")]
    pub amount: String,
    #[schema(example = "Rear bumper damaged in a car park")]
    pub description: String,
}

fn required<'a>(
    errors: &mut Vec<FieldError>,
    value: &'a str,
    field: &'static str,
    message: &str,
) -> Option<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, FieldErrorCode::Required, message));
        None
    } else {
        Some(trimmed)
    }
}

fn amount_message(err: MoneyParseError) -> &'static str {
    match err {
        MoneyParseError::Empty => "Amount is required",
        MoneyParseError::NotNumeric => "Amount must be a number",
        MoneyParseError::Negative => "Amount must not be negative",
        MoneyParseError::TooPrecise => "Amount must have at most two decimal places",
        MoneyParseError::Overflow => "Amount is too large",
    }
}

impl ClaimForm {
    /// Check every field, collecting all failures.
    ///
    /// # Examples
    /// ```
    /// use insure_backend::domain::ClaimForm;
    ///
    /// let errors = ClaimForm::default().validate().unwrap_err();
    /// assert_eq!(errors.len(), 6);
    /// assert_eq!(errors[0].message, "Client name is required");
    /// ```
    pub fn validate(&self) -> Result<ClaimIntake, Vec<FieldError>> {
        let mut errors = Vec::new();

        let client_name = required(
            &mut errors,
            &self.client_name,
            "clientName",
            "Client name is required",
        );
        let policy_number = required(
            &mut errors,
            &self.policy_number,
            "policyNumber",
            "Policy number is required",
        );

        let claim_type = required(
            &mut errors,
            &self.claim_type,
            "claimType",
            "Claim type is required",
        )
        .and_then(|raw| match raw.parse::<ClaimType>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                errors.push(FieldError::new(
                    "claimType",
                    FieldErrorCode::InvalidChoice,
                    "Claim type must be one of auto, home, health, life, travel or other",
                ));
                None
            }
        });

        let incident_date = required(
            &mut errors,
            &self.incident_date,
            "incidentDate",
            "Incident date is required",
        )
        .and_then(|raw| match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new(
                    "incidentDate",
                    FieldErrorCode::InvalidDate,
                    "Incident date must be a date in YYYY-MM-DD form",
                ));
                None
            }
        });

        let amount = required(&mut errors, &self.amount, "amount", "Amount is required")
            .and_then(|raw| match Money::parse_decimal(raw) {
                Ok(amount) => Some(amount),
                Err(err) => {
                    errors.push(FieldError::new(
                        "amount",
                        FieldErrorCode::InvalidAmount,
                        amount_message(err),
                    ));
                    None
                }
            });

        let description = self.description.trim();
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(FieldError::new(
                "description",
                FieldErrorCode::TooShort,
                "Please provide a detailed description (at least 10 characters)",
            ));
        }

        match (client_name, policy_number, claim_type, incident_date, amount) {
            (
                Some(client_name),
                Some(policy_number),
                Some(claim_type),
                Some(incident_date),
                Some(amount),
            ) if errors.is_empty() => Ok(ClaimIntake {
                client_name: client_name.to_owned(),
                policy_number: policy_number.to_owned(),
                claim_type,
                incident_date,
                amount,
                description: description.to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

/// A claim whose every field passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimIntake {
    client_name: String,
    policy_number: String,
    claim_type: ClaimType,
    incident_date: NaiveDate,
    amount: Money,
    description: String,
}

impl ClaimIntake {
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn policy_number(&self) -> &str {
        &self.policy_number
    }

    pub fn claim_type(&self) -> ClaimType {
        self.claim_type
    }

    pub fn incident_date(&self) -> NaiveDate {
        self.incident_date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Raised when a submitter hands back a blank reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("claim reference must not be empty")]
pub struct EmptyClaimReference;

/// Identifier assigned to an accepted claim, e.g. `CLM-2024-006`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClaimReference(String);

impl ClaimReference {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyClaimReference> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EmptyClaimReference);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for ClaimReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReceipt {
    #[schema(value_type = String, example = "CLM-2024-006")]
    pub reference: ClaimReference,
    pub notification: Notification,
}

/// Why a submission did not produce a receipt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimIntakeError {
    /// One or more fields were rejected; nothing was submitted.
    #[error("claim form is invalid")]
    Invalid(Vec<FieldError>),
    /// Another submission is still running.
    #[error("a claim submission is already in progress")]
    InFlight,
    /// The submitter failed; the notification explains it to the user.
    #[error("claim submission failed")]
    Failed(Notification),
}

impl From<ClaimIntakeError> for Error {
    fn from(err: ClaimIntakeError) -> Self {
        match err {
            ClaimIntakeError::Invalid(fields) => {
                Error::invalid_fields("claim form is invalid", &fields)
            }
            ClaimIntakeError::InFlight => {
                Error::invalid_request("a claim submission is already in progress")
            }
            ClaimIntakeError::Failed(notification) => {
                Error::service_unavailable(notification.description.clone())
                    .with_details(json!({ "notification": notification }))
            }
        }
    }
}

/// Notification shown after a claim is accepted.
pub fn submitted_notification(client_name: &str) -> Notification {
    Notification::info(
        "Claim submitted successfully",
        format!("Claim for {client_name} has been submitted for review."),
    )
}

/// Notification shown when submission fails unexpectedly.
pub fn failed_notification() -> Notification {
    Notification::destructive(
        "Error submitting claim",
        "There was a problem submitting your claim. Please try again.",
    )
}

/// Validates and submits claims.
#[derive(Clone)]
pub struct ClaimIntakeService {
    submitter: Arc<dyn ClaimSubmitter>,
    latency: Arc<dyn SimulatedLatency>,
}

impl ClaimIntakeService {
    pub fn new(submitter: Arc<dyn ClaimSubmitter>, latency: Arc<dyn SimulatedLatency>) -> Self {
        Self { submitter, latency }
    }

    /// Validate `form` and, when clean, submit it once.
    ///
    /// Validation failures leave `tracker` untouched. A submitter failure is
    /// logged, moves `tracker` to failed and is not retried.
    pub async fn submit(
        &self,
        tracker: &mut SubmissionTracker,
        form: &ClaimForm,
    ) -> Result<ClaimReceipt, ClaimIntakeError> {
        let claim = form.validate().map_err(ClaimIntakeError::Invalid)?;
        tracker.begin().map_err(|_| ClaimIntakeError::InFlight)?;
        self.latency.pause().await;

        match self.submitter.submit(&claim).await {
            Ok(reference) => {
                tracker.succeed();
                info!(reference = %reference, claim_type = %claim.claim_type(), "claim submitted");
                Ok(ClaimReceipt {
                    notification: submitted_notification(claim.client_name()),
                    reference,
                })
            }
            Err(err) => {
                tracker.fail();
                warn!(error = %err, "claim submission failed");
                Err(ClaimIntakeError::Failed(failed_notification()))
            }
        }
    }
}
