//! Insurance claims.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::label::labelled_enum;
use super::validation::validate_non_empty_field;
use super::{CatalogueValidationError, Money, MoneyDto};

labelled_enum! {
    /// Adjudication state of a claim.
    pub enum ClaimStatus {
        Pending => "Pending",
        InReview => "In Review",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

impl ClaimStatus {
    /// Whether the claim still awaits a decision.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InReview)
    }
}

/// Input payload for [`Claim::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimDraft {
    pub id: String,
    pub client_name: String,
    pub policy_number: String,
    pub date: NaiveDate,
    pub amount: Money,
    pub status: ClaimStatus,
    pub description: String,
    pub documents: Vec<String>,
}

/// Claim row shown on the Claims page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[schema(example = "CLM-2023-001")]
    id: String,
    #[schema(example = "John Smith")]
    client_name: String,
    #[schema(example = "POL-1234")]
    policy_number: String,
    #[schema(value_type = String, format = Date)]
    date: NaiveDate,
    #[schema(value_type = MoneyDto)]
    amount: Money,
    status: ClaimStatus,
    description: String,
    /// Names of supporting documents.
    documents: Vec<String>,
}

impl Claim {
    /// Validate and construct a claim.
    pub fn new(draft: ClaimDraft) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            id: validate_non_empty_field(draft.id, "claim.id")?,
            client_name: validate_non_empty_field(draft.client_name, "claim.client_name")?,
            policy_number: validate_non_empty_field(draft.policy_number, "claim.policy_number")?,
            date: draft.date,
            amount: draft.amount,
            status: draft.status,
            description: draft.description,
            documents: draft.documents,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn client_name(&self) -> &str {
        self.client_name.as_str()
    }
    pub fn policy_number(&self) -> &str {
        self.policy_number.as_str()
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn amount(&self) -> Money {
        self.amount
    }
    pub fn status(&self) -> ClaimStatus {
        self.status
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn documents(&self) -> &[String] {
        &self.documents
    }
}
