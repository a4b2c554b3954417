//! Insurance policies.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::label::labelled_enum;
use super::validation::validate_non_empty_field;
use super::{CatalogueValidationError, Money, MoneyDto};

labelled_enum! {
    /// Line of business a policy covers.
    pub enum PolicyType {
        Auto => "Auto Insurance",
        Home => "Home Insurance",
        Life => "Life Insurance",
        Health => "Health Insurance",
        Business => "Business Insurance",
        Travel => "Travel Insurance",
    }
}

labelled_enum! {
    /// Lifecycle state of a policy.
    pub enum PolicyStatus {
        Active => "Active",
        ExpiringSoon => "Expiring Soon",
        Expired => "Expired",
    }
}

/// Input payload for [`Policy::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDraft {
    pub id: String,
    pub client: String,
    pub policy_type: PolicyType,
    pub policy_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium: Money,
    pub status: PolicyStatus,
}

/// Policy row shown on the Policies page.
///
/// ## Invariants
/// - `start_date` is not after `end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[schema(example = "POL-2501")]
    id: String,
    #[schema(example = "Robert Johnson")]
    client: String,
    #[serde(rename = "type")]
    policy_type: PolicyType,
    #[schema(example = "AUTO-2023-1001")]
    policy_number: String,
    #[schema(value_type = String, format = Date)]
    start_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    end_date: NaiveDate,
    #[schema(value_type = MoneyDto)]
    premium: Money,
    status: PolicyStatus,
}

impl Policy {
    /// Validate and construct a policy.
    pub fn new(draft: PolicyDraft) -> Result<Self, CatalogueValidationError> {
        if draft.start_date > draft.end_date {
            return Err(CatalogueValidationError::InvalidDateRange {
                field: "policy.start_date",
            });
        }
        Ok(Self {
            id: validate_non_empty_field(draft.id, "policy.id")?,
            client: validate_non_empty_field(draft.client, "policy.client")?,
            policy_type: draft.policy_type,
            policy_number: validate_non_empty_field(draft.policy_number, "policy.policy_number")?,
            start_date: draft.start_date,
            end_date: draft.end_date,
            premium: draft.premium,
            status: draft.status,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn client(&self) -> &str {
        self.client.as_str()
    }
    pub fn policy_type(&self) -> PolicyType {
        self.policy_type
    }
    pub fn policy_number(&self) -> &str {
        self.policy_number.as_str()
    }
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
    pub fn premium(&self) -> Money {
        self.premium
    }
    pub fn status(&self) -> PolicyStatus {
        self.status
    }
}
