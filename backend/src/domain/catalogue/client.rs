//! Client book entries.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::CatalogueValidationError;
use super::label::labelled_enum;
use super::validation::validate_non_empty_field;

labelled_enum! {
    /// Whether a client currently holds business with the agency.
    pub enum ClientStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}

/// Input payload for [`Client::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub policies: u32,
    pub status: ClientStatus,
    pub join_date: NaiveDate,
}

/// Insurance client as listed on the Clients page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[schema(example = "CL-1001")]
    id: String,
    #[schema(example = "Robert Johnson")]
    name: String,
    email: String,
    phone: String,
    address: String,
    /// Number of policies held.
    policies: u32,
    status: ClientStatus,
    #[schema(value_type = String, format = Date, example = "2023-04-15")]
    join_date: NaiveDate,
}

impl Client {
    /// Validate and construct a client.
    pub fn new(draft: ClientDraft) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            id: validate_non_empty_field(draft.id, "client.id")?,
            name: validate_non_empty_field(draft.name, "client.name")?,
            email: validate_non_empty_field(draft.email, "client.email")?,
            phone: draft.phone,
            address: draft.address,
            policies: draft.policies,
            status: draft.status,
            join_date: draft.join_date,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }
    pub fn address(&self) -> &str {
        self.address.as_str()
    }
    pub fn policies(&self) -> u32 {
        self.policies
    }
    pub fn status(&self) -> ClientStatus {
        self.status
    }
    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }
}
