//! Catalogue records browsed from the dashboard.
//!
//! Clients, policies, claims and payments are read-only in-memory records.
//! Each is a validated entity built from a draft; categorical fields are
//! closed enums whose display label doubles as the filter value.

use std::fmt;

mod claim;
mod client;
mod label;
mod money;
mod payment;
mod policy;
pub mod seed;
mod validation;

pub use claim::{Claim, ClaimDraft, ClaimStatus};
pub use client::{Client, ClientDraft, ClientStatus};
pub use money::{Money, MoneyDto, MoneyParseError};
pub use payment::{
    Payment, PaymentDirection, PaymentDraft, PaymentMethod, PaymentStatus, PaymentSummary,
    PaymentType,
};
pub use policy::{Policy, PolicyDraft, PolicyStatus, PolicyType};

/// Validation errors returned by catalogue record constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueValidationError {
    EmptyField { field: &'static str },
    InvalidDate { field: &'static str },
    InvalidDateRange { field: &'static str },
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidDate { field } => write!(f, "{field} is not a calendar date"),
            Self::InvalidDateRange { field } => {
                write!(f, "{field} must not be after the end date")
            }
        }
    }
}

impl std::error::Error for CatalogueValidationError {}
