//! Port for reading the catalogue records behind the list views.

use async_trait::async_trait;

use crate::domain::catalogue::{seed, CatalogueValidationError, Claim, Client, Payment, Policy};

use super::define_port_error;

define_port_error! {
    /// Errors raised by catalogue query adapters.
    pub enum CatalogueQueryError {
        /// The catalogue source could not be reached.
        Connection { message: String } =>
            "catalogue connection failed: {message}",
        /// A stored record failed validation.
        Corrupt { message: String } =>
            "catalogue record is invalid: {message}",
    }
}

impl From<CatalogueValidationError> for CatalogueQueryError {
    fn from(err: CatalogueValidationError) -> Self {
        Self::corrupt(err.to_string())
    }
}

/// Read-only access to clients, policies, claims and payments.
///
/// Every method returns the full collection in display order; filtering
/// happens in the domain so adapters stay dumb.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    async fn clients(&self) -> Result<Vec<Client>, CatalogueQueryError>;

    async fn policies(&self) -> Result<Vec<Policy>, CatalogueQueryError>;

    async fn claims(&self) -> Result<Vec<Claim>, CatalogueQueryError>;

    async fn payments(&self) -> Result<Vec<Payment>, CatalogueQueryError>;
}

/// Fixture serving the bundled demonstration records.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueQuery;

#[async_trait]
impl CatalogueQuery for FixtureCatalogueQuery {
    async fn clients(&self) -> Result<Vec<Client>, CatalogueQueryError> {
        Ok(seed::clients()?)
    }

    async fn policies(&self) -> Result<Vec<Policy>, CatalogueQueryError> {
        Ok(seed::policies()?)
    }

    async fn claims(&self) -> Result<Vec<Claim>, CatalogueQueryError> {
        Ok(seed::claims()?)
    }

    async fn payments(&self) -> Result<Vec<Payment>, CatalogueQueryError> {
        Ok(seed::payments()?)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_serves_records_in_display_order() {
        let query = FixtureCatalogueQuery;
        let claims = query.claims().await.expect("claims");
        let ids: Vec<_> = claims.iter().map(Claim::id).collect();
        assert_eq!(
            ids,
            [
                "CLM-2023-001",
                "CLM-2023-002",
                "CLM-2023-003",
                "CLM-2023-004",
                "CLM-2023-005"
            ]
        );
        assert_eq!(query.clients().await.expect("clients").len(), 7);
        assert_eq!(query.policies().await.expect("policies").len(), 7);
        assert_eq!(query.payments().await.expect("payments").len(), 7);
    }

    #[rstest]
    fn validation_failures_become_corrupt_errors() {
        let err = CatalogueQueryError::from(CatalogueValidationError::EmptyField {
            field: "claim.id",
        });
        assert!(matches!(err, CatalogueQueryError::Corrupt { .. }));
        assert!(err.to_string().contains("claim.id"));
    }
}
