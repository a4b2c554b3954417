//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod claim_submitter;
mod credential_provider;
mod identity_store;
mod latency;

#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::{CatalogueQuery, CatalogueQueryError, FixtureCatalogueQuery};
#[cfg(test)]
pub use claim_submitter::MockClaimSubmitter;
pub use claim_submitter::{ClaimSubmitter, ClaimSubmitterError, FixtureClaimSubmitter};
#[cfg(test)]
pub use credential_provider::MockCredentialProvider;
pub use credential_provider::{
    CredentialProvider, CredentialProviderError, FixtureCredentialProvider,
};
#[cfg(test)]
pub use identity_store::MockIdentityStore;
pub use identity_store::{IDENTITY_KEY, IdentityStore, IdentityStoreError, InMemoryIdentityStore};
#[cfg(test)]
pub use latency::MockSimulatedLatency;
pub use latency::{NoLatency, SimulatedLatency};
