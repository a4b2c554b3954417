//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and services and remain testable without I/O.
//! Everything here is immutable and shared across workers; per-visitor state
//! lives in the session cookie.

use std::sync::Arc;

use crate::domain::ClaimIntakeService;
use crate::domain::ports::{
    CatalogueQuery, ClaimSubmitter, CredentialProvider, FixtureCatalogueQuery,
    FixtureCredentialProvider, NoLatency, SimulatedLatency,
};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub credentials: Arc<dyn CredentialProvider>,
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub claims: Arc<dyn ClaimSubmitter>,
    pub latency: Arc<dyn SimulatedLatency>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub credentials: Arc<dyn CredentialProvider>,
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub latency: Arc<dyn SimulatedLatency>,
    pub claim_intake: ClaimIntakeService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use insure_backend::domain::ports::{
    ///     FixtureCatalogueQuery, FixtureClaimSubmitter, FixtureCredentialProvider, NoLatency,
    /// };
    /// use insure_backend::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     credentials: Arc::new(FixtureCredentialProvider),
    ///     catalogue: Arc::new(FixtureCatalogueQuery),
    ///     claims: Arc::new(FixtureClaimSubmitter::new(Arc::new(mockable::DefaultClock))),
    ///     latency: Arc::new(NoLatency),
    /// });
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            credentials,
            catalogue,
            claims,
            latency,
        } = ports;
        Self {
            claim_intake: ClaimIntakeService::new(claims, latency.clone()),
            credentials,
            catalogue,
            latency,
        }
    }

    /// State backed by the fixture directory and catalogue with no delay.
    pub fn fixtures(claims: Arc<dyn ClaimSubmitter>) -> Self {
        Self::new(HttpStatePorts {
            credentials: Arc::new(FixtureCredentialProvider),
            catalogue: Arc::new(FixtureCatalogueQuery),
            claims,
            latency: Arc::new(NoLatency),
        })
    }
}
