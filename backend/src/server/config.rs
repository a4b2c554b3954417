//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::DefaultClock;

use insure_backend::InsureSettings;
use insure_backend::domain::ports::{
    FixtureCatalogueQuery, FixtureClaimSubmitter, FixtureCredentialProvider,
};
use insure_backend::inbound::http::session_config::SessionSettings;
use insure_backend::inbound::http::state::{HttpState, HttpStatePorts};
use insure_backend::outbound::TokioLatency;

/// Everything the server needs before it binds.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
}

impl ServerConfig {
    /// Fixture-backed adapters with the configured latency.
    #[must_use]
    pub fn new(session: SessionSettings, settings: &InsureSettings) -> Self {
        let http_state = HttpState::new(HttpStatePorts {
            credentials: Arc::new(FixtureCredentialProvider),
            catalogue: Arc::new(FixtureCatalogueQuery),
            claims: Arc::new(FixtureClaimSubmitter::new(Arc::new(DefaultClock))),
            latency: Arc::new(TokioLatency::new(settings.auth_latency())),
        });
        Self {
            session,
            bind_addr: settings.bind_addr(),
            http_state,
        }
    }
}
