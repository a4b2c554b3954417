//! Backend entry-point: wires REST endpoints, health probes and OpenAPI docs.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use insure_backend::InsureSettings;
use insure_backend::inbound::http::health::HealthState;
use insure_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = InsureSettings::load_from_iter(std::env::args_os())
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::current())
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(session, &settings))?;
    let handle = server.handle();

    actix_web::rt::spawn(async move {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "signal listener failed");
            return;
        }
        info!("shutdown requested");
        health_state.mark_draining();
        handle.stop(true).await;
    });

    server.await
}
