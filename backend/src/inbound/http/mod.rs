//! HTTP inbound adapter exposing REST endpoints.

pub mod claims;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod listings;
pub mod navigation;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

pub use error::{ApiResult, json_config, query_config};

/// Register every `/api/v1` handler on the enclosing scope.
///
/// The caller owns the scope and its session middleware so tests and the
/// server binary mount the same routes.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use insure_backend::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(users::login)
        .service(users::register)
        .service(users::logout)
        .service(users::current_session)
        .service(navigation::navigation)
        .service(navigation::view_decision)
        .service(dashboard::dashboard)
        .service(listings::list_clients)
        .service(listings::list_policies)
        .service(listings::list_claims)
        .service(listings::payment_summary)
        .service(listings::list_payments)
        .service(claims::claim_types)
        .service(claims::submit_claim);
}
