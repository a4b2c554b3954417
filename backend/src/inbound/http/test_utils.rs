//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::test::TestRequest;
use actix_web::{App, web};
use mockable::DefaultClock;

use super::configure_api;
use super::state::HttpState;
use crate::domain::ports::FixtureClaimSubmitter;

/// Build a session middleware configured for tests.
///
/// A fresh key per call; the cookie is named `session` and not `Secure` so
/// plain HTTP test requests carry it.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Fixture-backed state with the system clock for claim references.
pub fn fixture_state() -> HttpState {
    HttpState::fixtures(Arc::new(FixtureClaimSubmitter::new(Arc::new(DefaultClock))))
}

/// The `/api/v1` routes mounted over `state` with a test session.
pub fn api_test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .wrap(test_session_middleware())
            .configure(configure_api),
    )
}

/// The session cookie set on `response`, if any.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// `POST /api/v1/login` for the given credential triple.
pub fn login_request(email: &str, password: &str, role: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/v1/login")
        .set_json(serde_json::json!({"email": email, "password": password, "role": role}))
}
