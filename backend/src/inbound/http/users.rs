//! Session API handlers.
//!
//! ```text
//! POST /api/v1/login {"email":"admin@example.com","password":"admin123","role":"admin"}
//! POST /api/v1/register {"name":"Pat Doe","email":"pat@example.com","password":"pw","role":"customer"}
//! POST /api/v1/logout
//! GET /api/v1/session
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    AuthValidationError, Error, Identity, LoginCredentials, Registration, SessionSnapshot,
    landing_path,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::auth_validation_error;

/// Message returned for every credential mismatch.
pub const INVALID_CREDENTIALS: &str = "Invalid email, password, or role";

/// Login request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "admin123")]
    pub password: String,
    #[schema(example = "admin")]
    pub role: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = AuthValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password, &value.role)
    }
}

/// Registration request body for `POST /api/v1/register`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "Pat Doe")]
    pub name: String,
    #[schema(example = "pat@example.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "customer")]
    pub role: String,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = AuthValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.name, &value.email, &value.password, &value.role)
    }
}

/// Body returned once a visitor is signed in.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedIn {
    pub identity: Identity,
    /// Where the dashboard should navigate next.
    #[schema(example = "/")]
    pub landing_path: &'static str,
}

impl SignedIn {
    fn from_identity(identity: Identity) -> Self {
        Self {
            landing_path: landing_path(identity.role()),
            identity,
        }
    }
}

fn signed_in(identity: Option<&Identity>) -> ApiResult<web::Json<SignedIn>> {
    identity
        .cloned()
        .map(|identity| web::Json(SignedIn::from_identity(identity)))
        .ok_or_else(|| Error::internal("session has no identity after sign-in"))
}

/// Sign in with email, password and role.
///
/// Any mismatch yields the same `401` so callers cannot probe which field
/// was wrong.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SignedIn, headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 503, description = "Credential directory unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SignedIn>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(auth_validation_error)?;
    let mut store = session.session_store(state.credentials.clone(), state.latency.clone())?;
    if !store.login(&credentials).await? {
        return Err(Error::unauthorized(INVALID_CREDENTIALS));
    }
    signed_in(store.identity())
}

/// Create an account and sign it in.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered and signed in", body = SignedIn, headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["session"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<SignedIn>> {
    let registration =
        Registration::try_from(payload.into_inner()).map_err(auth_validation_error)?;
    let mut store = session.session_store(state.credentials.clone(), state.latency.clone())?;
    store.register(&registration).await?;
    signed_in(store.identity())
}

/// Sign out. Succeeds whether or not anyone was signed in.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["session"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(state: web::Data<HttpState>, session: SessionContext) -> ApiResult<HttpResponse> {
    let mut store = session.session_store(state.credentials.clone(), state.latency.clone())?;
    store.logout()?;
    Ok(HttpResponse::NoContent().finish())
}

/// Current session state.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "currentSession",
    security([])
)]
#[get("/session")]
pub async fn current_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SessionSnapshot>> {
    let store = session.session_store(state.credentials.clone(), state.latency.clone())?;
    Ok(web::Json(store.snapshot()))
}
