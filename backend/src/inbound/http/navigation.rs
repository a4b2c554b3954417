//! Sidebar and view-guard endpoints.
//!
//! ```text
//! GET /api/v1/navigation?path=/claims
//! GET /api/v1/views?path=/payments
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AppRoute, GuardDecision, VisibleNavItem, guard_path, sidebar};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::non_blank;

/// Location the client is rendering.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocationQuery {
    /// Current location; defaults to the dashboard root.
    #[param(example = "/claims")]
    pub path: Option<String>,
}

impl LocationQuery {
    fn path(&self) -> &str {
        non_blank(self.path.as_deref()).unwrap_or("/")
    }
}

/// Sidebar entries for the signed-in role.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub items: Vec<VisibleNavItem>,
}

/// Guard outcome for one location.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewDecision {
    pub route: AppRoute,
    #[serde(flatten)]
    pub decision: GuardDecision,
}

/// Sidebar entries visible to the session, with the active entry flagged.
///
/// Without a signed-in identity every entry is listed; the view guard keeps
/// anonymous visitors away from the layout that renders it.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    params(LocationQuery),
    responses(
        (status = 200, description = "Visible sidebar entries", body = NavigationResponse),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["navigation"],
    operation_id = "navigation"
)]
#[get("/navigation")]
pub async fn navigation(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<LocationQuery>,
) -> ApiResult<web::Json<NavigationResponse>> {
    let store = session.session_store(state.credentials.clone(), state.latency.clone())?;
    Ok(web::Json(NavigationResponse {
        items: sidebar(store.identity(), query.path()),
    }))
}

/// Whether the view at `path` may render for this session.
#[utoipa::path(
    get,
    path = "/api/v1/views",
    params(LocationQuery),
    responses(
        (status = 200, description = "Guard decision", body = ViewDecision),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["navigation"],
    operation_id = "viewDecision"
)]
#[get("/views")]
pub async fn view_decision(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<LocationQuery>,
) -> ApiResult<web::Json<ViewDecision>> {
    let store = session.session_store(state.credentials.clone(), state.latency.clone())?;
    let (route, decision) = guard_path(&store.snapshot(), query.path());
    Ok(web::Json(ViewDecision { route, decision }))
}
