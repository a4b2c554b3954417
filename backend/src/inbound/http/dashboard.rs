//! Landing page summary.
//!
//! ```text
//! GET /api/v1/dashboard
//! ```

use actix_web::{get, web};
use futures_util::try_join;

use crate::domain::{CatalogueView, DashboardSummary, Error, summarise};
use crate::inbound::http::ApiResult;
use crate::inbound::http::listings::catalogue_error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Role-keyed headline figures for the signed-in identity.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard for the signed-in role", body = DashboardSummary),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["dashboard"],
    operation_id = "dashboard"
)]
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DashboardSummary>> {
    let identity = session.require_identity()?;
    let catalogue = &state.catalogue;
    let (clients, policies, claims, payments) = try_join!(
        catalogue.clients(),
        catalogue.policies(),
        catalogue.claims(),
        catalogue.payments(),
    )
    .map_err(catalogue_error)?;
    Ok(web::Json(summarise(
        &identity,
        CatalogueView {
            clients: &clients,
            policies: &policies,
            claims: &claims,
            payments: &payments,
        },
    )))
}
