//! Catalogue list endpoints with search and category filters.
//!
//! ```text
//! GET /api/v1/clients?search=emma&status=Active
//! GET /api/v1/policies?search=auto&type=Auto%20Insurance
//! GET /api/v1/claims?search=clm&status=Approved
//! GET /api/v1/payments?search=trx&status=Pending&type=Refund
//! GET /api/v1/payments?direction=outgoing
//! GET /api/v1/payments/summary
//! ```
//!
//! Every list requires a signed-in session. Blank category values are treated
//! as absent while the search term is matched as given, whitespace included;
//! an unknown category value matches nothing.

use actix_web::{get, web};
use serde::Deserialize;
use tracing::{debug, error, warn};
use utoipa::IntoParams;

use crate::domain::listing::{
    PaymentCategories, claim_filter, client_filter, payment_filter, policy_filter,
};
use crate::domain::ports::CatalogueQueryError;
use crate::domain::{Claim, Client, Error, Listing, Payment, PaymentSummary, Policy};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::non_blank;

/// Map catalogue adapter failures onto API errors.
pub(crate) fn catalogue_error(err: CatalogueQueryError) -> Error {
    match err {
        CatalogueQueryError::Connection { message } => {
            warn!(%message, "catalogue unavailable");
            Error::service_unavailable("catalogue unavailable")
        }
        CatalogueQueryError::Corrupt { message } => {
            error!(%message, "catalogue returned an invalid record");
            Error::internal(format!("catalogue record is invalid: {message}"))
        }
    }
}

fn search_term(search: Option<&str>) -> &str {
    search.unwrap_or_default()
}

/// Filters for `GET /api/v1/clients`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientQuery {
    /// Matched against name, email and id.
    pub search: Option<String>,
    /// `Active`, `Inactive` or `All`.
    pub status: Option<String>,
}

/// Filters for `GET /api/v1/policies`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PolicyQuery {
    /// Matched against client, policy number and type.
    pub search: Option<String>,
    /// A policy type label such as `Auto Insurance`, or `All Types`.
    #[serde(rename = "type")]
    pub policy_type: Option<String>,
}

/// Filters for `GET /api/v1/claims`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClaimQuery {
    /// Matched against claim id, client name and policy number.
    pub search: Option<String>,
    /// A claim status label, or `All`.
    pub status: Option<String>,
}

/// Filters for `GET /api/v1/payments`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaymentQuery {
    /// Matched against transaction id, client and policy number.
    pub search: Option<String>,
    /// A payment status label, or `All Statuses`.
    pub status: Option<String>,
    /// A payment type label, or `All Types`.
    #[serde(rename = "type")]
    pub payment_type: Option<String>,
    /// `incoming` for premiums, `outgoing` for payouts and refunds, or `all`.
    pub direction: Option<String>,
}

/// List clients.
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    params(ClientQuery),
    responses(
        (status = 200, description = "Filtered clients", body = Listing<Client>),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["catalogue"],
    operation_id = "listClients"
)]
#[get("/clients")]
pub async fn list_clients(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ClientQuery>,
) -> ApiResult<web::Json<Listing<Client>>> {
    session.require_identity()?;
    let records = state.catalogue.clients().await.map_err(catalogue_error)?;
    let filter = client_filter(
        search_term(query.search.as_deref()),
        non_blank(query.status.as_deref()),
    );
    let listing = Listing::filtered(records, &filter, "clients");
    debug!(matched = listing.items.len(), total = listing.total, "listed clients");
    Ok(web::Json(listing))
}

/// List policies.
#[utoipa::path(
    get,
    path = "/api/v1/policies",
    params(PolicyQuery),
    responses(
        (status = 200, description = "Filtered policies", body = Listing<Policy>),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["catalogue"],
    operation_id = "listPolicies"
)]
#[get("/policies")]
pub async fn list_policies(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<PolicyQuery>,
) -> ApiResult<web::Json<Listing<Policy>>> {
    session.require_identity()?;
    let records = state.catalogue.policies().await.map_err(catalogue_error)?;
    let filter = policy_filter(
        search_term(query.search.as_deref()),
        non_blank(query.policy_type.as_deref()),
    );
    Ok(web::Json(Listing::filtered(records, &filter, "policies")))
}

/// List claims.
#[utoipa::path(
    get,
    path = "/api/v1/claims",
    params(ClaimQuery),
    responses(
        (status = 200, description = "Filtered claims", body = Listing<Claim>),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["catalogue"],
    operation_id = "listClaims"
)]
#[get("/claims")]
pub async fn list_claims(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ClaimQuery>,
) -> ApiResult<web::Json<Listing<Claim>>> {
    session.require_identity()?;
    let records = state.catalogue.claims().await.map_err(catalogue_error)?;
    let filter = claim_filter(
        search_term(query.search.as_deref()),
        non_blank(query.status.as_deref()),
    );
    Ok(web::Json(Listing::filtered(records, &filter, "claims")))
}

/// List payments.
#[utoipa::path(
    get,
    path = "/api/v1/payments",
    params(PaymentQuery),
    responses(
        (status = 200, description = "Filtered payments", body = Listing<Payment>),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["catalogue"],
    operation_id = "listPayments"
)]
#[get("/payments")]
pub async fn list_payments(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<PaymentQuery>,
) -> ApiResult<web::Json<Listing<Payment>>> {
    session.require_identity()?;
    let records = state.catalogue.payments().await.map_err(catalogue_error)?;
    let filter = payment_filter(
        search_term(query.search.as_deref()),
        PaymentCategories {
            status: non_blank(query.status.as_deref()),
            payment_type: non_blank(query.payment_type.as_deref()),
            direction: non_blank(query.direction.as_deref()),
        },
    );
    Ok(web::Json(Listing::filtered(records, &filter, "payments")))
}

/// Incoming and outgoing totals over every payment.
#[utoipa::path(
    get,
    path = "/api/v1/payments/summary",
    responses(
        (status = 200, description = "Payment totals", body = PaymentSummary),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["catalogue"],
    operation_id = "paymentSummary"
)]
#[get("/payments/summary")]
pub async fn payment_summary(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PaymentSummary>> {
    session.require_identity()?;
    let payments = state.catalogue.payments().await.map_err(catalogue_error)?;
    Ok(web::Json(PaymentSummary::from_payments(&payments)))
}
