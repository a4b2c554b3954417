//! New claim submission.
//!
//! ```text
//! POST /api/v1/claims {"clientName":"Jane Cooper","policyNumber":"POL-2501",
//!   "claimType":"auto","incidentDate":"2024-03-01","amount":"1250.00",
//!   "description":"Rear bumper damaged in a car park"}
//! GET /api/v1/claims/types
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{ClaimForm, ClaimReceipt, ClaimType, Error, SubmissionTracker};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Submit a new claim for review.
///
/// Every invalid field is reported at once in `details.fields`. A submitter
/// failure returns `503` with the user-facing notification in
/// `details.notification`; nothing is retried.
#[utoipa::path(
    post,
    path = "/api/v1/claims",
    request_body = ClaimForm,
    responses(
        (status = 201, description = "Claim accepted", body = ClaimReceipt),
        (status = 400, description = "Invalid claim form", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Claims service unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["claims"],
    operation_id = "submitClaim"
)]
#[post("/claims")]
pub async fn submit_claim(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ClaimForm>,
) -> ApiResult<HttpResponse> {
    let identity = session.require_identity()?;
    // Each request is its own form instance.
    let mut tracker = SubmissionTracker::default();
    let receipt = state
        .claim_intake
        .submit(&mut tracker, &payload)
        .await
        .map_err(Error::from)?;
    debug!(submitted_by = %identity.id(), reference = %receipt.reference, "claim accepted");
    Ok(HttpResponse::Created().json(receipt))
}

/// One entry of the claim type picker.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTypeOption {
    /// Value posted back as `claimType`.
    pub value: ClaimType,
    #[schema(example = "Auto Insurance")]
    pub label: String,
}

/// Claim types accepted by the new-claim form, in picker order.
#[utoipa::path(
    get,
    path = "/api/v1/claims/types",
    responses(
        (status = 200, description = "Claim type picker entries", body = [ClaimTypeOption]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["claims"],
    operation_id = "claimTypes"
)]
#[get("/claims/types")]
pub async fn claim_types(session: SessionContext) -> ApiResult<web::Json<Vec<ClaimTypeOption>>> {
    session.require_identity()?;
    Ok(web::Json(
        ClaimType::ALL
            .into_iter()
            .map(|value| ClaimTypeOption {
                value,
                label: value.label().to_owned(),
            })
            .collect(),
    ))
}
