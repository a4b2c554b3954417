//! Liveness and readiness probes for orchestrators and load balancers.
//!
//! The server moves through three phases: starting (alive, not ready),
//! serving (alive and ready) and draining (neither). Probes never touch the
//! session cookie and are mounted outside `/api/v1`.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use tracing::info;

/// Process lifecycle phase reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Starting,
    Serving,
    Draining,
}

impl Phase {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }

    const fn as_u8(self) -> u8 {
        match self {
            Self::Starting => 0,
            Self::Serving => 1,
            Self::Draining => 2,
        }
    }
}

/// Probe body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProbeReport {
    pub phase: Phase,
}

/// Shared lifecycle flag read by both probes.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting.as_u8()),
        }
    }
}

impl HealthState {
    /// A process that has not bound its listener yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Accept traffic. Ignored once draining has begun.
    pub fn mark_ready(&self) {
        let swapped = self.phase.compare_exchange(
            Phase::Starting.as_u8(),
            Phase::Serving.as_u8(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        if swapped.is_ok() {
            info!("server ready");
        }
    }

    /// Fail both probes so orchestrators stop routing before shutdown.
    pub fn mark_draining(&self) {
        self.phase.store(Phase::Draining.as_u8(), Ordering::Release);
        info!("server draining");
    }

    fn probe(&self, ok: impl FnOnce(Phase) -> bool) -> HttpResponse {
        let phase = self.phase();
        let mut response = if ok(phase) {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(ProbeReport { phase })
    }
}

/// Readiness probe: 200 while serving, 503 while starting or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = ProbeReport),
        (status = 503, description = "Server is not ready", body = ProbeReport)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    state.probe(|phase| phase == Phase::Serving)
}

/// Liveness probe: 200 until draining starts.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is alive", body = ProbeReport),
        (status = 503, description = "Server is shutting down", body = ProbeReport)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    state.probe(|phase| phase != Phase::Draining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[case(Phase::Starting, StatusCode::SERVICE_UNAVAILABLE, StatusCode::OK)]
    #[case(Phase::Serving, StatusCode::OK, StatusCode::OK)]
    #[case(Phase::Draining, StatusCode::SERVICE_UNAVAILABLE, StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn probes_follow_the_phase(
        #[case] phase: Phase,
        #[case] ready_status: StatusCode,
        #[case] live_status: StatusCode,
    ) {
        let state = web::Data::new(HealthState::new());
        match phase {
            Phase::Starting => {}
            Phase::Serving => state.mark_ready(),
            Phase::Draining => state.mark_draining(),
        }
        let app =
            actix_test::init_service(App::new().app_data(state).service(ready).service(live)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(res.status(), ready_status);
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/live").to_request(),
        )
        .await;
        assert_eq!(res.status(), live_status);
    }

    #[rstest]
    fn draining_is_not_undone_by_ready() {
        let state = HealthState::new();
        state.mark_draining();
        state.mark_ready();
        assert_eq!(state.phase(), Phase::Draining);
    }
}
