//! Port accepting validated claims for review.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::Datelike;
use mockable::Clock;

use crate::domain::{ClaimIntake, ClaimReference};

use super::define_port_error;

define_port_error! {
    /// Errors raised by claim submission adapters.
    pub enum ClaimSubmitterError {
        /// The claims backend could not be reached.
        Unavailable { message: String } =>
            "claims service unavailable: {message}",
        /// The backend refused the claim.
        Rejected { message: String } =>
            "claim rejected: {message}",
    }
}

/// Hand a validated claim to the claims backend and receive its reference.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimSubmitter: Send + Sync {
    async fn submit(&self, claim: &ClaimIntake) -> Result<ClaimReference, ClaimSubmitterError>;
}

/// Fixture issuing sequential `CLM-<year>-<nnn>` references.
///
/// The year comes from the injected clock; the sequence starts after the
/// last bundled claim and is shared by every clone of the fixture.
#[derive(Clone)]
pub struct FixtureClaimSubmitter {
    clock: Arc<dyn Clock>,
    sequence: Arc<AtomicU32>,
}

impl FixtureClaimSubmitter {
    /// First sequence number handed out.
    pub const FIRST_SEQUENCE: u32 = 6;

    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            sequence: Arc::new(AtomicU32::new(Self::FIRST_SEQUENCE)),
        }
    }
}

#[async_trait]
impl ClaimSubmitter for FixtureClaimSubmitter {
    async fn submit(&self, _claim: &ClaimIntake) -> Result<ClaimReference, ClaimSubmitterError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let year = self.clock.utc().year();
        ClaimReference::new(format!("CLM-{year}-{sequence:03}"))
            .map_err(|err| ClaimSubmitterError::rejected(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ClaimForm;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    #[fixture]
    fn submitter() -> FixtureClaimSubmitter {
        let utc_now = Utc
            .with_ymd_and_hms(2024, 3, 9, 12, 0, 0)
            .single()
            .expect("fixture timestamp");
        FixtureClaimSubmitter::new(Arc::new(FixtureClock { utc_now }))
    }

    #[fixture]
    fn claim() -> ClaimIntake {
        ClaimForm {
            client_name: "Jane Cooper".to_owned(),
            policy_number: "POL-2501".to_owned(),
            claim_type: "auto".to_owned(),
            incident_date: "2024-03-01".to_owned(),
            amount: "1250.00".to_owned(),
            description: "Rear bumper damaged in a car park".to_owned(),
        }
        .validate()
        .expect("valid claim form")
    }

    #[rstest]
    #[tokio::test]
    async fn references_are_sequential_and_dated(
        submitter: FixtureClaimSubmitter,
        claim: ClaimIntake,
    ) {
        let first = submitter.submit(&claim).await.expect("first submit");
        let second = submitter.clone().submit(&claim).await.expect("second submit");
        assert_eq!(first.as_ref(), "CLM-2024-006");
        assert_eq!(second.as_ref(), "CLM-2024-007");
    }

    #[rstest]
    fn rejected_error_formats_message() {
        let err = ClaimSubmitterError::rejected("duplicate claim");
        assert_eq!(err.to_string(), "claim rejected: duplicate claim");
    }
}
