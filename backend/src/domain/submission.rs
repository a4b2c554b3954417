//! Submission lifecycle for simulated asynchronous form posts.
//!
//! The tracker only records state; the delay itself lives behind the
//! latency port so the state machine can be exercised without a timer.

use serde::Serialize;
use utoipa::ToSchema;

/// Where a submission currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Raised when a submission starts while another is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a submission is already in progress")]
pub struct SubmissionInFlight;

/// Single-writer submission state machine.
///
/// `idle | succeeded | failed --begin--> submitting --succeed|fail--> ...`
///
/// # Examples
/// ```
/// use insure_backend::domain::{SubmissionState, SubmissionTracker};
///
/// let mut tracker = SubmissionTracker::default();
/// tracker.begin().unwrap();
/// assert!(tracker.begin().is_err());
/// tracker.succeed();
/// assert_eq!(tracker.state(), SubmissionState::Succeeded);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    state: SubmissionState,
}

impl SubmissionTracker {
    /// Current state.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Enter `submitting`, refusing while already there.
    pub fn begin(&mut self) -> Result<(), SubmissionInFlight> {
        if self.is_submitting() {
            return Err(SubmissionInFlight);
        }
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    /// Record a successful completion.
    pub fn succeed(&mut self) {
        self.state = SubmissionState::Succeeded;
    }

    /// Record a failed completion.
    pub fn fail(&mut self) {
        self.state = SubmissionState::Failed;
    }
}
