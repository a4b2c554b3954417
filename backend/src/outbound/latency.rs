//! Timer-backed simulated latency.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::SimulatedLatency;

/// Sleeps for a fixed duration on every pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokioLatency {
    delay: Duration,
}

impl TokioLatency {
    /// Round trip used when nothing is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for TokioLatency {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl SimulatedLatency for TokioLatency {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_to_one_second() {
        assert_eq!(TokioLatency::default().delay(), Duration::from_secs(1));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn pause_waits_for_the_configured_delay() {
        let latency = TokioLatency::new(Duration::from_millis(250));
        let started = tokio::time::Instant::now();
        latency.pause().await;
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
