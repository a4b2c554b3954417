//! Port for the artificial delay around simulated network calls.
//!
//! Login, registration and claim submission all pause here before
//! completing. Keeping the timer behind a port lets domain tests drive the
//! state machines without waiting.

use async_trait::async_trait;

/// Suspend the caller for the simulated round-trip time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SimulatedLatency: Send + Sync {
    /// Wait for one simulated round trip.
    async fn pause(&self);
}

/// Latency fixture that returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLatency;

#[async_trait]
impl SimulatedLatency for NoLatency {
    async fn pause(&self) {}
}
