//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **identity_file_store**: the signed-in identity kept as a JSON file in
//!   a capability-scoped state directory, used by the session CLI.
//! - **latency**: the simulated round-trip delay backed by a Tokio timer.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod identity_file_store;
pub mod latency;

pub use identity_file_store::{IDENTITY_FILE_NAME, IdentityFileStore};
pub use latency::TokioLatency;
