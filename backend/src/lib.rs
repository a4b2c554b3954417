//! InsureManage backend library.
//!
//! Hexagonal layout: [`domain`] holds the session lifecycle, access rules,
//! filters and claim intake; [`inbound`] adapts them to HTTP; [`outbound`]
//! implements the ports the domain drives.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
pub use settings::InsureSettings;
