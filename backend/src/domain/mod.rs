//! Domain primitives, policies and services.
//!
//! Purpose: hold everything the dashboard decides without knowing how it is
//! reached. Inbound adapters (HTTP, CLI) and outbound adapters (cookie
//! session, state files) meet the domain only through the types re-exported
//! here and the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Identity, Role, RoleSet: who is signed in and what they may see.
//! - SessionStore, SessionSnapshot: the single-writer session lifecycle.
//! - guard, AppRoute: access decisions for each view.
//! - NAV_ITEMS, visible_items, sidebar: role-filtered navigation.
//! - EntityFilter, Listing: search and category filtering for list views.
//! - DashboardView, summarise: role-keyed landing page.
//! - ClaimForm, ClaimIntakeService: new-claim validation and submission.

mod auth;
pub mod catalogue;
mod claim_intake;
pub mod dashboard;
pub mod error;
mod field_error;
mod identity;
pub mod listing;
pub mod navigation;
mod notification;
pub mod ports;
mod role;
pub mod route_guard;
mod session;
mod submission;
mod trace_id;

pub use self::auth::{AuthValidationError, LoginCredentials, Registration};
pub use self::catalogue::{
    Claim, ClaimStatus, Client, ClientStatus, Money, MoneyDto, Payment, PaymentDirection,
    PaymentMethod, PaymentStatus, PaymentSummary, PaymentType, Policy, PolicyStatus, PolicyType,
};
pub use self::claim_intake::{
    ClaimForm, ClaimIntake, ClaimIntakeError, ClaimIntakeService, ClaimReceipt, ClaimReference,
    ClaimType, EmptyClaimReference, MIN_DESCRIPTION_CHARS, UnknownClaimTypeError,
    failed_notification, submitted_notification,
};
pub use self::dashboard::{
    CatalogueView, DashboardSummary, DashboardView, StatCard, select, summarise,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::field_error::{FieldError, FieldErrorCode};
pub use self::identity::{DisplayName, EmailAddress, Identity, IdentityId, IdentityValidationError};
pub use self::listing::{
    ALL_CLAIM_STATUSES, ALL_CLIENT_STATUSES, ALL_PAYMENT_DIRECTIONS, ALL_PAYMENT_STATUSES,
    ALL_PAYMENT_TYPES, ALL_POLICY_TYPES, EntityFilter, FieldSelector, Listing, PaymentCategories,
};
pub use self::navigation::{NAV_ITEMS, NavItem, VisibleNavItem, sidebar, visible_items};
pub use self::notification::{Notification, NotificationVariant};
pub use self::role::{Role, RoleSet, UnknownRoleError};
pub use self::route_guard::{AppRoute, GuardDecision, LOGIN_PATH, guard, guard_path, pathname};
pub use self::session::{SessionSnapshot, SessionStore, landing_path, restore_snapshot};
pub use self::submission::{SubmissionInFlight, SubmissionState, SubmissionTracker};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use insure_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
