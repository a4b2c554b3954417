//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api/v1` handler and the health probes, the
//! payload schemas they exchange and the session cookie security scheme.
//! Swagger UI serves it in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    AppRoute, Claim, ClaimForm, ClaimReceipt, ClaimStatus, ClaimType, Client, ClientStatus,
    DashboardSummary, DashboardView, Error, ErrorCode, FieldError, FieldErrorCode, GuardDecision,
    Identity, MoneyDto, NavItem, Notification, NotificationVariant, Payment, PaymentDirection,
    PaymentMethod, PaymentStatus, PaymentSummary, PaymentType, Policy, PolicyStatus, PolicyType,
    Role, SessionSnapshot, StatCard, VisibleNavItem,
};
use crate::inbound::http::claims::ClaimTypeOption;
use crate::inbound::http::health::{Phase, ProbeReport};
use crate::inbound::http::navigation::{NavigationResponse, ViewDecision};
use crate::inbound::http::users::{LoginRequest, RegisterRequest, SignedIn};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Encrypted session cookie issued by POST /api/v1/login or /api/v1/register.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "InsureManage backend API",
        description = "Session, role-based navigation, catalogue listings and claim intake \
for the InsureManage dashboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::register,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_session,
        crate::inbound::http::navigation::navigation,
        crate::inbound::http::navigation::view_decision,
        crate::inbound::http::dashboard::dashboard,
        crate::inbound::http::listings::list_clients,
        crate::inbound::http::listings::list_policies,
        crate::inbound::http::listings::list_claims,
        crate::inbound::http::listings::list_payments,
        crate::inbound::http::listings::payment_summary,
        crate::inbound::http::claims::claim_types,
        crate::inbound::http::claims::submit_claim,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error, ErrorCode, FieldError, FieldErrorCode,
        Identity, Role, SessionSnapshot, LoginRequest, RegisterRequest, SignedIn,
        NavItem, VisibleNavItem, NavigationResponse, AppRoute, GuardDecision, ViewDecision,
        DashboardView, DashboardSummary, StatCard,
        Client, ClientStatus, Policy, PolicyType, PolicyStatus, Claim, ClaimStatus,
        Payment, PaymentType, PaymentDirection, PaymentStatus, PaymentMethod, PaymentSummary,
        MoneyDto,
        ClaimForm, ClaimType, ClaimTypeOption, ClaimReceipt, Notification, NotificationVariant,
        ProbeReport, Phase,
    )),
    tags(
        (name = "session", description = "Sign-in, registration and session state"),
        (name = "navigation", description = "Role-filtered sidebar and view guard"),
        (name = "dashboard", description = "Role-keyed landing page"),
        (name = "catalogue", description = "Client, policy, claim and payment listings"),
        (name = "claims", description = "New claim intake"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(schema: &RefOr<Schema>) -> Vec<&str> {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().map(String::as_str).collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/login")]
    #[case("/api/v1/register")]
    #[case("/api/v1/logout")]
    #[case("/api/v1/session")]
    #[case("/api/v1/navigation")]
    #[case("/api/v1/views")]
    #[case("/api/v1/dashboard")]
    #[case("/api/v1/clients")]
    #[case("/api/v1/policies")]
    #[case("/api/v1/claims")]
    #[case("/api/v1/claims/types")]
    #[case("/api/v1/payments")]
    #[case("/api/v1/payments/summary")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("Error", &["code", "message"])]
    #[case("Identity", &["id", "displayName", "email", "role"])]
    #[case("ClaimForm", &["clientName", "policyNumber", "claimType", "incidentDate", "amount", "description"])]
    fn schemas_expose_camel_case_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let present = object_fields(schemas.get(name).expect("schema registered"));
        for field in fields {
            assert!(present.contains(field), "{name} lacks {field}");
        }
    }

    #[rstest]
    fn session_cookie_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
