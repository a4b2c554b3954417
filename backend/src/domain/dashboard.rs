//! Role-keyed dashboard selection and summary cards.

use serde::Serialize;
use utoipa::ToSchema;

use super::catalogue::{
    Claim, ClaimStatus, Client, ClientStatus, Payment, PaymentStatus, PaymentSummary, Policy,
    PolicyStatus,
};
use super::{Identity, Role};

/// Summary view shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DashboardView {
    Admin,
    Agent,
    Customer,
}

impl DashboardView {
    /// View for a role.
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Agent => Self::Agent,
            Role::Customer => Self::Customer,
        }
    }

    /// View for a role name; unrecognised names get the customer portal.
    ///
    /// # Examples
    /// ```
    /// use insure_backend::domain::DashboardView;
    ///
    /// assert_eq!(DashboardView::from_role_name("agent"), DashboardView::Agent);
    /// assert_eq!(DashboardView::from_role_name("auditor"), DashboardView::Customer);
    /// ```
    pub fn from_role_name(name: &str) -> Self {
        name.parse().map_or(Self::Customer, Self::for_role)
    }

    /// Page heading.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Admin => "Admin Dashboard",
            Self::Agent => "Agent Dashboard",
            Self::Customer => "My Insurance Portal",
        }
    }

    /// Line shown under the heading.
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Admin => "System overview and management",
            Self::Agent => "Your sales performance and client management",
            Self::Customer => "Manage your policies and claims",
        }
    }
}

/// Select the view for the signed-in identity; nothing renders without one.
pub fn select(identity: Option<&Identity>) -> Option<DashboardView> {
    identity.map(|identity| DashboardView::for_role(identity.role()))
}

/// Borrowed view over the records the stat cards are computed from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogueView<'a> {
    pub clients: &'a [Client],
    pub policies: &'a [Policy],
    pub claims: &'a [Claim],
    pub payments: &'a [Payment],
}

/// A single headline figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    #[schema(example = "Total Clients")]
    pub title: String,
    #[schema(example = "7")]
    pub value: String,
}

impl StatCard {
    fn count(title: &str, value: usize) -> Self {
        Self {
            title: title.to_owned(),
            value: value.to_string(),
        }
    }
}

/// Everything the landing page renders for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub view: DashboardView,
    #[schema(example = "Admin Dashboard")]
    pub heading: String,
    pub subtitle: String,
    #[schema(example = "Welcome back, Admin User")]
    pub greeting: String,
    pub stats: Vec<StatCard>,
}

fn tally<T>(records: &[T], keep: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|&record| keep(record)).count()
}

/// Build the summary for the identity's view.
pub fn summarise(identity: &Identity, catalogue: CatalogueView<'_>) -> DashboardSummary {
    let view = DashboardView::for_role(identity.role());
    let active_policies = tally(catalogue.policies, |p| p.status() == PolicyStatus::Active);
    let pending_payments = tally(catalogue.payments, |p| {
        matches!(p.status(), PaymentStatus::Pending | PaymentStatus::Processing)
    });
    let stats = match view {
        DashboardView::Admin => vec![
            StatCard::count("Total Clients", catalogue.clients.len()),
            StatCard::count("Active Policies", active_policies),
            StatCard::count(
                "Pending Claims",
                tally(catalogue.claims, |c| c.status() == ClaimStatus::Pending),
            ),
            StatCard {
                title: "Premium Revenue".to_owned(),
                value: PaymentSummary::from_payments(catalogue.payments)
                    .total_incoming
                    .to_string(),
            },
        ],
        DashboardView::Agent => vec![
            StatCard::count(
                "Active Clients",
                tally(catalogue.clients, |c| c.status() == ClientStatus::Active),
            ),
            StatCard::count(
                "Policies Expiring Soon",
                tally(catalogue.policies, |p| {
                    p.status() == PolicyStatus::ExpiringSoon
                }),
            ),
            StatCard::count(
                "Claims In Review",
                tally(catalogue.claims, |c| c.status() == ClaimStatus::InReview),
            ),
            StatCard::count("Pending Payments", pending_payments),
        ],
        DashboardView::Customer => vec![
            StatCard::count("Active Policies", active_policies),
            StatCard::count(
                "Open Claims",
                tally(catalogue.claims, |c| c.status().is_open()),
            ),
            StatCard::count("Pending Payments", pending_payments),
        ],
    };

    DashboardSummary {
        view,
        heading: view.heading().to_owned(),
        subtitle: view.subtitle().to_owned(),
        greeting: format!("Welcome back, {}", identity.display_name()),
        stats,
    }
}
