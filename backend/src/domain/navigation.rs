//! Role-gated sidebar navigation.
//!
//! Menu entries are static configuration. Hiding an entry is a presentation
//! concern only: access to the underlying data is enforced by the route
//! guard and the data endpoints, never by the menu.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Identity, Role, RoleSet, pathname};

const STAFF: RoleSet = RoleSet::EMPTY.with(Role::Admin).with(Role::Agent);
const BILLING: RoleSet = RoleSet::EMPTY.with(Role::Admin).with(Role::Customer);

/// Static sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    #[schema(value_type = String, example = "Clients")]
    pub label: &'static str,
    #[schema(value_type = String, example = "/clients")]
    pub path: &'static str,
    /// Icon identifier understood by the front end.
    #[schema(value_type = String, example = "users")]
    pub icon: &'static str,
    #[schema(value_type = Vec<Role>)]
    pub allowed_roles: RoleSet,
}

/// The dashboard sidebar, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/",
        icon: "home",
        allowed_roles: RoleSet::ALL,
    },
    NavItem {
        label: "Clients",
        path: "/clients",
        icon: "users",
        allowed_roles: STAFF,
    },
    NavItem {
        label: "Policies",
        path: "/policies",
        icon: "file-text",
        allowed_roles: RoleSet::ALL,
    },
    NavItem {
        label: "Claims",
        path: "/claims",
        icon: "clipboard-list",
        allowed_roles: RoleSet::ALL,
    },
    NavItem {
        label: "Payments",
        path: "/payments",
        icon: "credit-card",
        allowed_roles: BILLING,
    },
    NavItem {
        label: "Settings",
        path: "/settings",
        icon: "settings",
        allowed_roles: RoleSet::ALL,
    },
    NavItem {
        label: "Help",
        path: "/help",
        icon: "help-circle",
        allowed_roles: RoleSet::ALL,
    },
];

/// Navigation entry as rendered for the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibleNavItem {
    #[serde(flatten)]
    pub item: NavItem,
    /// Whether the entry's path equals the current location.
    pub active: bool,
}

/// Entries visible to `identity`, in configuration order.
///
/// Without an identity every entry is returned.
///
/// # Examples
/// ```
/// use insure_backend::domain::{NAV_ITEMS, visible_items};
///
/// assert_eq!(visible_items(NAV_ITEMS, None).count(), NAV_ITEMS.len());
/// ```
pub fn visible_items<'a>(
    items: &'a [NavItem],
    identity: Option<&'a Identity>,
) -> impl Iterator<Item = &'a NavItem> + 'a {
    items.iter().filter(move |item| {
        identity.is_none_or(|identity| item.allowed_roles.contains(identity.role()))
    })
}

/// Visible sidebar entries with the active flag set for `current_path`.
///
/// Query strings, fragments and a trailing slash do not affect which entry
/// is active.
pub fn sidebar(identity: Option<&Identity>, current_path: &str) -> Vec<VisibleNavItem> {
    let current_path = pathname(current_path);
    visible_items(NAV_ITEMS, identity)
        .map(|item| VisibleNavItem {
            item: *item,
            active: item.path == current_path,
        })
        .collect()
}
