//! Access gate for dashboard views.

use serde::Serialize;
use utoipa::ToSchema;

use super::SessionSnapshot;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Views reachable from the dashboard router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum AppRoute {
    Login,
    Register,
    Dashboard,
    Clients,
    Policies,
    Claims,
    Payments,
    Settings,
    Help,
    /// Fallback for unknown locations.
    NotFound,
}

/// Location without query, fragment or trailing slash.
///
/// # Examples
/// ```
/// use insure_backend::domain::pathname;
///
/// assert_eq!(pathname("/clients/?search=emma#top"), "/clients");
/// assert_eq!(pathname("/"), "/");
/// ```
pub fn pathname(location: &str) -> &str {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

impl AppRoute {
    /// Every routed view, fallback last.
    pub const ALL: [AppRoute; 10] = [
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Dashboard,
        AppRoute::Clients,
        AppRoute::Policies,
        AppRoute::Claims,
        AppRoute::Payments,
        AppRoute::Settings,
        AppRoute::Help,
        AppRoute::NotFound,
    ];

    /// Resolve a location to its view.
    ///
    /// Query strings and fragments are ignored, as is a single trailing slash.
    /// Anything unrecognised resolves to [`AppRoute::NotFound`].
    ///
    /// # Examples
    /// ```
    /// use insure_backend::domain::AppRoute;
    ///
    /// assert_eq!(AppRoute::from_path("/claims?status=All"), AppRoute::Claims);
    /// assert_eq!(AppRoute::from_path("/nowhere"), AppRoute::NotFound);
    /// ```
    pub fn from_path(path: &str) -> Self {
        let path = pathname(path);
        Self::ALL
            .into_iter()
            .find(|route| route.path() == Some(path))
            .unwrap_or(Self::NotFound)
    }

    /// Canonical location; the fallback has none.
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Login => Some(LOGIN_PATH),
            Self::Register => Some("/register"),
            Self::Dashboard => Some("/"),
            Self::Clients => Some("/clients"),
            Self::Policies => Some("/policies"),
            Self::Claims => Some("/claims"),
            Self::Payments => Some("/payments"),
            Self::Settings => Some("/settings"),
            Self::Help => Some("/help"),
            Self::NotFound => None,
        }
    }

    /// Whether the view sits behind the guard.
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::NotFound)
    }
}

/// Outcome of evaluating the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum GuardDecision {
    /// Render the requested content.
    Render,
    /// Render only a loading placeholder while the session restores.
    Loading,
    /// Render nothing and navigate to `to`.
    Redirect {
        #[schema(value_type = String, example = "/login")]
        to: &'static str,
    },
}

/// Decide what a view may render for the given session.
///
/// Order matters: unguarded views always render; a loading session blocks
/// guarded views before identity is consulted.
pub fn guard(session: &SessionSnapshot, require_auth: bool) -> GuardDecision {
    if !require_auth {
        return GuardDecision::Render;
    }
    if session.is_loading {
        return GuardDecision::Loading;
    }
    match session.identity {
        Some(_) => GuardDecision::Render,
        None => GuardDecision::Redirect { to: LOGIN_PATH },
    }
}

/// Guard a location using its route's auth requirement.
pub fn guard_path(session: &SessionSnapshot, path: &str) -> (AppRoute, GuardDecision) {
    let route = AppRoute::from_path(path);
    (route, guard(session, route.requires_auth()))
}
