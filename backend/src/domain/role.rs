//! Dashboard roles and role sets.
//!
//! Roles form a closed set so every role-conditional decision is an
//! exhaustive `match`; adding a role is a compile-time-checked change.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Role held by an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Back-office administrator.
    Admin,
    /// Insurance agent managing a client book.
    Agent,
    /// Policy holder.
    Customer,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Agent, Role::Customer];

    /// Wire representation used in forms, payloads and persisted identities.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
            Self::Customer => "customer",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Admin => 0b001,
            Self::Agent => 0b010,
            Self::Customer => 0b100,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a role name does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleError(pub String);

impl fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}': expected admin, agent or customer", self.0)
    }
}

impl std::error::Error for UnknownRoleError {}

impl FromStr for Role {
    type Err = UnknownRoleError;

    /// Parse the exact lower-case wire name.
    ///
    /// # Examples
    /// ```
    /// use insure_backend::domain::Role;
    ///
    /// assert_eq!("agent".parse::<Role>(), Ok(Role::Agent));
    /// assert!("Agent".parse::<Role>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRoleError(s.to_owned()))
    }
}

/// Compact set of roles used for navigation gating.
///
/// # Examples
/// ```
/// use insure_backend::domain::{Role, RoleSet};
///
/// let staff = RoleSet::EMPTY.with(Role::Admin).with(Role::Agent);
/// assert!(staff.contains(Role::Agent));
/// assert!(!staff.contains(Role::Customer));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    /// No roles.
    pub const EMPTY: RoleSet = RoleSet(0);
    /// Every role.
    pub const ALL: RoleSet = RoleSet::EMPTY
        .with(Role::Admin)
        .with(Role::Agent)
        .with(Role::Customer);

    /// Return a copy of the set that also contains `role`.
    #[must_use]
    pub const fn with(self, role: Role) -> Self {
        Self(self.0 | role.bit())
    }

    /// Whether the set contains `role`.
    pub const fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// Iterate over the contained roles in display order.
    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        iter.into_iter().fold(RoleSet::EMPTY, RoleSet::with)
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let roles: Vec<Role> = self.iter().collect();
        let mut seq = serializer.serialize_seq(Some(roles.len()))?;
        for role in roles {
            seq.serialize_element(&role)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("agent", Role::Agent)]
    #[case("customer", Role::Customer)]
    fn parses_wire_names(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(raw.parse::<Role>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("Admin")]
    #[case("auditor")]
    fn rejects_unknown_names(#[case] raw: &str) {
        assert_eq!(raw.parse::<Role>(), Err(UnknownRoleError(raw.to_owned())));
    }

    #[rstest]
    fn role_set_serialises_in_display_order() {
        let set: RoleSet = [Role::Customer, Role::Admin].into_iter().collect();
        let value = serde_json::to_value(set).expect("serialise role set");
        assert_eq!(value, serde_json::json!(["admin", "customer"]));
    }

    #[rstest]
    fn all_contains_every_role() {
        assert!(Role::ALL.into_iter().all(|role| RoleSet::ALL.contains(role)));
        assert!(Role::ALL.into_iter().all(|role| !RoleSet::EMPTY.contains(role)));
    }
}
