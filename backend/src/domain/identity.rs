//! Authenticated identity held by a session.
//!
//! An [`Identity`] never carries a password: it is built from a verified
//! account or a registration after the secret has been checked or dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Role;

/// Validation errors returned by the identity constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    EmptyId,
    PaddedId,
    EmptyDisplayName,
    EmptyEmail,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "identity id must not be empty"),
            Self::PaddedId => write!(f, "identity id must not contain surrounding whitespace"),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for IdentityValidationError {}

/// Opaque identity identifier.
///
/// Seeded accounts use short numeric ids; registrations receive a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityId(String);

impl IdentityId {
    /// Validate and construct an [`IdentityId`].
    pub fn new(id: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(IdentityValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(IdentityValidationError::PaddedId);
        }
        Ok(Self(id))
    }

    /// Generate a fresh identifier for a new registration.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for IdentityId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<IdentityId> for String {
    fn from(value: IdentityId) -> Self {
        value.0
    }
}

impl TryFrom<String> for IdentityId {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human readable name shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`]; surrounding whitespace is trimmed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, IdentityValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdentityValidationError::EmptyDisplayName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Up to two upper-case initials, as rendered in the avatar.
    ///
    /// # Examples
    /// ```
    /// use insure_backend::domain::DisplayName;
    ///
    /// let name = DisplayName::new("Ada King Lovelace").unwrap();
    /// assert_eq!(name.initials(), "AK");
    /// ```
    pub fn initials(&self) -> String {
        self.0
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Account email address.
///
/// Only blankness is checked; credential lookups compare the trimmed value
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`]; surrounding whitespace is trimmed.
    pub fn new(email: impl AsRef<str>) -> Result<Self, IdentityValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdentityValidationError::EmptyEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The signed-in user.
///
/// ## Invariants
/// - Every component is validated; deserialisation re-runs the validation, so
///   a tampered persisted value is rejected rather than trusted.
/// - No secret material is held.
///
/// # Examples
/// ```
/// use insure_backend::domain::{DisplayName, EmailAddress, Identity, IdentityId, Role};
///
/// let identity = Identity::new(
///     IdentityId::new("2").unwrap(),
///     DisplayName::new("Agent User").unwrap(),
///     EmailAddress::new("agent@example.com").unwrap(),
///     Role::Agent,
/// );
/// assert_eq!(identity.role(), Role::Agent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Identity {
    #[schema(value_type = String, example = "2")]
    id: IdentityId,
    #[schema(value_type = String, example = "Agent User")]
    display_name: DisplayName,
    #[schema(value_type = String, example = "agent@example.com")]
    email: EmailAddress,
    role: Role,
}

impl Identity {
    /// Assemble an identity from validated components.
    pub fn new(id: IdentityId, display_name: DisplayName, email: EmailAddress, role: Role) -> Self {
        Self {
            id,
            display_name,
            email,
            role,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &IdentityId {
        &self.id
    }

    /// Name shown in the dashboard.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Account email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Role driving navigation and dashboard selection.
    pub fn role(&self) -> Role {
        self.role
    }
}
