//! Authentication inputs: login credentials and registrations.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to the session store.

use std::fmt;

use zeroize::Zeroizing;

use super::{DisplayName, EmailAddress, Role};

/// Domain error returned when login or registration values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
    /// Role was missing.
    EmptyRole,
    /// Role did not name a known role.
    UnknownRole(String),
    /// Registration name was missing or blank once trimmed.
    EmptyDisplayName,
}

impl AuthValidationError {
    /// Name of the offending payload field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
            Self::EmptyRole | Self::UnknownRole(_) => "role",
            Self::EmptyDisplayName => "name",
        }
    }
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyRole => write!(f, "role must not be empty"),
            Self::UnknownRole(role) => {
                write!(f, "unknown role '{role}': expected admin, agent or customer")
            }
            Self::EmptyDisplayName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

fn parse_role(role: &str) -> Result<Role, AuthValidationError> {
    let role = role.trim();
    if role.is_empty() {
        return Err(AuthValidationError::EmptyRole);
    }
    role.parse()
        .map_err(|_| AuthValidationError::UnknownRole(role.to_owned()))
}

fn parse_email(email: &str) -> Result<EmailAddress, AuthValidationError> {
    EmailAddress::new(email).map_err(|_| AuthValidationError::EmptyEmail)
}

fn guard_password(password: &str) -> Result<Zeroizing<String>, AuthValidationError> {
    if password.is_empty() {
        return Err(AuthValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(password.to_owned()))
}

/// Validated login credentials matched against the account directory.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons. It is wiped from
///   memory on drop.
///
/// # Examples
/// ```
/// use insure_backend::domain::{LoginCredentials, Role};
///
/// let creds = LoginCredentials::try_from_parts(" agent@example.com ", "agent123", "agent").unwrap();
/// assert_eq!(creds.email().as_ref(), "agent@example.com");
/// assert_eq!(creds.role(), Role::Agent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
    role: Role,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password/role inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, AuthValidationError> {
        let email = parse_email(email)?;
        let password = guard_password(password)?;
        let role = parse_role(role)?;
        Ok(Self {
            email,
            password,
            role,
        })
    }

    /// Email used for the directory lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Role the caller claims to hold.
    pub fn role(&self) -> Role {
        self.role
    }
}

/// Validated sign-up request.
///
/// The password is accepted and discarded: registrations are not checked
/// against, or added to, the account directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    display_name: DisplayName,
    email: EmailAddress,
    password: Zeroizing<String>,
    role: Role,
}

impl Registration {
    /// Construct a registration from raw form inputs.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, AuthValidationError> {
        let display_name =
            DisplayName::new(name).map_err(|_| AuthValidationError::EmptyDisplayName)?;
        let email = parse_email(email)?;
        let password = guard_password(password)?;
        let role = parse_role(role)?;
        Ok(Self {
            display_name,
            email,
            password,
            role,
        })
    }

    /// Name to show once signed in.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Email recorded on the new identity.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Role the new identity will hold.
    pub fn role(&self) -> Role {
        self.role
    }
}
