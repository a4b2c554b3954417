//! Driven port for the directory of known accounts.
//!
//! The session store asks this port whether a credential triple names an
//! account. Adapters decide where accounts live; the fixture keeps the three
//! demonstration logins in memory.

use async_trait::async_trait;

use crate::domain::{DisplayName, EmailAddress, Identity, IdentityId, LoginCredentials, Role};

use super::define_port_error;

define_port_error! {
    /// Errors raised by credential directory adapters.
    pub enum CredentialProviderError {
        /// The directory could not be reached.
        Unavailable { message: String } =>
            "credential directory unavailable: {message}",
        /// A stored account could not be turned into an identity.
        Corrupt { message: String } =>
            "credential directory entry is corrupt: {message}",
    }
}

/// Port resolving credentials to an identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Return the identity whose email, password and role all match.
    ///
    /// `Ok(None)` means no account matched; it is not an error.
    async fn verify(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, CredentialProviderError>;
}

struct DemoAccount {
    id: &'static str,
    display_name: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        id: "1",
        display_name: "Admin User",
        email: "admin@example.com",
        password: "admin123",
        role: Role::Admin,
    },
    DemoAccount {
        id: "2",
        display_name: "Agent User",
        email: "agent@example.com",
        password: "agent123",
        role: Role::Agent,
    },
    DemoAccount {
        id: "3",
        display_name: "Customer User",
        email: "customer@example.com",
        password: "customer123",
        role: Role::Customer,
    },
];

impl DemoAccount {
    fn matches(&self, credentials: &LoginCredentials) -> bool {
        self.email == credentials.email().as_ref()
            && self.password == credentials.password()
            && self.role == credentials.role()
    }

    fn identity(&self) -> Result<Identity, CredentialProviderError> {
        let corrupt = |err: crate::domain::IdentityValidationError| {
            CredentialProviderError::corrupt(err.to_string())
        };
        Ok(Identity::new(
            IdentityId::new(self.id).map_err(corrupt)?,
            DisplayName::new(self.display_name).map_err(corrupt)?,
            EmailAddress::new(self.email).map_err(corrupt)?,
            self.role,
        ))
    }
}

/// In-memory directory holding the demonstration accounts.
///
/// | email                  | password      | role       |
/// |------------------------|---------------|------------|
/// | `admin@example.com`    | `admin123`    | `admin`    |
/// | `agent@example.com`    | `agent123`    | `agent`    |
/// | `customer@example.com` | `customer123` | `customer` |
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialProvider;

#[async_trait]
impl CredentialProvider for FixtureCredentialProvider {
    async fn verify(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, CredentialProviderError> {
        DEMO_ACCOUNTS
            .iter()
            .find(|account| account.matches(credentials))
            .map(DemoAccount::identity)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin@example.com", "admin123", "admin", Some("1"))]
    #[case("agent@example.com", "agent123", "agent", Some("2"))]
    #[case("customer@example.com", "customer123", "customer", Some("3"))]
    #[case("admin@example.com", "admin123", "agent", None)]
    #[case("admin@example.com", "Admin123", "admin", None)]
    #[case("ADMIN@example.com", "admin123", "admin", None)]
    #[case("nobody@example.com", "admin123", "admin", None)]
    #[tokio::test]
    async fn fixture_requires_all_three_fields(
        #[case] email: &str,
        #[case] password: &str,
        #[case] role: &str,
        #[case] expected_id: Option<&str>,
    ) {
        let creds =
            LoginCredentials::try_from_parts(email, password, role).expect("credentials shape");
        let identity = FixtureCredentialProvider
            .verify(&creds)
            .await
            .expect("fixture never fails");
        assert_eq!(
            identity.as_ref().map(|identity| identity.id().as_ref()),
            expected_id
        );
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_identity_carries_profile() {
        let creds = LoginCredentials::try_from_parts("agent@example.com", "agent123", "agent")
            .expect("credentials shape");
        let identity = FixtureCredentialProvider
            .verify(&creds)
            .await
            .expect("fixture never fails")
            .expect("agent account exists");
        assert_eq!(identity.display_name().as_ref(), "Agent User");
        assert_eq!(identity.role(), Role::Agent);
    }
}
