//! Signed-in identity and its lifecycle.
//!
//! [`SessionStore`] is the single writer for one visitor's session. It is
//! owned by whoever drives the visitor (an HTTP request, the CLI) and every
//! mutation takes `&mut self`, so operations on one session never overlap.
//! Readers take a [`SessionSnapshot`], a plain copy of the current state.
//!
//! ```text
//! new ──restore──▶ ready ──login/register──▶ (loading) ──▶ ready
//!                    ▲                                        │
//!                    └──────────────── logout ◀───────────────┘
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use super::ports::{CredentialProvider, IdentityStore, IdentityStoreError, SimulatedLatency};
use super::{Error, Identity, IdentityId, LoginCredentials, Registration, Role};

/// Read-only view of a session at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// True before the first restore and while a sign-in is in flight.
    pub is_loading: bool,
    /// The signed-in identity, absent when signed out.
    pub identity: Option<Identity>,
}

impl SessionSnapshot {
    /// Settled snapshot for `identity`.
    pub fn ready(identity: Option<Identity>) -> Self {
        Self {
            is_loading: false,
            identity,
        }
    }
}

/// Where a role lands after signing in.
///
/// # Examples
/// ```
/// use insure_backend::domain::{landing_path, Role};
///
/// assert_eq!(landing_path(Role::Agent), "/clients");
/// ```
pub const fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/",
        Role::Agent => "/clients",
        Role::Customer => "/policies",
    }
}

fn storage_error(err: IdentityStoreError) -> Error {
    Error::internal(format!("failed to persist session: {err}"))
}

/// Read the persisted identity from `store` as a settled snapshot.
///
/// An undecodable entry is discarded and reported as signed out. Storage
/// that cannot be read at all is an error.
pub fn restore_snapshot<S: IdentityStore + ?Sized>(store: &S) -> Result<SessionSnapshot, Error> {
    match store.load() {
        Ok(identity) => Ok(SessionSnapshot::ready(identity)),
        Err(IdentityStoreError::Decode { message }) => {
            warn!(error = %message, "discarding unreadable persisted identity");
            if let Err(err) = store.clear() {
                warn!(error = %err, "failed to clear unreadable persisted identity");
            }
            Ok(SessionSnapshot::ready(None))
        }
        Err(err) => Err(Error::internal(format!("failed to read session: {err}"))),
    }
}

/// Owns one visitor's identity and keeps it in step with an [`IdentityStore`].
///
/// Identity is only ever set after the store accepted it, so a failed write
/// never leaves the visitor half signed in.
pub struct SessionStore<S> {
    store: S,
    credentials: Arc<dyn CredentialProvider>,
    latency: Arc<dyn SimulatedLatency>,
    identity: Option<Identity>,
    is_loading: bool,
}

impl<S: IdentityStore> SessionStore<S> {
    /// Build a session that is loading until [`restore`](Self::restore) runs.
    pub fn new(
        store: S,
        credentials: Arc<dyn CredentialProvider>,
        latency: Arc<dyn SimulatedLatency>,
    ) -> Self {
        Self {
            store,
            credentials,
            latency,
            identity: None,
            is_loading: true,
        }
    }

    /// Load the persisted identity and mark the session ready.
    ///
    /// See [`restore_snapshot`] for how unreadable entries are handled; the
    /// session is marked ready and signed out even when restoring fails.
    pub fn restore(&mut self) -> Result<(), Error> {
        self.identity = None;
        let restored = restore_snapshot(&self.store);
        self.is_loading = false;
        self.identity = restored?.identity;
        Ok(())
    }

    /// Current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_loading: self.is_loading,
            identity: self.identity.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Sign in when email, password and role all match a known account.
    ///
    /// Returns `Ok(false)` for any mismatch; the current identity is left as
    /// it was. Errors are reserved for an unreachable directory or store.
    pub async fn login(&mut self, credentials: &LoginCredentials) -> Result<bool, Error> {
        self.is_loading = true;
        let outcome = self.authenticate(credentials).await;
        self.is_loading = false;
        outcome
    }

    async fn authenticate(&mut self, credentials: &LoginCredentials) -> Result<bool, Error> {
        self.latency.pause().await;
        let found = self.credentials.verify(credentials).await.map_err(|err| {
            Error::service_unavailable(format!("credential check failed: {err}"))
        })?;
        match found {
            Some(identity) => {
                info!(user_id = %identity.id(), role = %identity.role(), "signed in");
                self.persist(identity)?;
                Ok(true)
            }
            None => {
                info!(role = %credentials.role(), "sign-in rejected");
                Ok(false)
            }
        }
    }

    /// Create a fresh identity for `registration` and sign it in.
    ///
    /// No duplicate-email check is made; every call issues a new id.
    pub async fn register(&mut self, registration: &Registration) -> Result<bool, Error> {
        self.is_loading = true;
        self.latency.pause().await;
        let identity = Identity::new(
            IdentityId::random(),
            registration.display_name().clone(),
            registration.email().clone(),
            registration.role(),
        );
        let user_id = identity.id().clone();
        let outcome = self.persist(identity);
        self.is_loading = false;
        outcome?;
        info!(user_id = %user_id, role = %registration.role(), "registered");
        Ok(true)
    }

    /// Forget the identity here and in the store. Signing out twice is fine.
    pub fn logout(&mut self) -> Result<(), Error> {
        if let Some(identity) = self.identity.take() {
            info!(user_id = %identity.id(), "signed out");
        }
        self.store.clear().map_err(storage_error)
    }

    fn persist(&mut self, identity: Identity) -> Result<(), Error> {
        self.store.save(&identity).map_err(storage_error)?;
        self.identity = Some(identity);
        Ok(())
    }
}
