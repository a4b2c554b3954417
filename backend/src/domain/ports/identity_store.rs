//! Port for the durable slot that remembers who is signed in.
//!
//! Exactly one key is stored: [`IDENTITY_KEY`], holding the whole serialised
//! [`Identity`]. An absent key means nobody is signed in. The trait is
//! synchronous and carries no `Send` bound so request-local stores such as
//! the Actix cookie session can implement it directly.

use std::sync::Mutex;

use crate::domain::Identity;

use super::define_port_error;

/// Key under which the signed-in identity is persisted.
pub const IDENTITY_KEY: &str = "user";

define_port_error! {
    /// Errors raised by identity store adapters.
    pub enum IdentityStoreError {
        /// The persisted value exists but is not a valid identity.
        Decode { message: String } =>
            "stored identity could not be decoded: {message}",
        /// The identity could not be serialised for storage.
        Encode { message: String } =>
            "identity could not be encoded: {message}",
        /// The backing storage could not be read or written.
        Unavailable { message: String } =>
            "identity storage unavailable: {message}",
    }
}

/// Load, save and clear the persisted identity.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityStore {
    /// Read the persisted identity, if any.
    fn load(&self) -> Result<Option<Identity>, IdentityStoreError>;

    /// Replace the persisted identity.
    fn save(&self, identity: &Identity) -> Result<(), IdentityStoreError>;

    /// Remove the persisted identity. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), IdentityStoreError>;
}

impl<T: IdentityStore + ?Sized> IdentityStore for &T {
    fn load(&self) -> Result<Option<Identity>, IdentityStoreError> {
        (**self).load()
    }

    fn save(&self, identity: &Identity) -> Result<(), IdentityStoreError> {
        (**self).save(identity)
    }

    fn clear(&self) -> Result<(), IdentityStoreError> {
        (**self).clear()
    }
}

impl<T: IdentityStore + ?Sized> IdentityStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<Identity>, IdentityStoreError> {
        (**self).load()
    }

    fn save(&self, identity: &Identity) -> Result<(), IdentityStoreError> {
        (**self).save(identity)
    }

    fn clear(&self) -> Result<(), IdentityStoreError> {
        (**self).clear()
    }
}

/// Process-local store used by tests and the fixture wiring.
///
/// The slot holds the serialised JSON rather than the typed value so a
/// corrupt entry can be planted and decoded the same way a real adapter
/// would.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    slot: Mutex<Option<String>>,
}

impl InMemoryIdentityStore {
    /// Store whose slot already holds `raw`, decoded lazily on [`load`].
    ///
    /// [`load`]: IdentityStore::load
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw persisted JSON, if any.
    pub fn raw(&self) -> Result<Option<String>, IdentityStoreError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, IdentityStoreError> {
        self.slot
            .lock()
            .map_err(|err| IdentityStoreError::unavailable(err.to_string()))
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn load(&self) -> Result<Option<Identity>, IdentityStoreError> {
        self.lock()?
            .as_deref()
            .map(|raw| {
                serde_json::from_str(raw).map_err(|err| IdentityStoreError::decode(err.to_string()))
            })
            .transpose()
    }

    fn save(&self, identity: &Identity) -> Result<(), IdentityStoreError> {
        let raw = serde_json::to_string(identity)
            .map_err(|err| IdentityStoreError::encode(err.to_string()))?;
        *self.lock()? = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), IdentityStoreError> {
        *self.lock()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{DisplayName, EmailAddress, IdentityId, Role};
    use rstest::{fixture, rstest};

    #[fixture]
    fn identity() -> Identity {
        Identity::new(
            IdentityId::new("2").expect("id"),
            DisplayName::new("Agent User").expect("name"),
            EmailAddress::new("agent@example.com").expect("email"),
            Role::Agent,
        )
    }

    #[rstest]
    fn empty_store_loads_nothing() {
        let store = InMemoryIdentityStore::default();
        assert_eq!(store.load().expect("load"), None);
    }

    #[rstest]
    fn saved_identity_loads_back(identity: Identity) {
        let store = InMemoryIdentityStore::default();
        store.save(&identity).expect("save");
        assert_eq!(store.load().expect("load"), Some(identity));
    }

    #[rstest]
    fn clear_is_idempotent(identity: Identity) {
        let store = InMemoryIdentityStore::default();
        store.save(&identity).expect("save");
        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert_eq!(store.raw().expect("raw"), None);
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"id":"1","displayName":"A","email":"a@example.com","role":"auditor"}"#)]
    #[case(r#"{"id":"1","displayName":"A","email":"a@example.com","role":"admin","password":"x"}"#)]
    fn corrupt_entries_fail_to_decode(#[case] raw: &str) {
        let store = InMemoryIdentityStore::with_raw(raw);
        let err = store.load().expect_err("decode should fail");
        assert!(matches!(err, IdentityStoreError::Decode { .. }));
    }

    #[rstest]
    fn persisted_json_omits_passwords(identity: Identity) {
        let store = InMemoryIdentityStore::default();
        store.save(&identity).expect("save");
        let raw = store.raw().expect("raw").expect("present");
        assert!(!raw.contains("password"));
        assert!(raw.contains(r#""role":"agent""#));
    }
}
