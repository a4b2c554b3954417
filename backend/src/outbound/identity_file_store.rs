//! File-backed identity store.
//!
//! The identity lives in `user.json` inside a state directory opened through
//! `cap-std`, so the adapter cannot touch anything outside it. Writes go to a
//! uniquely named staging file first and are renamed into place, so a crash
//! never leaves a half-written identity behind.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use uuid::Uuid;

use crate::domain::Identity;
use crate::domain::ports::{IDENTITY_KEY, IdentityStore, IdentityStoreError};

/// File name holding the persisted identity.
pub const IDENTITY_FILE_NAME: &str = "user.json";

/// [`IdentityStore`] persisting to a JSON file in a state directory.
#[derive(Debug)]
pub struct IdentityFileStore {
    dir: Dir,
    root: PathBuf,
}

impl IdentityFileStore {
    /// Open `root`, creating it when missing.
    ///
    /// # Errors
    /// Returns [`IdentityStoreError::Unavailable`] when the directory cannot
    /// be created or opened.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, IdentityStoreError> {
        let root = root.into();
        Dir::create_ambient_dir_all(&root, ambient_authority())
            .map_err(|error| unavailable(&root, &error))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .map_err(|error| unavailable(&root, &error))?;
        Ok(Self { dir, root })
    }

    /// Full path of the identity file.
    pub fn path(&self) -> PathBuf {
        self.root.join(IDENTITY_FILE_NAME)
    }
}

fn unavailable(path: &Path, error: &io::Error) -> IdentityStoreError {
    IdentityStoreError::unavailable(format!("{}: {error}", path.display()))
}

impl IdentityStore for IdentityFileStore {
    fn load(&self) -> Result<Option<Identity>, IdentityStoreError> {
        let raw = match self.dir.read_to_string(IDENTITY_FILE_NAME) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(unavailable(&self.path(), &error)),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|error| IdentityStoreError::decode(format!("{IDENTITY_KEY}: {error}")))
    }

    fn save(&self, identity: &Identity) -> Result<(), IdentityStoreError> {
        let raw = serde_json::to_vec_pretty(identity)
            .map_err(|error| IdentityStoreError::encode(error.to_string()))?;
        let staging = format!(".{IDENTITY_FILE_NAME}.{}.tmp", Uuid::new_v4().simple());
        let written = self
            .dir
            .write(&staging, raw)
            .and_then(|()| self.dir.rename(&staging, &self.dir, IDENTITY_FILE_NAME));
        if let Err(error) = written {
            let _cleanup_result = self.dir.remove_file(&staging);
            return Err(unavailable(&self.path(), &error));
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), IdentityStoreError> {
        match self.dir.remove_file(IDENTITY_FILE_NAME) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(unavailable(&self.path(), &error)),
        }
    }
}
