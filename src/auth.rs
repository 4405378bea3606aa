//! Mock admin login.
//!
//! The gate is a presence check on a stored token. It decides which views
//! the session offers and protects nothing else.

use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage key holding the admin token
pub const TOKEN_KEY: &str = "adminToken";

const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid password. Hint: admin123")]
    InvalidPassword,
    #[error("failed to access token storage at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("token storage at {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key/value store standing in for browser local storage
pub trait TokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError>;
    fn remove(&mut self, key: &str) -> Result<(), AuthError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AuthError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON object on disk, so a login outlives one session like local storage does
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, AuthError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(AuthError::Storage {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| AuthError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), AuthError> {
        let storage_err = |source| AuthError::Storage {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(storage_err)?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|source| AuthError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(storage_err)
    }
}

impl TokenStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), AuthError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// Admin route guard backed by a [`TokenStorage`]
pub struct AuthGate {
    storage: Box<dyn TokenStorage>,
    authenticated: bool,
}

impl AuthGate {
    /// Start from whatever token the storage already holds
    pub fn new(storage: Box<dyn TokenStorage>) -> Result<Self, AuthError> {
        let authenticated = storage.get(TOKEN_KEY)?.is_some();
        debug!("Auth gate starts {}", if authenticated { "open" } else { "closed" });
        Ok(Self {
            storage,
            authenticated,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            storage: Box::new(MemoryStorage::default()),
            authenticated: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self, password: &str) -> Result<(), AuthError> {
        if password != ADMIN_PASSWORD {
            warn!("Rejected admin login attempt");
            return Err(AuthError::InvalidPassword);
        }

        let token = format!("admin-token-{}", Utc::now().timestamp_millis());
        self.storage.set(TOKEN_KEY, &token)?;
        self.authenticated = true;
        info!("Admin logged in");
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.storage.remove(TOKEN_KEY)?;
        self.authenticated = false;
        info!("Admin logged out");
        Ok(())
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("authenticated", &self.authenticated)
            .finish()
    }
}
