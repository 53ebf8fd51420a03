//! Local persistence using redb.
//!
//! Two things survive a restart: the whitelisted auth slice (the
//! authenticated flag the route guard rehydrates against) and the
//! transport's session token. Profile and domain data are always
//! re-fetched fresh on load.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const AUTH_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("auth_state");
const TRANSPORT_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("transport");

const AUTH_KEY: &str = "auth";
const SESSION_TOKEN_KEY: &str = "session_token";

/// The persisted slice of auth state.
///
/// Only the authenticated flag crosses restarts; everything else is
/// re-derived from the remote service during boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersistedAuth {
    /// Whether the last synchronization point left the client authenticated
    pub is_authenticated: bool,
}

/// Storage layer using redb for local persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a storage instance at the given path.
    ///
    /// Creates the parent directory and all tables if missing.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(AUTH_TABLE)?;
            let _ = write_txn.open_table(TRANSPORT_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Persist the auth slice.
    pub fn save_auth(&self, auth: &PersistedAuth) -> Result<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(AUTH_TABLE)?;
            let data =
                serde_json::to_vec(auth).map_err(|e| Error::Serialization(e.to_string()))?;
            table.insert(AUTH_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the persisted auth slice.
    ///
    /// Returns `None` on first run, before anything was persisted.
    pub fn load_auth(&self) -> Result<Option<PersistedAuth>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(AUTH_TABLE)?;

        match table.get(AUTH_KEY)? {
            Some(v) => {
                let auth: PersistedAuth = serde_json::from_slice(v.value())
                    .map_err(|e| Error::Serialization(e.to_string()))?;
                Ok(Some(auth))
            }
            None => Ok(None),
        }
    }

    /// Persist the transport's session token.
    pub fn save_session_token(&self, token: &str) -> Result<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(TRANSPORT_TABLE)?;
            table.insert(SESSION_TOKEN_KEY, token.as_bytes())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the transport's session token, if one was saved.
    pub fn load_session_token(&self) -> Result<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(TRANSPORT_TABLE)?;

        match table.get(SESSION_TOKEN_KEY)? {
            Some(v) => {
                let token = String::from_utf8(v.value().to_vec())
                    .map_err(|e| Error::Serialization(e.to_string()))?;
                Ok(Some(token))
            }
            None => Ok(None),
        }
    }

    /// Remove the transport's session token.
    pub fn clear_session_token(&self) -> Result<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(TRANSPORT_TABLE)?;
            table.remove(SESSION_TOKEN_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
