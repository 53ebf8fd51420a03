//! In-memory fake of the remote data service for integration tests.
//!
//! Behaves like the hosted backend for the paths the client exercises:
//! accounts with passwords and verification flags, one current session,
//! document collections with equality filtering, and a file bucket that
//! only remembers names. Individual operations can be forced to fail to
//! exercise error paths, and every operation is counted.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use inkstream_core::remote::DataService;
use inkstream_core::types::{DocumentList, FileRef, Identity, Query, Session};
use inkstream_core::{Error, Result};

#[derive(Clone)]
struct FakeAccount {
    id: String,
    email: String,
    password: String,
    name: String,
    verified: bool,
}

#[derive(Default)]
struct FakeState {
    accounts: Vec<FakeAccount>,
    session: Option<Session>,
    collections: HashMap<String, Vec<serde_json::Value>>,
    files: HashMap<String, String>,
    next_id: u64,
    calls: HashMap<String, usize>,
    failing: HashSet<String>,
}

pub struct FakeService {
    state: Mutex<FakeState>,
}

impl Default for FakeService {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
        }
    }

    /// Register an account and return its identity id.
    pub fn add_account(&self, email: &str, password: &str, name: &str, verified: bool) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("user{}", state.next_id);
        state.accounts.push(FakeAccount {
            id: id.clone(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            verified,
        });
        id
    }

    /// Install an active session for the given account.
    pub fn set_session(&self, user_id: &str, expire: DateTime<Utc>) {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        state.session = Some(Session {
            id: format!("sess{}", state.next_id),
            user_id: user_id.to_string(),
            expire,
            secret: format!("secret{}", state.next_id),
        });
    }

    /// Insert a document directly, returning its id.
    pub fn seed_document(&self, collection: &str, mut data: serde_json::Value) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("doc{}", state.next_id);
        data["$id"] = serde_json::Value::String(id.clone());
        data["$createdAt"] = serde_json::Value::String(
            (Utc::now() + Duration::milliseconds(state.next_id as i64)).to_rfc3339(),
        );
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(data);
        id
    }

    /// Force an operation to fail with a remote error.
    pub fn fail_on(&self, op: &str) {
        self.state.lock().unwrap().failing.insert(op.to_string());
    }

    /// Stop forcing an operation to fail.
    pub fn recover(&self, op: &str) {
        self.state.lock().unwrap().failing.remove(op);
    }

    /// How many times an operation ran (list/get counts are per
    /// collection, keyed `"op:collection"`).
    pub fn call_count(&self, key: &str) -> usize {
        self.state.lock().unwrap().calls.get(key).copied().unwrap_or(0)
    }

    /// Whether a session is still installed remotely.
    pub fn has_session(&self) -> bool {
        self.state.lock().unwrap().session.is_some()
    }

    /// Documents currently in a collection.
    pub fn documents_in(&self, collection: &str) -> Vec<serde_json::Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn track(state: &mut FakeState, key: &str) -> Result<()> {
        *state.calls.entry(key.to_string()).or_insert(0) += 1;
        let op = key.split(':').next().unwrap_or(key);
        if state.failing.contains(op) || state.failing.contains(key) {
            return Err(Error::Remote(format!("{} forced to fail", key)));
        }
        Ok(())
    }
}

fn matches_queries(doc: &serde_json::Value, queries: &[Query]) -> bool {
    queries.iter().all(|q| match q {
        Query::Equal { attribute, values } => match &doc[attribute.as_str()] {
            serde_json::Value::String(s) => values.iter().any(|v| v == s),
            serde_json::Value::Array(items) => items
                .iter()
                .any(|item| item.as_str().is_some_and(|s| values.iter().any(|v| v == s))),
            _ => false,
        },
        Query::OrderDesc { .. } | Query::Limit(_) => true,
    })
}

#[async_trait]
impl DataService for FakeService {
    async fn create_account(&self, email: &str, password: &str, name: &str) -> Result<Identity> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "create_account")?;
        if state.accounts.iter().any(|a| a.email == email) {
            return Err(Error::Remote("account already exists".to_string()));
        }
        state.next_id += 1;
        let id = format!("user{}", state.next_id);
        state.accounts.push(FakeAccount {
            id: id.clone(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            verified: false,
        });
        Ok(Identity {
            id,
            email: email.to_string(),
            name: name.to_string(),
            email_verified: false,
        })
    }

    async fn create_email_session(&self, email: &str, password: &str) -> Result<Session> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "create_email_session")?;
        let account = state
            .accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .cloned()
            .ok_or_else(|| Error::Remote("invalid credentials".to_string()))?;
        state.next_id += 1;
        let session = Session {
            id: format!("sess{}", state.next_id),
            user_id: account.id,
            expire: Utc::now() + Duration::hours(1),
            secret: format!("secret{}", state.next_id),
        };
        state.session = Some(session.clone());
        Ok(session)
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "current_session")?;
        Ok(state.session.clone())
    }

    async fn current_identity(&self) -> Result<Option<Identity>> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "current_identity")?;
        let Some(session) = &state.session else {
            return Ok(None);
        };
        let user_id = session.user_id.clone();
        Ok(state.accounts.iter().find(|a| a.id == user_id).map(|a| Identity {
            id: a.id.clone(),
            email: a.email.clone(),
            name: a.name.clone(),
            email_verified: a.verified,
        }))
    }

    async fn delete_current_session(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "delete_current_session")?;
        state.session = None;
        Ok(())
    }

    async fn send_verification(&self, _redirect_url: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "send_verification")?;
        Ok(())
    }

    async fn confirm_verification(&self, user_id: &str, _secret: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "confirm_verification")?;
        match state.accounts.iter_mut().find(|a| a.id == user_id) {
            Some(account) => {
                account.verified = true;
                Ok(())
            }
            None => Err(Error::NotFound(format!("account {}", user_id))),
        }
    }

    async fn create_document(
        &self,
        collection: &str,
        mut data: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, &format!("create_document:{}", collection))?;
        state.next_id += 1;
        let id = format!("doc{}", state.next_id);
        data["$id"] = serde_json::Value::String(id);
        data["$createdAt"] = serde_json::Value::String(
            (Utc::now() + Duration::milliseconds(state.next_id as i64)).to_rfc3339(),
        );
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(data.clone());
        Ok(data)
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<serde_json::Value>> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, &format!("get_document:{}", collection))?;
        Ok(state
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d["$id"] == id).cloned()))
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, &format!("update_document:{}", collection))?;
        let doc = state
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d["$id"] == id))
            .ok_or_else(|| Error::NotFound(format!("document {}", id)))?;
        if let Some(fields) = data.as_object() {
            for (key, value) in fields {
                doc[key.as_str()] = value.clone();
            }
        }
        Ok(doc.clone())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, &format!("delete_document:{}", collection))?;
        let docs = state
            .collections
            .get_mut(collection)
            .ok_or_else(|| Error::NotFound(format!("collection {}", collection)))?;
        let before = docs.len();
        docs.retain(|d| d["$id"] != id);
        if docs.len() == before {
            return Err(Error::NotFound(format!("document {}", id)));
        }
        Ok(())
    }

    async fn list_documents(&self, collection: &str, queries: &[Query]) -> Result<DocumentList> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, &format!("list_documents:{}", collection))?;
        let documents: Vec<serde_json::Value> = state
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches_queries(d, queries))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(DocumentList {
            total: documents.len() as u64,
            documents,
        })
    }

    async fn upload_file(&self, _bucket: &str, filename: &str, _bytes: Vec<u8>) -> Result<FileRef> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "upload_file")?;
        state.next_id += 1;
        let id = format!("file{}", state.next_id);
        state.files.insert(id.clone(), filename.to_string());
        Ok(FileRef {
            id,
            name: filename.to_string(),
            mime_type: "image/png".to_string(),
            size: 0,
        })
    }

    async fn delete_file(&self, _bucket: &str, file_id: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        FakeService::track(&mut state, "delete_file")?;
        state.files.remove(file_id);
        Ok(())
    }

    fn file_preview_url(&self, bucket: &str, file_id: &str) -> String {
        format!("fake://{}/{}", bucket, file_id)
    }
}
