use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{Duration, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::{Gateway, Record, Select, Session, compare_values};
use crate::common::GatewayError;
use crate::models::{Collection, TestimonialStatus};
use crate::services::PasswordManager;

#[derive(Default)]
struct Store {
    rows: HashMap<Collection, Vec<Record>>,
    inserts: Vec<(Collection, Record)>,
    accounts: HashMap<String, String>,
    sessions: HashMap<String, Session>,
}

/// In-process gateway with the same query semantics as [`super::PgGateway`].
///
/// Used for local runs without a database and throughout the tests: it keeps
/// a log of every insert, and reads or writes can be made to fail or to hang.
#[derive(Default)]
pub struct MemoryGateway {
    store: Mutex<Store>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    stalled: AtomicBool,
    reads: AtomicUsize,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores rows as they would come back from the database, bypassing the
    /// insert log.
    pub fn seed(&self, collection: Collection, rows: impl IntoIterator<Item = Record>) {
        self.store()
            .rows
            .entry(collection)
            .or_default()
            .extend(rows);
    }

    pub fn add_account(&self, email: &str, password: &str) -> Result<(), GatewayError> {
        let hash = PasswordManager::hash_password(password)
            .map_err(|e| GatewayError::PasswordHash(e.to_string()))?;
        self.store().accounts.insert(email.to_string(), hash);
        Ok(())
    }

    /// Overwrites one field on the row with the given id. Returns whether a
    /// row was found.
    pub fn update_field(&self, collection: Collection, id: &str, field: &str, value: Value) -> bool {
        let mut store = self.store();
        let row = store
            .rows
            .get_mut(&collection)
            .and_then(|rows| {
                rows.iter_mut()
                    .find(|row| row.get("id").and_then(Value::as_str) == Some(id))
            });

        match row {
            Some(row) => {
                row.insert(field.to_string(), value);
                true
            }
            None => false,
        }
    }

    pub fn rows(&self, collection: Collection) -> Vec<Record> {
        self.store()
            .rows
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Records inserted through [`Gateway::insert`], oldest first.
    pub fn inserted(&self, collection: Collection) -> Vec<Record> {
        self.store()
            .inserts
            .iter()
            .filter(|(c, _)| *c == collection)
            .map(|(_, record)| record.clone())
            .collect()
    }

    pub fn insert_count(&self) -> usize {
        self.store().inserts.len()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent call hang forever.
    pub fn stall(&self, stalled: bool) {
        self.stalled.store(stalled, Ordering::SeqCst);
    }

    async fn enter(&self) {
        if self.stalled.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
    }

    fn read(&self, query: &Select) -> Result<Vec<Record>, GatewayError> {
        query.validate()?;
        self.reads.fetch_add(1, Ordering::SeqCst);

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("reads are failing".into()));
        }

        let mut rows: Vec<Record> = self
            .store()
            .rows
            .get(&query.collection)
            .map(|rows| rows.iter().filter(|row| query.matches(row)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = &query.order_by {
            // Nulls sort last in both directions, as in the Postgres gateway.
            rows.sort_by(|a, b| {
                let a = a.get(&order.field).unwrap_or(&Value::Null);
                let b = b.get(&order.field).unwrap_or(&Value::Null);

                match (a.is_null(), b.is_null()) {
                    (true, true) => std::cmp::Ordering::Equal,
                    (true, false) => std::cmp::Ordering::Greater,
                    (false, true) => std::cmp::Ordering::Less,
                    (false, false) if order.ascending => compare_values(a, b),
                    (false, false) => compare_values(a, b).reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            rows.truncate(usize::try_from(limit).unwrap_or_default());
        }

        Ok(rows)
    }
}

impl Gateway for MemoryGateway {
    async fn select(&self, query: &Select) -> Result<Vec<Record>, GatewayError> {
        self.enter().await;
        self.read(query)
    }

    async fn count(&self, query: &Select) -> Result<u64, GatewayError> {
        self.enter().await;
        let rows = self.read(query)?;
        Ok(rows.len() as u64)
    }

    async fn insert(&self, collection: Collection, mut record: Record) -> Result<(), GatewayError> {
        self.enter().await;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("writes are failing".into()));
        }

        if record.is_empty() {
            return Err(GatewayError::EmptyRecord(collection));
        }

        record
            .entry("id")
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        record
            .entry("created_at")
            .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));

        if collection == Collection::Testimonials {
            record
                .entry("status")
                .or_insert_with(|| Value::String(TestimonialStatus::Pending.as_str().into()));
        }

        let mut store = self.store();
        store
            .rows
            .entry(collection)
            .or_default()
            .push(record.clone());
        store.inserts.push((collection, record));

        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, GatewayError> {
        self.enter().await;

        let email = email.trim();
        let stored_hash = self.store().accounts.get(email).cloned();
        let known = stored_hash.is_some();
        let stored_hash = stored_hash.unwrap_or_else(|| PasswordManager::dummy_hash().to_string());

        let password_valid =
            PasswordManager::verify_password(password, &stored_hash).unwrap_or(false);

        if !known || !password_valid {
            return Err(GatewayError::InvalidCredentials);
        }

        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            email: email.to_string(),
            expires_at: Utc::now() + Duration::hours(12),
        };

        self.store()
            .sessions
            .insert(session.token.clone(), session.clone());

        Ok(session)
    }

    async fn sign_out(&self, token: &str) -> Result<(), GatewayError> {
        self.enter().await;
        self.store().sessions.remove(token);
        Ok(())
    }

    async fn get_session(&self, token: &str) -> Result<Option<Session>, GatewayError> {
        self.enter().await;

        let session = self
            .store()
            .sessions
            .get(token)
            .filter(|session| session.expires_at > Utc::now())
            .cloned();

        Ok(session)
    }
}
