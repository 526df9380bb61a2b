//! The remote data store the site reads from and writes into.
//!
//! Everything goes through [`Gateway`]: parameterized selects and counts,
//! single-record inserts, and the admin session calls. Rows travel as JSON
//! objects and are decoded into the entity types by [`fetch`].

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::GatewayError;
use crate::models::Collection;

pub use memory::*;
pub use postgres::*;
pub use query::*;

mod memory;
mod postgres;
mod query;

pub type Record = serde_json::Map<String, Value>;

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

pub trait Gateway {
    fn select(
        &self,
        query: &Select,
    ) -> impl Future<Output = Result<Vec<Record>, GatewayError>> + Send;

    fn count(&self, query: &Select) -> impl Future<Output = Result<u64, GatewayError>> + Send;

    fn insert(
        &self,
        collection: Collection,
        record: Record,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    /// Fails with [`GatewayError::InvalidCredentials`] whatever the reason
    /// (unknown email, wrong password).
    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, GatewayError>> + Send;

    fn sign_out(&self, token: &str) -> impl Future<Output = Result<(), GatewayError>> + Send;

    fn get_session(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<Session>, GatewayError>> + Send;
}

/// Runs `query` and decodes every row into `T`.
pub async fn fetch<T, G>(gateway: &G, query: &Select) -> Result<Vec<T>, GatewayError>
where
    T: DeserializeOwned,
    G: Gateway + ?Sized,
{
    gateway
        .select(query)
        .await?
        .into_iter()
        .map(|row| {
            serde_json::from_value(Value::Object(row)).map_err(|source| GatewayError::Decode {
                collection: query.collection,
                source,
            })
        })
        .collect()
}

/// Like [`fetch`] for single-row collections; `None` when the table is empty.
pub async fn fetch_one<T, G>(gateway: &G, query: &Select) -> Result<Option<T>, GatewayError>
where
    T: DeserializeOwned,
    G: Gateway + ?Sized,
{
    let query = query.clone().limit(1);
    Ok(fetch(gateway, &query).await?.into_iter().next())
}

fn into_record(value: Value, collection: Collection) -> Result<Record, GatewayError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(GatewayError::Decode {
            collection,
            source: <serde_json::Error as serde::de::Error>::custom(format!(
                "expected a JSON object, got {other}"
            )),
        }),
    }
}
