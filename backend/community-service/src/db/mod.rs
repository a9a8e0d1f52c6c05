/// Document store access layer
///
/// This module provides:
/// - `DocumentStore`: the store-client interface injected into services
/// - `PgDocumentStore`: PostgreSQL/JSONB backed collections
/// - `MemoryDocumentStore`: process-local collections for demos and tests
/// - `ensure_schema`: idempotent bootstrap of the `documents` table
pub mod memory_store;
pub mod pg_store;
pub mod schema;

pub use memory_store::MemoryDocumentStore;
pub use pg_store::PgDocumentStore;
pub use schema::ensure_schema;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Connection string prefix selecting the in-memory store.
pub const MEMORY_URL_SCHEME: &str = "memory://";

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures reported by a document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store is not configured")]
    NotConfigured,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A stored document: the entity body plus the envelope assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Value,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Decode the body into a storage record, exposing the envelope `id` and
    /// `created_at` as record fields.
    pub fn into_record<T: DeserializeOwned>(self) -> StoreResult<T> {
        let mut body = match self.body {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::InvalidDocument(format!(
                    "document {} body is {}, expected an object",
                    self.id,
                    json_type_name(&other)
                )))
            }
        };
        body.insert("id".to_string(), Value::String(self.id));
        body.insert(
            "created_at".to_string(),
            Value::String(self.created_at.to_rfc3339()),
        );

        Ok(serde_json::from_value(Value::Object(body))?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Restricts a find to documents whose body field holds a timestamp at or
/// after `at`. Documents without the field are excluded.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    TimestampOnOrAfter {
        field: &'static str,
        at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Envelope insertion time
    CreatedAt,
    /// Timestamp stored in a body field
    Timestamp(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sort {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Desc,
        }
    }
}

/// Filter/sort/limit for a single collection read. Without a sort, documents
/// come back in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct FindQuery {
    pub filter: Option<Filter>,
    pub sort: Option<Sort>,
    pub limit: usize,
}

impl FindQuery {
    pub fn limit(limit: usize) -> Self {
        Self {
            filter: None,
            sort: None,
            limit,
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sorted_by(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Store-client interface shared by every service.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend label used in logs
    fn backend(&self) -> &'static str;

    async fn find(&self, collection: &str, query: &FindQuery) -> StoreResult<Vec<Document>>;

    /// Insert a JSON object into `collection`, returning the generated id.
    async fn insert(&self, collection: &str, body: Value) -> StoreResult<String>;

    async fn ping(&self) -> StoreResult<()>;

    /// Names of non-empty collections, alphabetically, at most `limit`.
    async fn list_collections(&self, limit: usize) -> StoreResult<Vec<String>>;

    /// One-time setup run at startup, before serving requests.
    async fn prepare(&self) -> StoreResult<()> {
        Ok(())
    }
}

pub type SharedStore = Arc<dyn DocumentStore>;

/// Build the process-wide store client from configuration.
///
/// Returns `Ok(None)` when no connection string is configured. PostgreSQL
/// pools connect lazily, so an unreachable database does not fail here.
pub fn connect_store(config: &DatabaseConfig) -> StoreResult<Option<SharedStore>> {
    let Some(url) = config.url.as_deref() else {
        return Ok(None);
    };

    if url.starts_with(MEMORY_URL_SCHEME) {
        return Ok(Some(Arc::new(MemoryDocumentStore::new())));
    }

    let store = PgDocumentStore::connect_lazy(
        url,
        config.max_connections,
        std::time::Duration::from_secs(config.acquire_timeout_secs),
    )?;
    Ok(Some(Arc::new(store)))
}
