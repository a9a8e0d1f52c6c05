//! Shared fixtures for community-service integration tests.
//!
//! Provides store doubles that fail in controlled ways so fallback paths can
//! be exercised without a database.

#![allow(dead_code)]

use async_trait::async_trait;
use community_service::db::{
    Document, DocumentStore, FindQuery, MemoryDocumentStore, SharedStore, StoreError, StoreResult,
};
use community_service::services::{ContentService, DiagnosticsService, SignupService};
use community_service::AppState;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Store whose every call fails, simulating an unreachable database.
#[derive(Default)]
pub struct UnreachableStore {
    calls: AtomicUsize,
}

impl UnreachableStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    fn backend(&self) -> &'static str {
        "unreachable"
    }

    async fn find(&self, _collection: &str, _query: &FindQuery) -> StoreResult<Vec<Document>> {
        self.fail()
    }

    async fn insert(&self, _collection: &str, _body: Value) -> StoreResult<String> {
        self.fail()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.fail()
    }

    async fn list_collections(&self, _limit: usize) -> StoreResult<Vec<String>> {
        self.fail()
    }
}

/// Store that answers pings but errors on every data call, simulating a
/// connected database with broken permissions.
pub struct ConnectedButBrokenStore;

#[async_trait]
impl DocumentStore for ConnectedButBrokenStore {
    fn backend(&self) -> &'static str {
        "broken"
    }

    async fn find(&self, _collection: &str, _query: &FindQuery) -> StoreResult<Vec<Document>> {
        Err(StoreError::Unavailable("permission denied for table documents".into()))
    }

    async fn insert(&self, _collection: &str, _body: Value) -> StoreResult<String> {
        Err(StoreError::Unavailable("permission denied for table documents".into()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_collections(&self, _limit: usize) -> StoreResult<Vec<String>> {
        Err(StoreError::Unavailable(
            "permission denied for table documents; a rather long explanation follows".into(),
        ))
    }
}

pub fn memory_store() -> Arc<MemoryDocumentStore> {
    Arc::new(MemoryDocumentStore::new())
}

pub fn shared<S: DocumentStore + 'static>(store: Arc<S>) -> SharedStore {
    store
}

/// Application state wired to `store`, with `DATABASE_URL`/`DATABASE_NAME`
/// reported as configured whenever a store is present.
pub fn app_state(store: Option<SharedStore>) -> AppState {
    let configured = store.is_some();
    AppState {
        content: ContentService::new(store.clone()),
        signup: SignupService::new(store.clone()),
        diagnostics: DiagnosticsService::new(store, configured, configured),
    }
}
