use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    Document, DocumentStore, Filter, FindQuery, SortKey, SortOrder, StoreError, StoreResult,
};

/// Process-local document store. Collections keep insertion order.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with an explicit envelope time, for seeding ordered fixtures.
    pub async fn insert_at(
        &self,
        collection: &str,
        body: Value,
        created_at: DateTime<Utc>,
    ) -> StoreResult<String> {
        if !body.is_object() {
            return Err(StoreError::InvalidDocument(
                "document body must be a JSON object".to_string(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                body,
                created_at,
            });

        Ok(id)
    }

    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, Vec::len)
    }
}

/// Read a body field as a timestamp. Missing or null fields yield `None`.
fn timestamp_field(doc: &Document, field: &str) -> StoreResult<Option<DateTime<Utc>>> {
    match doc.body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| {
                StoreError::InvalidDocument(format!(
                    "document {} field {} is not a timestamp: {}",
                    doc.id, field, e
                ))
            }),
    }
}

fn sort_value(doc: &Document, key: SortKey) -> StoreResult<Option<DateTime<Utc>>> {
    match key {
        SortKey::CreatedAt => Ok(Some(doc.created_at)),
        SortKey::Timestamp(field) => timestamp_field(doc, field),
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find(&self, collection: &str, query: &FindQuery) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matched = Vec::with_capacity(docs.len());
        for doc in docs {
            let keep = match &query.filter {
                None => true,
                Some(Filter::TimestampOnOrAfter { field, at }) => {
                    matches!(timestamp_field(doc, field)?, Some(ts) if ts >= *at)
                }
            };
            if keep {
                matched.push(doc);
            }
        }

        if let Some(sort) = query.sort {
            let mut keyed = matched
                .into_iter()
                .map(|doc| sort_value(doc, sort.key).map(|key| (key, doc)))
                .collect::<StoreResult<Vec<_>>>()?;

            // Stable sort; documents without the key go last.
            keyed.sort_by(|(a, _), (b, _)| {
                let ordering = match (a, b) {
                    (Some(a), Some(b)) => a.cmp(b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                match (sort.order, a.is_some() && b.is_some()) {
                    (SortOrder::Desc, true) => ordering.reverse(),
                    _ => ordering,
                }
            });
            matched = keyed.into_iter().map(|(_, doc)| doc).collect();
        }

        Ok(matched.into_iter().take(query.limit).cloned().collect())
    }

    async fn insert(&self, collection: &str, body: Value) -> StoreResult<String> {
        self.insert_at(collection, body, Utc::now()).await
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_collections(&self, limit: usize) -> StoreResult<Vec<String>> {
        let collections = self.collections.read().await;
        Ok(collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Sort;
    use chrono::Duration;
    use serde_json::json;

    #[tokio::test]
    async fn insert_generates_distinct_ids() {
        let store = MemoryDocumentStore::new();
        let body = json!({ "name": "Ava", "email": "ava@example.com" });

        let first = store.insert("signup", body.clone()).await.unwrap();
        let second = store.insert("signup", body).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count("signup").await, 2);
    }

    #[tokio::test]
    async fn insert_rejects_non_object() {
        let store = MemoryDocumentStore::new();
        let err = store.insert("signup", json!("Ava")).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument(_)));
    }

    #[tokio::test]
    async fn find_keeps_insertion_order_and_limit() {
        let store = MemoryDocumentStore::new();
        for name in ["a", "b", "c"] {
            store.insert("group", json!({ "name": name })).await.unwrap();
        }

        let docs = store.find("group", &FindQuery::limit(2)).await.unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.body["name"].clone()).collect();
        assert_eq!(names, vec![json!("a"), json!("b")]);
    }

    #[tokio::test]
    async fn find_sorts_newest_first() {
        let store = MemoryDocumentStore::new();
        let base = Utc::now();
        for (idx, msg) in ["old", "mid", "new"].iter().enumerate() {
            store
                .insert_at(
                    "discussion",
                    json!({ "message": msg }),
                    base + Duration::minutes(idx as i64),
                )
                .await
                .unwrap();
        }

        let query = FindQuery::limit(10).sorted_by(Sort::desc(SortKey::CreatedAt));
        let docs = store.find("discussion", &query).await.unwrap();
        let messages: Vec<_> = docs.iter().map(|d| d.body["message"].clone()).collect();
        assert_eq!(messages, vec![json!("new"), json!("mid"), json!("old")]);
    }

    #[tokio::test]
    async fn timestamp_filter_excludes_past_and_missing() {
        let store = MemoryDocumentStore::new();
        let now = Utc::now();
        store
            .insert("session", json!({ "start_time": now - Duration::hours(1) }))
            .await
            .unwrap();
        store
            .insert("session", json!({ "start_time": now + Duration::hours(2) }))
            .await
            .unwrap();
        store
            .insert("session", json!({ "start_time": now + Duration::hours(1) }))
            .await
            .unwrap();
        store.insert("session", json!({ "title": "no time" })).await.unwrap();

        let query = FindQuery::limit(10)
            .with_filter(Filter::TimestampOnOrAfter {
                field: "start_time",
                at: now,
            })
            .sorted_by(Sort::asc(SortKey::Timestamp("start_time")));
        let docs = store.find("session", &query).await.unwrap();

        assert_eq!(docs.len(), 2);
        let first: DateTime<Utc> = serde_json::from_value(docs[0].body["start_time"].clone()).unwrap();
        let second: DateTime<Utc> = serde_json::from_value(docs[1].body["start_time"].clone()).unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn malformed_timestamp_is_an_error() {
        let store = MemoryDocumentStore::new();
        store
            .insert("session", json!({ "start_time": "tomorrow-ish" }))
            .await
            .unwrap();

        let query = FindQuery::limit(10).with_filter(Filter::TimestampOnOrAfter {
            field: "start_time",
            at: Utc::now(),
        });
        assert!(store.find("session", &query).await.is_err());
    }

    #[tokio::test]
    async fn unknown_collection_is_empty() {
        let store = MemoryDocumentStore::new();
        assert!(store.find("goal", &FindQuery::limit(5)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_collections_alphabetically() {
        let store = MemoryDocumentStore::new();
        store.insert("signup", json!({})).await.unwrap();
        store.insert("group", json!({})).await.unwrap();

        assert_eq!(
            store.list_collections(10).await.unwrap(),
            vec!["group".to_string(), "signup".to_string()]
        );
        assert_eq!(store.list_collections(1).await.unwrap().len(), 1);
    }
}
