/// Content service - read-only listings with sample-data fallback
use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use validator::Validate;

use crate::config::DEFAULT_MAX_LIMIT;
use crate::db::{Filter, FindQuery, SharedStore, Sort, SortKey, StoreError, StoreResult};
use crate::metrics::{record_content_request, ContentSource};
use crate::models::{ContentKind, ContentPage, ContentRecord};

const SESSION_START_FIELD: &str = "start_time";

#[derive(Clone)]
pub struct ContentService {
    store: Option<SharedStore>,
    max_limit: usize,
}

impl ContentService {
    pub fn new(store: Option<SharedStore>) -> Self {
        Self {
            store,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }

    pub fn with_max_limit(mut self, max_limit: usize) -> Self {
        self.max_limit = max_limit;
        self
    }

    /// Resolve a caller-supplied limit: absent or negative means the kind's
    /// default, anything above the ceiling is clamped.
    pub fn resolve_limit(&self, kind: ContentKind, requested: Option<i64>) -> usize {
        let limit = match requested {
            Some(n) if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => kind.default_limit(),
        };
        limit.min(self.max_limit)
    }

    /// List records of one kind.
    ///
    /// Never fails: any store error is logged and answered with the kind's
    /// sample set, truncated to the same limit and flagged `sample`.
    pub async fn list<T: ContentRecord>(&self, requested: Option<i64>) -> ContentPage<T> {
        let kind = T::KIND;
        let limit = self.resolve_limit(kind, requested);
        let now = Utc::now();

        match self.fetch::<T>(now, limit).await {
            Ok(items) => {
                debug!(%kind, limit, count = items.len(), "served content from store");
                record_content_request(kind, ContentSource::Store);
                ContentPage::live(items)
            }
            Err(err) => {
                warn!(%kind, limit, error = %err, "store unavailable, serving sample content");
                record_content_request(kind, ContentSource::Sample);
                ContentPage::sample(T::sample_set(now, limit))
            }
        }
    }

    async fn fetch<T: ContentRecord>(&self, now: DateTime<Utc>, limit: usize) -> StoreResult<Vec<T>> {
        let store = self.store.as_ref().ok_or(StoreError::NotConfigured)?;
        let kind = T::KIND;

        let docs = store
            .find(kind.collection(), &find_query(kind, now, limit))
            .await?;

        let mut items = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = doc.id.clone();
            let record = match doc.into_record::<T>() {
                Ok(record) => record,
                Err(err) => {
                    warn!(%kind, document_id = %id, error = %err, "skipping malformed document");
                    continue;
                }
            };
            if let Err(err) = record.validate() {
                warn!(%kind, document_id = %id, error = %err, "skipping document that breaks field rules");
                continue;
            }
            items.push(record);
        }

        Ok(items)
    }
}

/// Kind-specific filter and ordering.
pub fn find_query(kind: ContentKind, now: DateTime<Utc>, limit: usize) -> FindQuery {
    let query = FindQuery::limit(limit);
    match kind {
        ContentKind::Group | ContentKind::Note => query,
        ContentKind::Session => query
            .with_filter(Filter::TimestampOnOrAfter {
                field: SESSION_START_FIELD,
                at: now,
            })
            .sorted_by(Sort::asc(SortKey::Timestamp(SESSION_START_FIELD))),
        ContentKind::Discussion | ContentKind::Goal => {
            query.sorted_by(Sort::desc(SortKey::CreatedAt))
        }
    }
}
