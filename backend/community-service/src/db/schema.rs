use tracing::info;

use super::{PgDocumentStore, StoreResult};

/// Ensure the `documents` table and its listing index exist.
///
/// Run by `PgDocumentStore` before its first query, so a fresh database works
/// without a separate provisioning step. Statements are idempotent.
pub async fn ensure_schema(store: &PgDocumentStore) -> StoreResult<()> {
    info!("Ensuring documents table exists");

    sqlx::query(DOCUMENTS_TABLE).execute(store.pool()).await?;
    sqlx::query(DOCUMENTS_COLLECTION_INDEX)
        .execute(store.pool())
        .await?;

    Ok(())
}

const DOCUMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id UUID PRIMARY KEY,
    collection TEXT NOT NULL,
    body JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const DOCUMENTS_COLLECTION_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_documents_collection_created_at
    ON documents (collection, created_at)
"#;
