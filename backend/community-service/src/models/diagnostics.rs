use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DB_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DB_AVAILABLE: &str = "✅ Available";
pub const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DB_WORKING: &str = "✅ Connected & Working";
pub const CONFIG_SET: &str = "✅ Set";
pub const CONFIG_NOT_SET: &str = "❌ Not Set";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

/// Store connectivity report served by `GET /test`.
///
/// Every field is a human-readable status string; the probe never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    /// Whether `DATABASE_URL` is configured, never the value itself
    pub database_url: String,
    /// Whether `DATABASE_NAME` is configured, never the value itself
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DB_NOT_AVAILABLE.to_string(),
            database_url: CONFIG_NOT_SET.to_string(),
            database_name: CONFIG_NOT_SET.to_string(),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

pub fn presence(configured: bool) -> String {
    if configured { CONFIG_SET } else { CONFIG_NOT_SET }.to_string()
}
