/// Diagnostics probe - store connectivity report for `GET /test`
use tracing::debug;

use crate::db::SharedStore;
use crate::models::diagnostics::{
    presence, DiagnosticsReport, CONNECTED, DB_AVAILABLE, DB_NOT_INITIALIZED, DB_WORKING,
    NOT_CONNECTED,
};

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Clone)]
pub struct DiagnosticsService {
    store: Option<SharedStore>,
    url_configured: bool,
    name_configured: bool,
}

impl DiagnosticsService {
    pub fn new(store: Option<SharedStore>, url_configured: bool, name_configured: bool) -> Self {
        Self {
            store,
            url_configured,
            name_configured,
        }
    }

    /// Build the report. Each failing step is written into the report as a
    /// status string; this never returns an error.
    pub async fn report(&self) -> DiagnosticsReport {
        let mut report = DiagnosticsReport {
            database_url: presence(self.url_configured),
            database_name: presence(self.name_configured),
            ..DiagnosticsReport::default()
        };

        let Some(store) = &self.store else {
            report.database = DB_NOT_INITIALIZED.to_string();
            return report;
        };

        if let Err(err) = store.ping().await {
            debug!(backend = store.backend(), error = %err, "diagnostics ping failed");
            report.database = format!("❌ Error: {}", truncate(&err.to_string()));
            report.connection_status = NOT_CONNECTED.to_string();
            return report;
        }

        report.database = DB_AVAILABLE.to_string();
        report.connection_status = CONNECTED.to_string();

        match store.list_collections(MAX_COLLECTIONS).await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = DB_WORKING.to_string();
            }
            Err(err) => {
                report.database = format!("⚠️  Connected but Error: {}", truncate(&err.to_string()));
            }
        }

        report
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
