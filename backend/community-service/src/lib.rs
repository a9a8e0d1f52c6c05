/// Community Service Library
///
/// HTTP backend for a study-group community: read endpoints for groups,
/// sessions, discussions, goals and notes, plus a signup write endpoint.
/// Every store failure is absorbed at the service boundary and replaced with
/// sample data or a placeholder result.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route table
/// - `models`: storage records, request/response types, sample data
/// - `services`: content, signup and diagnostics logic
/// - `db`: document store interface and implementations
/// - `middleware`: request metrics
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};

use db::SharedStore;
use services::{ContentService, DiagnosticsService, SignupService};

/// Services shared by every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
    pub signup: SignupService,
    pub diagnostics: DiagnosticsService,
}

impl AppState {
    /// Wire all services to the same store client.
    pub fn new(store: Option<SharedStore>, config: &Config) -> Self {
        Self {
            content: ContentService::new(store.clone()).with_max_limit(config.content.max_limit),
            signup: SignupService::new(store.clone()),
            diagnostics: DiagnosticsService::new(
                store,
                config.database.url_configured(),
                config.database.name_configured(),
            ),
        }
    }
}
