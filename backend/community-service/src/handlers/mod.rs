/// HTTP handlers for community endpoints
///
/// - Content: groups, upcoming sessions, latest discussions, goals, notes
/// - Signup: registration writes
/// - System: liveness message and store diagnostics
pub mod content;
pub mod signup;
pub mod system;

pub use content::{
    latest_discussions, list_goals, list_groups, list_notes, upcoming_sessions, LimitQuery,
};
pub use signup::signup;
pub use system::{diagnostics, root};

use actix_web::{error, web, HttpRequest};

use crate::error::AppError;

/// Register every API route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/", web::get().to(root))
        .route("/test", web::get().to(diagnostics))
        .service(
            web::scope("/api")
                .route("/groups", web::get().to(list_groups))
                .route("/sessions/upcoming", web::get().to(upcoming_sessions))
                .route("/discussions/latest", web::get().to(latest_discussions))
                .route("/goals", web::get().to(list_goals))
                .route("/notes", web::get().to(list_notes))
                .route("/signup", web::post().to(signup)),
        );
}

/// Malformed bodies (bad JSON, missing fields, wrong types) become 400s in
/// the service's error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        tracing::debug!(error = %err, "rejected request body");
        AppError::BadRequest(err.to_string()).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(
        |err: error::QueryPayloadError, _req: &HttpRequest| {
            AppError::BadRequest(err.to_string()).into()
        },
    )
}
