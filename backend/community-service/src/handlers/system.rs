use actix_web::{web, HttpResponse};

use crate::AppState;

pub const ROOT_MESSAGE: &str = "Study Group Community Backend is running";

/// GET / - liveness message
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": ROOT_MESSAGE }))
}

/// GET /test - store diagnostics, always 200
pub async fn diagnostics(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.diagnostics.report().await)
}
