/// Content handlers - read-only listings
///
/// Every handler answers 200: store failures are absorbed by the service and
/// surface only as `"sample": true` in the body.
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::models::{
    ContentRecord, DiscussionRecord, GoalRecord, GroupRecord, NoteRecord, SessionRecord,
};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

async fn list<T: ContentRecord>(state: &AppState, query: &LimitQuery) -> HttpResponse {
    let page = state.content.list::<T>(query.limit).await;
    HttpResponse::Ok().json(page)
}

/// GET /api/groups
pub async fn list_groups(state: web::Data<AppState>, query: web::Query<LimitQuery>) -> HttpResponse {
    list::<GroupRecord>(&state, &query).await
}

/// GET /api/sessions/upcoming
pub async fn upcoming_sessions(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> HttpResponse {
    list::<SessionRecord>(&state, &query).await
}

/// GET /api/discussions/latest
pub async fn latest_discussions(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> HttpResponse {
    list::<DiscussionRecord>(&state, &query).await
}

/// GET /api/goals
pub async fn list_goals(state: web::Data<AppState>, query: web::Query<LimitQuery>) -> HttpResponse {
    list::<GoalRecord>(&state, &query).await
}

/// GET /api/notes
pub async fn list_notes(state: web::Data<AppState>, query: web::Query<LimitQuery>) -> HttpResponse {
    list::<NoteRecord>(&state, &query).await
}
