/// OpenAPI documentation for the Study Group Community Service
use utoipa::OpenApi;

use crate::models::{
    DiagnosticsReport, DiscussionRecord, GoalRecord, GroupRecord, NoteRecord, SessionRecord,
    SignupRequest, SignupResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Study Group Community API",
        version = "1.0.0",
        description = "Read endpoints for study groups, upcoming sessions, latest discussions, member goals and shared notes, plus a signup endpoint. Listings fall back to sample data flagged with `sample: true` when the document store is unavailable; signups fall back to the placeholder id `demo`.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development server"),
    ),
    components(schemas(
        GroupRecord,
        SessionRecord,
        DiscussionRecord,
        GoalRecord,
        NoteRecord,
        SignupRequest,
        SignupResponse,
        DiagnosticsReport,
    )),
    tags(
        (name = "system", description = "Liveness and store diagnostics"),
        (name = "content", description = "Groups, sessions, discussions, goals and notes"),
        (name = "signup", description = "Community signups"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/openapi.json"
    }
}
