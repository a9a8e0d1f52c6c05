/// Data models for community-service
///
/// - `content`: storage records for groups, sessions, discussions, goals, notes
/// - `samples`: placeholder records served while the store is down
/// - `signup`: signup input contract and its storage record
/// - `diagnostics`: store diagnostics report
pub mod content;
pub mod diagnostics;
pub mod samples;
pub mod signup;

pub use content::{
    ContentKind, ContentPage, ContentRecord, DiscussionRecord, GoalRecord, GroupRecord,
    NoteRecord, SessionRecord,
};
pub use diagnostics::DiagnosticsReport;
pub use signup::{SignupRecord, SignupRequest, SignupResponse, PLACEHOLDER_SIGNUP_ID};
