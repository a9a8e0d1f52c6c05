/// Business logic layer for community-service
///
/// - Content service: per-kind listings with sample fallback
/// - Signup service: validated registration writes
/// - Diagnostics service: store connectivity report
pub mod content;
pub mod diagnostics;
pub mod signup;

pub use content::ContentService;
pub use diagnostics::DiagnosticsService;
pub use signup::{SignupService, SIGNUP_COLLECTION};
