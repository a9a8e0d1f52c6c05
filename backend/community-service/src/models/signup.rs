use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Placeholder id returned when a signup could not be persisted.
pub const PLACEHOLDER_SIGNUP_ID: &str = "demo";

/// Inbound registration payload.
///
/// Email is accepted as any non-empty text; there is no format check.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[serde(default)]
    pub interest: Option<String>,
}

/// Shape of a signup document as written to the `signup` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub name: String,
    pub email: String,
    pub interest: Option<String>,
}

impl From<SignupRequest> for SignupRecord {
    fn from(req: SignupRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            interest: req.interest,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub ok: bool,
    pub id: String,
}

impl SignupResponse {
    pub fn stored(id: String) -> Self {
        Self { ok: true, id }
    }

    pub fn placeholder() -> Self {
        Self {
            ok: true,
            id: PLACEHOLDER_SIGNUP_ID.to_string(),
        }
    }
}
