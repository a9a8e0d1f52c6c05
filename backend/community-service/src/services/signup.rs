/// Signup service - validates registrations and persists them
use tracing::{info, warn};
use validator::Validate;

use crate::db::{SharedStore, StoreError, StoreResult};
use crate::error::Result;
use crate::metrics::{record_signup, SignupOutcome};
use crate::models::{SignupRecord, SignupRequest, SignupResponse};

pub const SIGNUP_COLLECTION: &str = "signup";

#[derive(Clone)]
pub struct SignupService {
    store: Option<SharedStore>,
}

impl SignupService {
    pub fn new(store: Option<SharedStore>) -> Self {
        Self { store }
    }

    /// Validate and store a signup.
    ///
    /// Only rule violations are returned as errors; they are checked before
    /// the store is touched. A failed insert still reports success with the
    /// placeholder id.
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupResponse> {
        request.validate()?;

        let record = SignupRecord::from(request);
        match self.persist(&record).await {
            Ok(id) => {
                info!(signup_id = %id, "signup stored");
                record_signup(SignupOutcome::Stored);
                Ok(SignupResponse::stored(id))
            }
            Err(err) => {
                warn!(error = %err, "signup not persisted, returning placeholder id");
                record_signup(SignupOutcome::Placeholder);
                Ok(SignupResponse::placeholder())
            }
        }
    }

    async fn persist(&self, record: &SignupRecord) -> StoreResult<String> {
        let store = self.store.as_ref().ok_or(StoreError::NotConfigured)?;
        let body = serde_json::to_value(record)?;
        store.insert(SIGNUP_COLLECTION, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::PLACEHOLDER_SIGNUP_ID;

    fn request(name: &str, email: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            interest: None,
        }
    }

    #[tokio::test]
    async fn without_store_returns_placeholder() {
        let service = SignupService::new(None);
        let response = service.signup(request("Ava", "ava@example.com")).await.unwrap();

        assert!(response.ok);
        assert_eq!(response.id, PLACEHOLDER_SIGNUP_ID);
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected() {
        let service = SignupService::new(None);
        let err = service.signup(request("", "ava@example.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
