use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec,
};

use crate::models::ContentKind;

lazy_static! {
    /// Listing requests by content kind and where the items came from.
    pub static ref CONTENT_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "community_content_requests_total",
        "Content listing requests segmented by kind and source (store, sample)",
        &["kind", "source"]
    )
    .expect("failed to register community_content_requests_total");

    /// Signup submissions by outcome.
    pub static ref SIGNUP_TOTAL: IntCounterVec = register_int_counter_vec!(
        "community_signup_total",
        "Signup submissions segmented by outcome (stored, placeholder)",
        &["result"]
    )
    .expect("failed to register community_signup_total");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "community_http_request_duration_seconds",
        "HTTP request duration segmented by method, route pattern and status",
        &["method", "path", "status"]
    )
    .expect("failed to register community_http_request_duration_seconds");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Store,
    Sample,
}

impl ContentSource {
    fn as_str(self) -> &'static str {
        match self {
            ContentSource::Store => "store",
            ContentSource::Sample => "sample",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Stored,
    Placeholder,
}

impl SignupOutcome {
    fn as_str(self) -> &'static str {
        match self {
            SignupOutcome::Stored => "stored",
            SignupOutcome::Placeholder => "placeholder",
        }
    }
}

pub fn record_content_request(kind: ContentKind, source: ContentSource) {
    CONTENT_REQUESTS_TOTAL
        .with_label_values(&[kind.collection(), source.as_str()])
        .inc();
}

pub fn record_signup(outcome: SignupOutcome) {
    SIGNUP_TOTAL.with_label_values(&[outcome.as_str()]).inc();
}

pub fn record_http_request(method: &str, path: &str, status: u16, elapsed_secs: f64) {
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path, &status.to_string()])
        .observe(elapsed_secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_counter_increments_per_source() {
        let before = CONTENT_REQUESTS_TOTAL
            .with_label_values(&["note", "sample"])
            .get();
        record_content_request(ContentKind::Note, ContentSource::Sample);
        let after = CONTENT_REQUESTS_TOTAL
            .with_label_values(&["note", "sample"])
            .get();
        assert!(after > before);
    }
}
