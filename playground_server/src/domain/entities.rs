use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// Timing facts produced by every delayed endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingReport {
    pub requested_delay: u64,
    pub actual_delay: u64,
    // Epoch milliseconds.
    pub start_time: i64,
    pub end_time: i64,
    pub actual_response_time: u64,
    pub timestamp: String,
}

// Structured body returned by the controlled error endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub error: &'static str,
    pub message: String,
    pub code: &'static str,
    #[serde(flatten)]
    pub extension: Option<ErrorExtension>,
    pub timestamp: String,
    pub request_id: String,
}

// Type-specific fields merged into the top level of an ErrorPayload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ErrorExtension {
    Database {
        details: &'static str,
    },
    Timeout {
        timeout: &'static str,
    },
    Validation {
        errors: Vec<FieldError>,
    },
    RateLimit {
        limit: u32,
        remaining: u32,
        #[serde(rename = "resetTime")]
        reset_time: String,
    },
}

// Body returned when a POST to the error endpoint parses successfully.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostErrorPayload {
    pub error: &'static str,
    pub message: String,
    pub code: &'static str,
    pub received_data: Value,
    pub timestamp: String,
    pub request_id: String,
    pub method: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}
