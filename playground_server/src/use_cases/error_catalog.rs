use chrono::TimeDelta;
use serde_json::Value;

use crate::domain::entities::{
    ErrorExtension, ErrorPayload, FieldError, PostErrorPayload, iso_timestamp,
};
use crate::domain::errors::ErrorKind;
use crate::domain::ports::{Clock, RandomSource};
use crate::use_cases::request_id::request_id;

const RATE_LIMIT: u32 = 100;

// Builds fresh canned error bodies; timestamps and request ids differ per call.
pub struct ErrorCatalog<'a> {
    pub clock: &'a dyn Clock,
    pub random: &'a dyn RandomSource,
}

impl ErrorCatalog<'_> {
    pub fn payload_for(&self, kind: ErrorKind) -> ErrorPayload {
        let now = self.clock.now();

        let (error, message, code, extension) = match kind {
            ErrorKind::Generic => (
                "Internal Server Error",
                "Something went wrong on the server",
                "INTERNAL_ERROR",
                None,
            ),
            ErrorKind::Database => (
                "Database Connection Error",
                "Unable to connect to the database server",
                "DB_CONNECTION_FAILED",
                Some(ErrorExtension::Database {
                    details: "Connection timeout after 30 seconds",
                }),
            ),
            ErrorKind::Timeout => (
                "Request Timeout",
                "The request took too long to process",
                "REQUEST_TIMEOUT",
                Some(ErrorExtension::Timeout { timeout: "30000ms" }),
            ),
            ErrorKind::Validation => (
                "Validation Error",
                "Invalid request parameters",
                "VALIDATION_FAILED",
                Some(ErrorExtension::Validation {
                    errors: vec![
                        FieldError {
                            field: "email",
                            message: "Invalid email format",
                        },
                        FieldError {
                            field: "password",
                            message: "Password too weak",
                        },
                    ],
                }),
            ),
            ErrorKind::Auth => (
                "Authentication Error",
                "Invalid or expired authentication token",
                "AUTH_FAILED",
                None,
            ),
            ErrorKind::RateLimit => (
                "Rate Limit Exceeded",
                "Too many requests from this IP address",
                "RATE_LIMIT_EXCEEDED",
                Some(ErrorExtension::RateLimit {
                    limit: RATE_LIMIT,
                    remaining: 0,
                    reset_time: iso_timestamp(now + TimeDelta::hours(1)),
                }),
            ),
        };

        ErrorPayload {
            error,
            message: message.to_string(),
            code,
            extension,
            timestamp: iso_timestamp(now),
            request_id: request_id(self.random),
        }
    }

    // Echoes the decoded POST body back inside a failure envelope.
    pub fn post_failure(&self, error_type: &str, received_data: Value) -> PostErrorPayload {
        PostErrorPayload {
            error: "POST Request Failed",
            message: format!("POST request with errorType '{error_type}' intentionally failed"),
            code: "POST_ERROR",
            received_data,
            timestamp: iso_timestamp(self.clock.now()),
            request_id: request_id(self.random),
            method: "POST",
        }
    }

    pub fn parse_failure(&self) -> ErrorPayload {
        ErrorPayload {
            error: "JSON Parse Error",
            message: "Invalid JSON in request body".to_string(),
            code: "PARSE_ERROR",
            extension: None,
            timestamp: iso_timestamp(self.clock.now()),
            request_id: request_id(self.random),
        }
    }
}
