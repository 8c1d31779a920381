use crate::domain::delay::DelayPolicy;
use crate::domain::errors::ErrorKind;
use crate::interface_adapters::http::{X_ERROR_TYPE, X_REQUEST_ID};
use crate::interface_adapters::protocol::ErrorQuery;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::{DelayUseCase, ErrorCatalog};
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{info, warn};

// Serves a canned structured error after an optional delay.
#[tracing::instrument(name = "error_catalog", skip_all, fields(error_type = ?query.error_type))]
pub async fn error_page(State(state): State<AppState>, Query(query): Query<ErrorQuery>) -> Response {
    let request = DelayPolicy::ERROR_PAGE.resolve(query.delay.as_deref());
    if request.effective_ms > 0 {
        DelayUseCase { clock: SystemClock }.execute(request).await;
    }

    let requested_type = non_empty(query.error_type.as_deref());
    let kind = ErrorKind::from_name(requested_type);

    let catalog = ErrorCatalog {
        clock: &SystemClock,
        random: state.random.as_ref(),
    };
    let payload = catalog.payload_for(kind);
    info!(kind = kind.as_str(), request_id = %payload.request_id, "serving canned error");

    let headers = error_headers(requested_type.unwrap_or(kind.as_str()), &payload.request_id);
    (StatusCode::INTERNAL_SERVER_ERROR, headers, Json(payload)).into_response()
}

// Echoes a JSON body inside a failure envelope; invalid JSON yields 400.
#[tracing::instrument(name = "error_catalog_post", skip_all)]
pub async fn error_post(State(state): State<AppState>, body: Bytes) -> Response {
    let catalog = ErrorCatalog {
        clock: &SystemClock,
        random: state.random.as_ref(),
    };

    let received: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "error catalog body is not valid JSON");
            return (StatusCode::BAD_REQUEST, Json(catalog.parse_failure())).into_response();
        }
    };

    tokio::time::sleep(state.timings.post_error_delay).await;

    let error_type = non_empty(received.get("errorType").and_then(Value::as_str))
        .unwrap_or(ErrorKind::Generic.as_str())
        .to_string();
    let payload = catalog.post_failure(&error_type, received);
    info!(%error_type, request_id = %payload.request_id, "serving POST failure");

    let headers = error_headers(&error_type, &payload.request_id);
    (StatusCode::INTERNAL_SERVER_ERROR, headers, Json(payload)).into_response()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

// Values that cannot be carried in a header are dropped rather than rejected.
fn error_headers(error_type: &str, request_id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(error_type) {
        headers.insert(X_ERROR_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(request_id) {
        headers.insert(X_REQUEST_ID, value);
    }
    headers
}
