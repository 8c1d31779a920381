use crate::domain::delay::DelayPolicy;
use crate::domain::ports::Clock;
use crate::interface_adapters::http::{header_snapshot, request_url};
use crate::interface_adapters::protocol::{
    DomLoadResponse, ProcessSnapshot, RequestInfo, ResponseTimeResponse, TtfbResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::DelayUseCase;
use crate::use_cases::synthetic::{
    content_chunks, dom_structure, mock_data, performance_hints, widgets,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, Method, Uri},
};
use tracing::debug;

// Delays the whole response to simulate a slow time to first byte.
#[tracing::instrument(name = "ttfb", skip_all, fields(delay = %delay))]
pub async fn ttfb(Path(delay): Path<String>, headers: HeaderMap) -> Json<TtfbResponse> {
    let request = DelayPolicy::TTFB.resolve(Some(&delay));
    let timing = DelayUseCase { clock: SystemClock }.execute(request).await;
    debug!(elapsed_ms = timing.actual_response_time, "ttfb delay elapsed");

    Json(TtfbResponse {
        message: format!(
            "TTFB test completed with {}ms delay",
            request.effective_ms
        ),
        timing,
        headers: header_snapshot(&headers),
    })
}

// Delays, then returns a mock data set sized like a typical API page.
#[tracing::instrument(name = "response_time", skip_all, fields(delay = %delay))]
pub async fn response_time(
    State(state): State<AppState>,
    Path(delay): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<ResponseTimeResponse> {
    let request = DelayPolicy::RESPONSE_TIME.resolve(Some(&delay));
    let timing = DelayUseCase { clock: SystemClock }.execute(request).await;

    let mock_data = mock_data(state.random.as_ref());
    // The serialized size is informational; fall back to zero rather than fail.
    let data_size = serde_json::to_string(&mock_data)
        .map(|json| json.len())
        .unwrap_or_default();

    Json(ResponseTimeResponse {
        message: format!(
            "Response time test completed with {}ms delay",
            request.effective_ms
        ),
        timing,
        data_size,
        mock_data,
        performance: ProcessSnapshot {
            process_id: std::process::id(),
            uptime_ms: u64::try_from(state.started_at.elapsed().as_millis()).unwrap_or(u64::MAX),
        },
        request_info: RequestInfo {
            method: method.to_string(),
            url: request_url(&uri, &headers),
            headers: header_snapshot(&headers),
        },
    })
}

// Delays, then returns progressive content chunks and widgets for DOM building.
#[tracing::instrument(name = "dom_load", skip_all, fields(delay = %delay))]
pub async fn dom_load(
    State(state): State<AppState>,
    Path(delay): Path<String>,
) -> Json<DomLoadResponse> {
    let request = DelayPolicy::DOM_LOAD.resolve(Some(&delay));
    let timing = DelayUseCase { clock: SystemClock }.execute(request).await;

    let chunks = content_chunks(request.effective_ms);
    let widgets = widgets(SystemClock.now(), state.random.as_ref());

    Json(DomLoadResponse {
        message: format!(
            "DOM load test data prepared with {}ms total delay",
            request.effective_ms
        ),
        timing,
        dom_structure: dom_structure(&chunks, &widgets),
        performance_hints: performance_hints(request.effective_ms, &chunks),
        content_chunks: chunks,
        widgets,
    })
}
