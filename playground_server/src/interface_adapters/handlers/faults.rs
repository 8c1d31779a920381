use crate::domain::errors::SimulatedFault;
use crate::interface_adapters::state::AppState;
use crate::use_cases::faults::pick_post_fault;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

// Faults surface as a bare 500: no body, nothing for the client to parse.
impl IntoResponse for SimulatedFault {
    fn into_response(self) -> Response {
        error!(kind = self.kind(), error = %self, "simulated fault");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

// Panics inside the handler; the catch-panic layer turns it into a 500.
pub async fn panic_unhandled() -> Response {
    warn!("raising an unhandled panic on purpose");
    panic!("{}", SimulatedFault::Intentional);
}

// Fails with one of five fault kinds chosen uniformly at random.
pub async fn fail_random(State(state): State<AppState>) -> SimulatedFault {
    pick_post_fault(state.random.as_ref())
}

// Waits, then fails, mimicking a rejected asynchronous operation.
pub async fn fail_after_timeout(State(state): State<AppState>) -> SimulatedFault {
    tokio::time::sleep(state.timings.async_fault_delay).await;
    SimulatedFault::AsyncRejection
}

// Declares JSON but sends plain text.
pub async fn malformed_json() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        "This is not a valid JSON response",
    )
}
