use crate::interface_adapters::handlers::errors::{error_page, error_post};
use crate::interface_adapters::handlers::faults::{
    fail_after_timeout, fail_random, malformed_json, panic_unhandled,
};
use crate::interface_adapters::handlers::region::region;
use crate::interface_adapters::handlers::timing::{dom_load, response_time, ttfb};
use crate::interface_adapters::handlers::words::{
    add_word, list_words, remove_word, reset_word_list,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

// Build the HTTP router for every playground endpoint.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/addWord", post(add_word).get(list_words))
        .route("/api/removeWord", post(remove_word))
        .route(
            "/api/resetWordList",
            post(reset_word_list).get(reset_word_list),
        )
        .route("/api/ttfb/{delay}", get(ttfb))
        .route("/api/resptime/{delay}", get(response_time))
        .route("/api/domload/{delay}", get(dom_load))
        .route("/api/500", get(error_page).post(error_post))
        .route(
            "/api/500/error",
            get(panic_unhandled)
                .post(fail_random)
                .put(fail_after_timeout)
                .delete(malformed_json),
        )
        .route("/api/region", get(region))
        .with_state(state)
        // Panics become plain 500s instead of dropped connections.
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
