// Interface adapters: HTTP handlers, wire payloads and in-memory state.

pub mod handlers;
pub mod http;
pub mod protocol;
pub mod routes;
pub mod state;
