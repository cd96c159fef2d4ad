// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Provides the CORS layer and per-request span construction used by the server

/// CORS layer construction
pub mod cors;
/// Per-request tracing spans
pub mod request_tracing;

pub use cors::setup_cors;
pub use request_tracing::{create_request_span, REQUEST_ID_HEADER};
