//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. Security headers (stricter CSP, no caching)
//! 3. `TraceLayer` (request span with status and latency)
//! 4. Request ID (recorded on the request span)
//! 5. Session layer (tower-sessions with `MemoryStore`)
//!
//! Handlers reach the session through the [`Workspace`] extractor.

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod workspace;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use workspace::Workspace;
