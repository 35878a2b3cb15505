/// Middleware for the API server
///
/// - `cors`: permissive cross-origin headers + preflight short-circuit
/// - `trace`: per-request trace identifier propagation
/// - `content_type`: forced JSON content type on every response

pub mod content_type;
pub mod cors;
pub mod trace;
