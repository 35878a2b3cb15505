/// API route handlers organized by resource
///
/// - `health`: liveness and readiness endpoints
/// - `users`: user CRUD endpoints

pub mod health;
pub mod users;
