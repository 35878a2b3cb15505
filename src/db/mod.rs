/// Database access layer
///
/// - `pool`: connection pool construction and ping
/// - `schema`: idempotent startup schema creation

pub mod pool;
pub mod schema;
