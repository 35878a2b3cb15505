/// Data models
///
/// - `user`: the user record and its SQL operations

pub mod user;
