/// Recurring draw job
pub mod draw;
/// HTTP health endpoints
pub mod health;
