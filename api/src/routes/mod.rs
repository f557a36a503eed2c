//! Route handlers
//!
//! - `/team` - team lookup with stadium and schedules
//! - `/user` - user lookup (always not found)
//! - `/health` - liveness check

pub mod health;
pub mod team;
pub mod user;

pub use team::AppState;
