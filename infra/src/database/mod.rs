//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Repository implementations of the core lookup ports

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::MySqlTeamRepository;
