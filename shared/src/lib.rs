//! Shared types for the K-League directory server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types
//! - The error code capability and its wire representation
//! - The response envelope

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{ConfigError, CorsConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig};
pub use errors::{error_codes, ErrorCode, ErrorDetail, FailureKind};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
