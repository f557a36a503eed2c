pub mod error;

pub use error::{configure_error_handling, not_found, ApiException};
