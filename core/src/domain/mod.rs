//! Domain layer containing the directory entities.

pub mod entities;

pub use entities::*;
