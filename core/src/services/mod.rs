//! Business services containing domain logic and use cases.

pub mod team;

pub use team::TeamService;
