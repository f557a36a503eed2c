//! Team service module
//!
//! Resolves team lookups through the repository port and turns a miss into
//! the team area's not-found failure.

mod service;


pub use service::TeamService;
