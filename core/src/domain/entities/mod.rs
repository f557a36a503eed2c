//! Domain entities returned by the directory endpoints.
//!
//! Every field is optional because rows come back partially populated and
//! missing columns are serialized as explicit `null`s.

pub mod schedule;
pub mod stadium;
pub mod team;
pub mod user;


pub use schedule::Schedule;
pub use stadium::Stadium;
pub use team::Team;
pub use user::User;
