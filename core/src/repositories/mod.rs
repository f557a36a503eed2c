pub mod team;

pub use team::{InMemoryTeamRepository, TeamRepository};
