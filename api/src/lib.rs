// Library exports for the binary and the integration tests

pub mod app;
pub mod config;
pub mod dto;
pub mod fixture;
pub mod handlers;
pub mod middleware;
pub mod routes;
