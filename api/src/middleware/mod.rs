//! Middleware modules for the API

pub mod cors;
