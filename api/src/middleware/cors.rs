//! CORS middleware configuration for cross-origin requests.
//!
//! The directory is read-only, so only `GET` and preflight `OPTIONS` are
//! allowed. Development accepts any origin; other environments accept the
//! configured origins only.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use kl_shared::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_development() {
        create_development_cors(config.max_age)
    } else {
        create_restricted_cors(config)
    }
}

/// Permissive configuration for local testing from any origin.
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::CACHE_CONTROL,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

/// Restricts origins to the configured allow-list.
fn create_restricted_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS with {} allowed origin(s)", config.allowed_origins.len());

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
