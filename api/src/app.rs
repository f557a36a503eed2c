//! Application factory
//!
//! Builds the Actix-web application from the shared state; used by the
//! server binary for every worker and by the integration tests.

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use crate::handlers::{configure_error_handling, not_found};
use crate::routes::{health::health_check, team::find_team_by_id, user::find_user, AppState};

use kl_core::repositories::TeamRepository;

/// Create and configure the application with all dependencies
pub fn create_app<T>(
    app_state: web::Data<AppState<T>>,
    cors: Cors,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    T: TeamRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .configure(configure_error_handling)
        // Last registered runs first: Logger sees every request, CORS runs inside it
        .wrap(cors)
        .wrap(Logger::default())
        .route("/team", web::get().to(find_team_by_id::<T>))
        .route("/user", web::get().to(find_user))
        .route("/health", web::get().to(health_check))
        .default_service(web::route().to(not_found))
}
