use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use kl_api::app::create_app;
use kl_api::config::{Config, DataSource};
use kl_api::fixture::load_teams;
use kl_api::middleware::cors::create_cors;
use kl_api::routes::AppState;
use kl_core::repositories::{InMemoryTeamRepository, TeamRepository};
use kl_infra::database::{DatabasePool, MySqlTeamRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!("Starting K-League API Server ({})", config.environment);

    match config.data_source {
        DataSource::Mysql => {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("Failed to create database pool")?;

            if !pool.health_check().await.unwrap_or(false) {
                warn!("Database health check failed; lookups will report failures");
            }

            let repository = MySqlTeamRepository::new(pool.get_pool().clone());
            serve(&config, repository).await?;
            pool.close().await;
        }
        DataSource::Memory => {
            let repository = match &config.team_fixture_path {
                Some(path) => InMemoryTeamRepository::with_teams(load_teams(path)?),
                None => {
                    warn!("TEAM_FIXTURE_PATH not set; serving an empty team directory");
                    InMemoryTeamRepository::new()
                }
            };
            serve(&config, repository).await?;
        }
    }

    Ok(())
}

/// Run the HTTP server until shutdown
async fn serve<T>(config: &Config, repository: T) -> anyhow::Result<()>
where
    T: TeamRepository + 'static,
{
    let app_state = web::Data::new(AppState::new(repository));
    let cors_config = config.cors.clone();
    let environment = config.environment;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), create_cors(&cors_config, environment))
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")
}
