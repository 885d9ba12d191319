use std::str::FromStr;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use errors::AppError;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, SqlitePool};
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod handlers;
mod middlewares;
mod models;
mod schema;
mod utils;
mod validation;

#[cfg(test)]
mod test_init_app;

/// Everything a handler needs, built once in `main`.
pub struct GlobalState{
    pub pool: SqlitePool,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {

    dotenv().ok();

    tracing_subscriber::fmt()
    .with_env_filter(
        EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("course_marketplace=info,actix_web=info"))
    )
    .init();

    let config = Config::from_env()?;

    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
    .map_err(|_e| AppError::InvalidEnv("DATABASE_URL"))?
    .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
    .max_connections(config.max_connections)
    .connect_with(connect_options)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "database connection failed");
        AppError::DbConnect
    })?;

    sqlx::migrate!()
    .run(&pool)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "migrations failed");
        AppError::Migrate
    })?;

    let address = config.bind_address.clone();

    let global_state = GlobalState{pool, config};

    let app_data = web::Data::new(global_state);

    tracing::info!("The Server is running at {}", address);

    HttpServer::new(
        move||{
            App::new()
            .wrap(Logger::default())
            .app_data(app_data.clone())
            .configure(handlers::configure)
        }
    ).bind(&address)
    .map_err(|_e|AppError::SocketBind)?
    .run()
    .await
    .map_err(|_e|AppError::ServerStart)?;

    Ok(())

}
