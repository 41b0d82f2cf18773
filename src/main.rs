//! TripMate server: travel permissions and collaborative posts.
//!
//! Entry point that loads configuration, connects to the database, runs
//! migrations, and starts the HTTP server.

use tracing_subscriber::{fmt, EnvFilter};

use tripmate_core::config::AppConfig;
use tripmate_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
///
/// `TRIPMATE_CONFIG` overrides the base file path; `TRIPMATE_ENV` selects
/// an optional `config/<env>.toml` overlay.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("TRIPMATE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("TRIPMATE_ENV").unwrap_or_else(|_| "development".to_string());

    let overlay = format!("config/{env}.toml");
    AppConfig::load(&config_path, Some(&overlay))
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TripMate v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = tripmate_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    tripmate_database::migration::run_migrations(&db_pool).await?;

    tripmate_api::run_server(config, db_pool).await
}
