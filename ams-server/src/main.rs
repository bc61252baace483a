pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

use crate::app_state::AppState;
use crate::routes::build_router;

use ams_auth::{
    Authenticator, AuthenticatorChain, LocalAuthenticator, Reconciler, RemoteClientConfig,
    RemoteIdentityClient,
};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

/// How often the expired-session sweeper runs
const SESSION_SWEEP_INTERVAL_SECS: u64 = 3600;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up .env in development; missing file is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ams_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = ams_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ams-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(config.database.busy_timeout_secs)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    ams_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Assemble the authenticator chain: remote bridge first (when the
    // identity API is configured), local credentials as the fallback.
    let chain = build_authenticator_chain(&config, pool.clone())?;

    let state = AppState::new(pool.clone(), chain, config.session.ttl_secs);

    // Periodically sweep expired sessions so the table does not grow
    // without bound.
    let sweep_pool = pool.clone();
    tokio::spawn(async move {
        let sessions = ams_db::SessionRepository::new(sweep_pool);
        loop {
            tokio::time::sleep(Duration::from_secs(SESSION_SWEEP_INTERVAL_SECS)).await;
            match sessions.delete_expired(chrono::Utc::now()).await {
                Ok(0) => {}
                Ok(n) => info!("Swept {} expired sessions", n),
                Err(e) => warn!("Expired session sweep failed: {}", e),
            }
        }
    });

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}

/// Build the ordered authenticator chain from configuration.
fn build_authenticator_chain(
    config: &ams_config::Config,
    pool: SqlitePool,
) -> Result<AuthenticatorChain, Box<dyn Error>> {
    let mut authenticators: Vec<Arc<dyn Authenticator>> = Vec::new();

    if config.identity_api.is_configured() {
        let identity = &config.identity_api;
        let application_key = identity
            .application_key
            .clone()
            .unwrap_or_default();

        let client = RemoteIdentityClient::new(RemoteClientConfig {
            base_url: identity.base_url.clone(),
            verify_path: identity.verify_path.clone(),
            profile_path: identity.profile_path.clone(),
            application_key,
            timeout: Duration::from_secs(identity.timeout_secs),
            cache_ttl: Duration::from_secs(identity.cache_ttl_secs),
        })?;

        authenticators.push(Arc::new(ams_auth::RemoteAuthenticator::new(
            Arc::new(client),
            Reconciler::new(pool.clone()),
        )));
    } else {
        warn!("Identity API not configured; remote authentication disabled");
    }

    authenticators.push(Arc::new(LocalAuthenticator::new(pool)));

    Ok(AuthenticatorChain::new(authenticators))
}
