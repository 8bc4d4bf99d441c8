//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use worktrack_cache::{RedisPool, RedisPoolConfig};
use worktrack_common::{AppConfig, AppError, Mailer};
use worktrack_db::{
    create_pool, PgClientRepository, PgLeaveRepository, PgOtpRepository, PgProfileRepository,
    PgTaskRepository, PgTimeEntryRepository, PgTimesheetRepository,
};
use worktrack_service::ServiceContextBuilder;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router();
    let router = apply_middleware(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    // Health endpoints bypass the rate limiter and CORS stack
    let router = router.merge(health_routes());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = worktrack_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool =
        RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool);
    info!("Redis connection established");

    // Create the mailer from the injected SMTP configuration
    let mailer = Arc::new(Mailer::new(&config.smtp).map_err(|e| AppError::Mail(e.to_string()))?);

    // Create repositories
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let client_repo = Arc::new(PgClientRepository::new(pool.clone()));
    let task_repo = Arc::new(PgTaskRepository::new(pool.clone()));
    let otp_repo = Arc::new(PgOtpRepository::new(pool.clone()));
    let time_entry_repo = Arc::new(PgTimeEntryRepository::new(pool.clone()));
    let timesheet_repo = Arc::new(PgTimesheetRepository::new(pool.clone()));
    let leave_repo = Arc::new(PgLeaveRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(shared_redis)
        .profile_repo(profile_repo)
        .client_repo(client_repo)
        .task_repo(task_repo)
        .otp_repo(otp_repo)
        .time_entry_repo(time_entry_repo)
        .timesheet_repo(timesheet_repo)
        .leave_repo(leave_repo)
        .mailer(mailer)
        .app_url(config.app.url.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
