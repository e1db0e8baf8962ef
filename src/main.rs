use anyhow::Result;
use dashgate::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::ResetTokenGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use dashgate::config::AppConfig;
use dashgate::domain::{
    access::AccessRepository, area::AreaRepository, audit::AuditLogRepository,
    dashboard::DashboardRepository, user::UserRepository,
};
use dashgate::infrastructure::{
    database,
    repositories::{
        PostgresAccessRepository, PostgresAreaRepository, PostgresAuditLogRepository,
        PostgresDashboardRepository, PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenManager},
    time::SystemClock,
    util::UuidResetTokenGenerator,
};
use dashgate::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let area_repo: Arc<dyn AreaRepository> = Arc::new(PostgresAreaRepository::new(pool.clone()));
    let dashboard_repo: Arc<dyn DashboardRepository> =
        Arc::new(PostgresDashboardRepository::new(pool.clone()));
    let access_repo: Arc<dyn AccessRepository> =
        Arc::new(PostgresAccessRepository::new(pool.clone()));
    let audit_repo: Arc<dyn AuditLogRepository> =
        Arc::new(PostgresAuditLogRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.token_ttl_seconds(),
    ));
    let reset_tokens: Arc<dyn ResetTokenGenerator> = Arc::new(UuidResetTokenGenerator::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo,
        area_repo,
        dashboard_repo,
        access_repo,
        audit_repo,
        password_hasher,
        token_manager,
        reset_tokens,
        clock,
        audit_enabled: config.audit_enabled(),
        audit_retention_floor_days: config.audit_retention_floor_days(),
    }));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
