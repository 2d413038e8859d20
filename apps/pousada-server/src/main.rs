use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use clap::{Parser, Subcommand};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use pousada_api::{router, AppState};
use pousada_core::services::{
    AccommodationService, AuthService, DashboardService, MaintenanceService, PropertyService,
    SiteService,
};
use pousada_infrastructure::{
    create_pool, run_migrations, PgAccommodationRepository, PgPropertyAccessRepository,
    PgPropertyRepository, PgReservationRepository, PgRoomRepository, PgSeedRepository,
    PgTenantRepository, PgUserRepository,
};
use pousada_security::JwtService;
use pousada_shared::config::AppConfig;
use pousada_shared::telemetry::init_telemetry;

#[derive(Parser)]
#[command(name = "pousada-server")]
#[command(about = "Multi-tenant pousada management backend", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API - Default
    Serve,
    /// Apply pending database migrations
    Migrate,
    /// Replace all data with the development dataset
    SeedDev {
        /// Allow running when app.env is "production"
        #[arg(long)]
        allow_production: bool,
    },
    /// Grant OWNER access to property owners that lack it
    BackfillAccess,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = init_telemetry(&config.log)?;

    info!("{} starting (env: {})", config.app.name, config.app.env);

    let pool = create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config, pool).await?,
        Commands::Migrate => run_migrations(&pool).await?,
        Commands::SeedDev { allow_production } => {
            let summary = maintenance(&config, &pool).seed_dev(allow_production).await?;
            info!(
                "Development data loaded (removed {} users, {} tenants, {} properties)",
                summary.users_removed, summary.tenants_removed, summary.properties_removed
            );
        }
        Commands::BackfillAccess => {
            let created = maintenance(&config, &pool).backfill_owner_access().await?;
            info!("Backfill complete: {} access rows created", created);
        }
    }

    Ok(())
}

fn maintenance(config: &AppConfig, pool: &PgPool) -> MaintenanceService {
    MaintenanceService::new(
        Arc::new(PgSeedRepository::new(pool.clone())),
        Arc::new(PgPropertyAccessRepository::new(pool.clone())),
        config.is_production(),
    )
}

fn build_state(config: &AppConfig, pool: PgPool) -> AppState {
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let tenants = Arc::new(PgTenantRepository::new(pool.clone()));
    let properties = Arc::new(PgPropertyRepository::new(pool.clone()));
    let accommodations = Arc::new(PgAccommodationRepository::new(pool.clone()));
    let rooms = Arc::new(PgRoomRepository::new(pool.clone()));
    let reservations = Arc::new(PgReservationRepository::new(pool.clone()));

    let jwt = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    AppState {
        db: pool,
        auth: Arc::new(AuthService::new(users, tenants.clone(), jwt)),
        properties: Arc::new(PropertyService::new(properties.clone(), tenants.clone())),
        accommodations: Arc::new(AccommodationService::new(
            accommodations,
            properties.clone(),
            rooms.clone(),
        )),
        site: Arc::new(SiteService::new(properties.clone(), config.app.base_domain.clone())),
        dashboard: Arc::new(DashboardService::new(properties, tenants, rooms, reservations)),
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn serve(config: AppConfig, pool: PgPool) -> anyhow::Result<()> {
    let app = router(build_state(&config, pool))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.app.cors_origins));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse().context("Invalid app.host")?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
