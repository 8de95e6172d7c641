use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{middleware as axum_middleware, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use keyturn_backend::config::EnvironmentConfig;
use keyturn_backend::database;
use keyturn_backend::middleware::auth::require_auth;
use keyturn_backend::middleware::cors::cors_middleware;
use keyturn_backend::routes;
use keyturn_backend::services::jwt_service::JwtService;
use keyturn_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging (más verboso en desarrollo)
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🔑 KeyTurn - Vehicle Rental Back-Office");
    info!("=======================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::run_migrations(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let jwt = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_lifetime_days,
    )?);

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config, jwt);

    // Recursos protegidos: todo menos auth pasa por require_auth
    let protected = Router::new()
        .nest("/api/agents", routes::agent_routes::create_agent_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/customers", routes::customer_routes::create_customer_router())
        .nest(
            "/api/reservations",
            routes::reservation_routes::create_reservation_router(),
        )
        .nest("/api/invoices", routes::invoice_routes::create_invoice_router())
        .nest(
            "/api/damage-reports",
            routes::damage_report_routes::create_damage_report_router(),
        )
        .nest("/api/rate-plans", routes::rate_plan_routes::create_rate_plan_router())
        .nest("/api/settings", routes::settings_routes::create_settings_router())
        .nest(
            "/api/analytics",
            routes::analytics_routes::create_analytics_router(),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest(
            "/api/auth",
            routes::auth_routes::create_auth_router(app_state.clone()),
        )
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/logout - Logout (revoca la credencial)");
    info!("   GET  /api/auth/me - Perfil actual");
    info!("🚗 Flota:");
    info!("   CRUD /api/vehicles");
    info!("👥 Clientes y agentes:");
    info!("   CRUD /api/customers");
    info!("   CRUD /api/agents (solo admin)");
    info!("📅 Reservas:");
    info!("   CRUD /api/reservations (DELETE cancela, no borra)");
    info!("💶 Facturación:");
    info!("   POST /api/invoices/from-reservation/:id");
    info!("   CRUD /api/invoices");
    info!("🧾 Otros:");
    info!("   CRUD /api/damage-reports");
    info!("   CRUD /api/rate-plans");
    info!("   GET/PUT /api/settings");
    info!("   GET  /api/analytics/summary");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint raíz
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "KeyTurn API is running",
        "status": "ok",
    }))
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "keyturn-backend",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
