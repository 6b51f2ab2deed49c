use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use driver_finance::config::environment::EnvironmentConfig;
use driver_finance::database::connection::{create_pool, run_migrations};
use driver_finance::middleware::auth::auth_middleware;
use driver_finance::middleware::cors::cors_middleware;
use driver_finance::routes;
use driver_finance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Driver Finance - Ledger de Motoristas");
    info!("========================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar banco de dados
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    run_migrations(&pool).await?;
    info!("✅ Migrações aplicadas");

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(pool, config);

    // Rotas protegidas pelo middleware de autenticação
    let protected = Router::new()
        .nest("/api/auth", routes::auth_routes::create_profile_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/category", routes::category_routes::create_category_router())
        .nest("/api/shift", routes::shift_routes::create_shift_router())
        .nest("/api/transaction", routes::transaction_routes::create_transaction_router())
        .nest("/api/maintenance", routes::maintenance_routes::create_maintenance_router())
        .nest("/api/report", routes::report_routes::create_report_router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protected)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state);

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Health check");
    info!("🔑 Autenticação:");
    info!("   POST /api/auth/register - Cadastrar usuário");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Perfil do usuário");
    info!("🚗 Veículos:");
    info!("   POST /api/vehicle - Cadastrar veículo");
    info!("   GET  /api/vehicle - Listar veículos");
    info!("   GET  /api/vehicle/:id - Detalhe com indicadores");
    info!("   PATCH /api/vehicle/:id/status - Ativar/desativar");
    info!("   GET  /api/vehicle/:id/last-km - Sugestão de KM");
    info!("📅 Plantões:");
    info!("   POST /api/shift/start - Iniciar plantão");
    info!("   POST /api/shift/end - Encerrar plantão");
    info!("   GET  /api/shift/active - Plantão aberto");
    info!("   GET  /api/shift - Histórico");
    info!("   GET  /api/shift/:id/transactions - Transações do plantão");
    info!("💰 Transações:");
    info!("   POST /api/transaction - Lançar receita/custo");
    info!("   PUT  /api/transaction/:id - Atualizar (recalcula totais)");
    info!("   DELETE /api/transaction/:id - Remover (recalcula totais)");
    info!("🔧 Manutenções:");
    info!("   POST /api/maintenance - Registrar manutenção");
    info!("   GET  /api/maintenance - Listar manutenções");
    info!("📊 Relatórios (PRO):");
    info!("   GET  /api/report/monthly - Relatório mensal");
    info!("   GET  /api/report/export - Exportar CSV");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Endpoint de health check
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "driver-finance",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de desligamento graceful
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
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
