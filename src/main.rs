use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vehicle_registry::config::database::DatabaseConfig;
use vehicle_registry::config::environment::{EnvironmentConfig, StoreKind};
use vehicle_registry::database::DatabaseConnection;
use vehicle_registry::repositories::{MemoryVehicleRepository, PgVehicleRepository, VehicleRepository};
use vehicle_registry::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Vehicle Registry API");
    info!("======================");

    let config = EnvironmentConfig::from_env()?;

    let vehicles: Arc<dyn VehicleRepository> = match config.store {
        StoreKind::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let db_connection = match DatabaseConnection::new(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            Arc::new(PgVehicleRepository::new(db_connection.pool().clone()))
        }
        StoreKind::Memory => {
            info!("🧪 Usando store en memoria, los datos no se persisten");
            Arc::new(MemoryVehicleRepository::new())
        }
    };

    let bind_addr = format!("{}:{}", config.host, config.port);
    let server_url = config.server_url();
    let app = create_app(AppState::new(vehicles, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("🌐 Servidor iniciando en {}", server_url);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /vehicle - Listar vehículos");
    info!("   POST   /vehicle - Crear vehículo");
    info!("   GET    /vehicle/:vin - Obtener vehículo");
    info!("   PUT    /vehicle/:vin - Actualizar vehículo");
    info!("   DELETE /vehicle/:vin - Eliminar vehículo");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
