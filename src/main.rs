use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use parking_management::config::database::DatabaseConfig;
use parking_management::config::environment::{EnvironmentConfig, StorageBackend};
use parking_management::database::DatabaseConnection;
use parking_management::repositories::document_store::{DocumentStore, MemoryDocumentStore};
use parking_management::repositories::pg_document_store::PgDocumentStore;
use parking_management::routes::create_app;
use parking_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let default_level = if config.is_development() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("🅿️ Parking Management API");
    info!("================================================");

    // Inicializar almacén de documentos
    let store: Arc<dyn DocumentStore> = match config.storage_backend {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let connection = match DatabaseConnection::connect(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            Arc::new(PgDocumentStore::new(connection.pool().clone()))
        }
        StorageBackend::Memory => {
            info!("🧠 Usando almacén en memoria (los datos se pierden al reiniciar)");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("📊 Dashboard:");
    info!("   GET    /api/dashboard - Listado y contadores");
    info!("   DELETE /api/dashboard/vehicles/:id - Eliminar vehículo");
    info!("🚗 Vehículos:");
    info!("   GET    /api/vehicles - Listar vehículos");
    info!("   GET    /api/vehicles/:id - Obtener vehículo");
    info!("📝 Formulario:");
    info!("   POST   /api/parking-form - Abrir formulario de alta");
    info!("   POST   /api/parking-form/vehicles/:id - Abrir formulario de edición");
    info!("   GET    /api/parking-form/sessions/:id - Ver borrador");
    info!("   PATCH  /api/parking-form/sessions/:id - Cambiar un campo");
    info!("   POST   /api/parking-form/sessions/:id/submit - Enviar");
    info!("   DELETE /api/parking-form/sessions/:id - Cerrar formulario");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

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
