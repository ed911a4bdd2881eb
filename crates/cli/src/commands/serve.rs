use anyhow::Result;
use flavors_core::ServerConfig;
use flavors_http::{AppState, create_router};
use flavors_service::FlavorService;
use flavors_storage::StorageBackend;
use std::sync::Arc;

pub(crate) async fn run(config: ServerConfig, in_memory: bool) -> Result<()> {
    let storage = if in_memory {
        tracing::info!("using in-memory storage");
        Arc::new(StorageBackend::new_memory())
    } else {
        Arc::new(StorageBackend::new_postgres(&config.database_url).await?)
    };

    let flavor_service = Arc::new(FlavorService::new(Arc::clone(&storage)));
    flavor_service.initialize().await?;

    let router = create_router(Arc::new(AppState::new(flavor_service)));
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    storage.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
