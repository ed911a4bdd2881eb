use std::sync::Arc;

use anyhow::Result;
use flavors_core::ServerConfig;
use flavors_service::FlavorService;
use flavors_storage::StorageBackend;

async fn connect(config: &ServerConfig) -> Result<Arc<StorageBackend>> {
    Ok(Arc::new(StorageBackend::new_postgres(&config.database_url).await?))
}

pub(crate) async fn run_seed(config: &ServerConfig) -> Result<()> {
    let storage = connect(config).await?;
    let seeded = FlavorService::new(Arc::clone(&storage)).initialize().await?;
    println!("flavors table reset, {seeded} rows seeded");
    storage.close().await;
    Ok(())
}

pub(crate) async fn run_list(config: &ServerConfig) -> Result<()> {
    let storage = connect(config).await?;
    let flavors = FlavorService::new(Arc::clone(&storage)).list().await?;
    println!("{}", serde_json::to_string_pretty(&flavors)?);
    storage.close().await;
    Ok(())
}
