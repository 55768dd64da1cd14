use std::sync::Arc;

use stocklist_api::{Server, ServerConfig};
use stocklist_inventory::InMemoryItemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stocklist_observability::init();

    // One store for the life of the process; nothing is persisted.
    let store = Arc::new(InMemoryItemStore::new());

    let server = Server::new(ServerConfig::default(), store).bind().await?;
    server.run_until(stocklist_api::server::shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
}
