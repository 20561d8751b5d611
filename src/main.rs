use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use hundreddays::clock::Clock;
use hundreddays::config::Config;
use hundreddays::service::TaskService;
use hundreddays::store::MongoStore;
use hundreddays::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let store = MongoStore::connect(&config.mongo_uri, &config.db_name).await?;
    let service = TaskService::new(Arc::new(store), Clock::ist());

    let app = web::router(service).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], 5051));
    tracing::info!("hundreddays running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
