use std::sync::Arc;

use paper_search::arxiv::ArxivClient;
use paper_search::config::SearchConfig;
use paper_search::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = SearchConfig::from_env();
    let arxiv = ArxivClient::new(&config)?;
    let state = Arc::new(AppState { arxiv });

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("Paper search service listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
