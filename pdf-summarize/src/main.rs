use std::sync::Arc;

use pdf_summarize::config::SummarizeConfig;
use pdf_summarize::download::PdfFetcher;
use pdf_summarize::{llm, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = SummarizeConfig::from_env();
    // A missing credential is a degraded state, not a startup failure.
    let backend = llm::build_backend(&config.llm);
    let state = Arc::new(AppState {
        fetcher: PdfFetcher::new(config.download_timeout),
        backend,
    });

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("PDF summarize service listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
