pub mod arxiv;
pub mod config;
pub mod error;
pub mod models;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::arxiv::ArxivClient;
use crate::error::ApiError;
use crate::models::{PaperRecord, SearchRequest};

pub struct AppState {
    pub arxiv: ArxivClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search_papers", post(search_papers))
        .with_state(state)
}

async fn search_papers(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<PaperRecord>>, ApiError> {
    request.validate()?;
    log::info!(
        "Searching arXiv for \"{}\" (max {} results)",
        request.query,
        request.max_results
    );
    let papers = state
        .arxiv
        .recent_papers(request.query.trim(), request.max_results)
        .await?;
    log::info!("Found {} paper(s)", papers.len());
    Ok(Json(papers))
}
