pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod llm;
pub mod models;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::download::PdfFetcher;
use crate::error::ApiError;
use crate::llm::SummarizationBackend;
use crate::models::{Summary, SummarizeRequest, SummarizeResponse};

pub const EMPTY_TEXT_MESSAGE: &str =
    "Could not extract readable text from PDF for summarization.";
pub const UNCONFIGURED_MESSAGE: &str =
    "LLM summarization is not configured or failed to initialize.";

pub struct AppState {
    pub fetcher: PdfFetcher,
    pub backend: Option<Box<dyn SummarizationBackend>>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/summarize_pdf", post(summarize_pdf))
        .with_state(state)
}

async fn summarize_pdf(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    log::info!("Received request to summarize PDF: {}", request.pdf_url);
    let summary = summarize_document(&state, &request.pdf_url).await?;
    if summary.is_degraded() {
        log::warn!("Returning degraded summary for {}", request.pdf_url);
    }
    Ok(Json(SummarizeResponse {
        summary: summary.into_text(),
    }))
}

/// Download, extract, summarize. Linear; the only branches are early exits.
pub async fn summarize_document(state: &AppState, pdf_url: &str) -> Result<Summary, ApiError> {
    let bytes = state.fetcher.fetch(pdf_url).await?;
    let text = extract::extract_pdf_text(&bytes)?;
    summarize_text(state.backend.as_deref(), &text).await
}

/// Blank text never reaches a backend, and a missing backend never fails the
/// request; both produce a degraded summary instead.
pub async fn summarize_text(
    backend: Option<&dyn SummarizationBackend>,
    text: &str,
) -> Result<Summary, ApiError> {
    if text.trim().is_empty() {
        return Ok(Summary::Degraded(EMPTY_TEXT_MESSAGE.to_string()));
    }
    let Some(backend) = backend else {
        return Ok(Summary::Degraded(UNCONFIGURED_MESSAGE.to_string()));
    };
    let prompt = llm::summary_prompt(text);
    let generated = backend
        .summarize(&prompt)
        .await
        .map_err(|cause| ApiError::Backend {
            provider: backend.name(),
            cause,
        })?;
    Ok(Summary::Generated(generated))
}
