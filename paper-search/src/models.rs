use serde::{Deserialize, Serialize};

use crate::error::ApiError;

fn default_max_results() -> u32 {
    5
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl SearchRequest {
    /// Boundary validation, performed before any call to the external index.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.query.trim().is_empty() {
            return Err(ApiError::InvalidRequest("query must not be empty".to_string()));
        }
        if !(1..=20).contains(&self.max_results) {
            return Err(ApiError::InvalidRequest(format!(
                "max_results must be between 1 and 20, got {}",
                self.max_results
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub url: String,
    pub published_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
}
