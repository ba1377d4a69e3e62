use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub pdf_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
}

/// Outcome of a summarization attempt. `Degraded` carries an explanatory
/// message delivered through the normal `summary` field, so callers that only
/// read the response text see no difference; callers that care can ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Generated(String),
    Degraded(String),
}

impl Summary {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Summary::Degraded(_))
    }

    pub fn into_text(self) -> String {
        match self {
            Summary::Generated(text) | Summary::Degraded(text) => text,
        }
    }
}
