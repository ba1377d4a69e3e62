use std::time::Duration;

use anyhow::anyhow;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::error::ApiError;

pub struct PdfFetcher {
    client: Client,
    timeout: Duration,
}

impl PdfFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// Downloads the bytes behind `url`, insisting the server declares a PDF
    /// content type. A non-PDF declaration is the caller's mistake; a transport
    /// failure is the upstream host's.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let parsed = Url::parse(url)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid pdf_url \"{}\": {}", url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::InvalidRequest(format!(
                "pdf_url must be an http(s) URL, got \"{}\"",
                url
            )));
        }

        let response = self
            .client
            .get(parsed)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::DownloadFailed {
                url: url.to_string(),
                cause: anyhow!(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::DownloadFailed {
                url: url.to_string(),
                cause: anyhow!("HTTP {}", status),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("application/pdf") {
            return Err(ApiError::NotPdf {
                url: url.to_string(),
                content_type,
            });
        }

        let bytes = response.bytes().await.map_err(|e| ApiError::DownloadFailed {
            url: url.to_string(),
            cause: anyhow!(e),
        })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> PdfFetcher {
        PdfFetcher::new(Duration::from_secs(2))
    }

    #[tokio::test]
    async fn rejects_malformed_urls() {
        let err = fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn rejects_non_http_schemes() {
        let err = fetcher().fetch("ftp://example.org/paper.pdf").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}
