use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::ScoutConfig;

const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);
// PDF download and LLM generation can take much longer than a search.
const SUMMARIZE_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Deserialize)]
pub struct PaperRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_date: String,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: Option<String>,
}

pub struct ScoutAgent {
    client: Client,
    config: ScoutConfig,
}

impl ScoutAgent {
    pub fn new(config: ScoutConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn log_tool_call(tool: &str, args: &serde_json::Value, started: Instant, outcome: &str) {
        log::info!(
            "Tool Call: {}(args={}), Latency: {:.2}s, Outcome: {}",
            tool,
            args,
            started.elapsed().as_secs_f64(),
            outcome
        );
    }

    /// Calls the paper search service. Every failure is downgraded to an empty
    /// result list plus a console message; the session keeps going.
    pub async fn search_papers(&self, query: &str, max_results: u32) -> Vec<PaperRecord> {
        let args = json!({"query": query, "max_results": max_results});
        let started = Instant::now();

        let response = match self
            .client
            .post(format!("{}/search_papers", self.config.search_url))
            .json(&args)
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                Self::log_tool_call("paper_search", &args, started, "Connection Failed");
                println!(
                    "Error: Could not connect to the paper search service at {}.",
                    self.config.search_url
                );
                println!("Please make sure the paper-search server is running.");
                return Vec::new();
            }
            Err(e) => {
                Self::log_tool_call("paper_search", &args, started, &format!("Request Failed: {}", e));
                println!("Error calling the paper search service: {}", e);
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            Self::log_tool_call(
                "paper_search",
                &args,
                started,
                &format!("Request Failed: HTTP {}", status),
            );
            println!("Error calling the paper search service: HTTP {}", status);
            return Vec::new();
        }

        match response.json::<Vec<PaperRecord>>().await {
            Ok(papers) => {
                Self::log_tool_call("paper_search", &args, started, "Success");
                papers
            }
            Err(e) => {
                Self::log_tool_call("paper_search", &args, started, &format!("Bad Response: {}", e));
                println!("Error reading the paper search response: {}", e);
                Vec::new()
            }
        }
    }

    /// Calls the PDF summarize service. Failures come back as explanatory text
    /// in place of a summary; nothing here ends the session.
    pub async fn summarize_pdf(&self, pdf_url: &str) -> String {
        let args = json!({"pdf_url": pdf_url});
        let started = Instant::now();

        let response = match self
            .client
            .post(format!("{}/summarize_pdf", self.config.summarize_url))
            .json(&args)
            .timeout(SUMMARIZE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                Self::log_tool_call("pdf_summarize", &args, started, "Connection Failed");
                println!(
                    "Error: Could not connect to the PDF summarize service at {}.",
                    self.config.summarize_url
                );
                println!("Please make sure the pdf-summarize server is running.");
                return "Failed to connect to summarization service.".to_string();
            }
            Err(e) => {
                Self::log_tool_call("pdf_summarize", &args, started, &format!("Request Failed: {}", e));
                return format!("Failed to summarize PDF: {}", e);
            }
        };

        let status = response.status();
        if !status.is_success() {
            Self::log_tool_call(
                "pdf_summarize",
                &args,
                started,
                &format!("Request Failed: HTTP {}", status),
            );
            return format!("Failed to summarize PDF: HTTP {}", status);
        }

        match response.json::<SummarizeResponse>().await {
            Ok(body) => {
                Self::log_tool_call("pdf_summarize", &args, started, "Success");
                body.summary
                    .unwrap_or_else(|| "No summary received.".to_string())
            }
            Err(e) => {
                Self::log_tool_call("pdf_summarize", &args, started, &format!("Bad Response: {}", e));
                format!("Failed to summarize PDF: {}", e)
            }
        }
    }

    // Substring check, deliberately loose: arXiv abs URLs fail it and the
    // paper falls back to its abstract.
    pub fn is_pdf_url(url: &str) -> bool {
        url.contains(".pdf")
    }

    pub async fn discover_and_summarize(&self, topic: &str, num_papers: u32) {
        println!("\nScout: Searching for recent papers on '{}'...", topic);

        let papers = self.search_papers(topic, num_papers).await;

        if papers.is_empty() {
            println!("Scout: No papers found for your topic.");
            return;
        }

        println!("Scout: Found {} paper(s). Now summarizing...", papers.len());

        for (i, paper) in papers.iter().enumerate() {
            println!("\n--- Paper {}/{} ---", i + 1, papers.len());
            println!("Title: {}", or_na(&paper.title));
            println!("Authors: {}", join_or_na(&paper.authors));
            println!("Published: {}", or_na(&paper.published_date));
            println!("URL: {}", or_na(&paper.url));

            if !paper.url.is_empty() && Self::is_pdf_url(&paper.url) {
                println!("Scout: Requesting PDF summary...");
                let summary = self.summarize_pdf(&paper.url).await;
                println!("Scout Summary:\n{}", summary);
            } else {
                println!("Scout: No direct PDF URL found or URL is not a PDF. Cannot summarize.");
                if !paper.summary.is_empty() {
                    println!("Original Abstract:\n{}", paper.summary);
                }
            }
        }
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        "N/A".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    fn agent_for(search_url: &str, summarize_url: &str) -> ScoutAgent {
        ScoutAgent::new(ScoutConfig {
            search_url: search_url.to_string(),
            summarize_url: summarize_url.to_string(),
        })
    }

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn pdf_indicator_is_a_substring_match() {
        assert!(ScoutAgent::is_pdf_url("https://arxiv.org/pdf/2501.01234v1.pdf"));
        assert!(ScoutAgent::is_pdf_url("https://example.org/file.pdf?download=1"));
        assert!(!ScoutAgent::is_pdf_url("http://arxiv.org/abs/2501.01234v1"));
        assert!(!ScoutAgent::is_pdf_url(""));
    }

    #[tokio::test]
    async fn search_returns_records_in_service_order() {
        let mock = Router::new().route(
            "/search_papers",
            post(|| async {
                Json(serde_json::json!([
                    {
                        "title": "Latent Diffusion at Scale",
                        "authors": ["Doe, J."],
                        "summary": "We study scaling behavior.",
                        "url": "http://arxiv.org/abs/2501.01234v1",
                        "published_date": "2025-01-15"
                    },
                    {
                        "title": "Score Matching Revisited",
                        "authors": ["Nguyen, T."],
                        "summary": "A unified view.",
                        "url": "https://arxiv.org/pdf/2501.00987v2.pdf",
                        "published_date": "2025-01-10"
                    }
                ]))
            }),
        );
        let search_url = spawn(mock).await;
        let agent = agent_for(&search_url, "http://127.0.0.1:9");

        let papers = agent.search_papers("diffusion models", 2).await;
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "Latent Diffusion at Scale");
        assert_eq!(papers[1].title, "Score Matching Revisited");
    }

    #[tokio::test]
    async fn search_failure_downgrades_to_an_empty_list() {
        let mock = Router::new().route(
            "/search_papers",
            post(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let search_url = spawn(mock).await;
        let agent = agent_for(&search_url, "http://127.0.0.1:9");

        assert!(agent.search_papers("diffusion models", 3).await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_search_service_downgrades_to_an_empty_list() {
        let agent = agent_for(&closed_port_url(), "http://127.0.0.1:9");
        assert!(agent.search_papers("diffusion models", 3).await.is_empty());
    }

    #[tokio::test]
    async fn summarize_returns_the_service_summary() {
        let mock = Router::new().route(
            "/summarize_pdf",
            post(|| async { Json(serde_json::json!({"summary": "A concise summary."})) }),
        );
        let summarize_url = spawn(mock).await;
        let agent = agent_for("http://127.0.0.1:9", &summarize_url);

        let summary = agent.summarize_pdf("https://example.org/paper.pdf").await;
        assert_eq!(summary, "A concise summary.");
    }

    #[tokio::test]
    async fn unreachable_summarize_service_yields_explanatory_text() {
        let agent = agent_for("http://127.0.0.1:9", &closed_port_url());
        let summary = agent.summarize_pdf("https://example.org/paper.pdf").await;
        assert_eq!(summary, "Failed to connect to summarization service.");
    }

    async fn spawn_counting_summarizer() -> (String, Arc<Mutex<u32>>) {
        let hits: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
        let sink = hits.clone();
        let mock = Router::new().route(
            "/summarize_pdf",
            post(move || {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() += 1;
                    Json(serde_json::json!({"summary": "A concise summary."}))
                }
            }),
        );
        (spawn(mock).await, hits)
    }

    #[tokio::test]
    async fn zero_results_mean_zero_summarization_calls() {
        let (summarize_url, hits) = spawn_counting_summarizer().await;
        let search_url = spawn(Router::new().route(
            "/search_papers",
            post(|| async { Json(serde_json::json!([])) }),
        ))
        .await;

        let agent = agent_for(&search_url, &summarize_url);
        agent.discover_and_summarize("an obscure topic", 3).await;
        assert_eq!(*hits.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn abs_urls_fall_back_to_the_abstract_without_summarizing() {
        let (summarize_url, hits) = spawn_counting_summarizer().await;
        let search_url = spawn(Router::new().route(
            "/search_papers",
            post(|| async {
                Json(serde_json::json!([{
                    "title": "Score Matching Revisited",
                    "authors": ["Nguyen, T."],
                    "summary": "A unified view.",
                    "url": "http://arxiv.org/abs/2501.00987v2",
                    "published_date": "2025-01-10"
                }]))
            }),
        ))
        .await;

        let agent = agent_for(&search_url, &summarize_url);
        agent.discover_and_summarize("score matching", 1).await;
        assert_eq!(*hits.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn pdf_urls_are_summarized() {
        let (summarize_url, hits) = spawn_counting_summarizer().await;
        let search_url = spawn(Router::new().route(
            "/search_papers",
            post(|| async {
                Json(serde_json::json!([{
                    "title": "Latent Diffusion at Scale",
                    "authors": ["Doe, J."],
                    "summary": "We study scaling behavior.",
                    "url": "https://arxiv.org/pdf/2501.01234v1.pdf",
                    "published_date": "2025-01-15"
                }]))
            }),
        ))
        .await;

        let agent = agent_for(&search_url, &summarize_url);
        agent.discover_and_summarize("diffusion models", 1).await;
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_summary_field_yields_placeholder_text() {
        let mock = Router::new().route(
            "/summarize_pdf",
            post(|| async { Json(serde_json::json!({})) }),
        );
        let summarize_url = spawn(mock).await;
        let agent = agent_for("http://127.0.0.1:9", &summarize_url);

        let summary = agent.summarize_pdf("https://example.org/paper.pdf").await;
        assert_eq!(summary, "No summary received.");
    }
}
