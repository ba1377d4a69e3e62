use anyhow::anyhow;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

use crate::config::SearchConfig;
use crate::error::ApiError;
use crate::models::PaperRecord;

pub struct ArxivClient {
    http: Client,
    base_url: String,
}

impl ArxivClient {
    pub fn new(config: &SearchConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent("paper-scout/0.1 (academic paper discovery)")
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.arxiv_base_url.clone(),
        })
    }

    /// One query against the arXiv export API, newest submissions first.
    /// Either the full mapped list comes back or the call fails; no partial results.
    pub async fn recent_papers(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<PaperRecord>, ApiError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("search_query", format!("all:{}", query))])
            .query(&[("start", "0".to_string()), ("max_results", max_results.to_string())])
            .query(&[("sortBy", "submittedDate"), ("sortOrder", "descending")])
            .send()
            .await
            .map_err(|e| ApiError::Upstream(anyhow!("arXiv request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream(anyhow!("arXiv API error: HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Upstream(anyhow!("failed to read arXiv response: {}", e)))?;

        let mut records = parse_atom_feed(&body).map_err(ApiError::Upstream)?;
        records.truncate(max_results as usize);
        Ok(records)
    }
}

enum EntryField {
    Title,
    Summary,
    Url,
    Published,
    AuthorName,
}

// Atom element names may carry a namespace prefix depending on the feed.
fn local_name(raw: &[u8]) -> &[u8] {
    match raw.iter().position(|b| *b == b':') {
        Some(ix) => &raw[ix + 1..],
        None => raw,
    }
}

pub(crate) fn parse_atom_feed(xml: &str) -> anyhow::Result<Vec<PaperRecord>> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut records = Vec::new();

    let mut in_entry = false;
    let mut field: Option<EntryField> = None;
    let mut title = String::new();
    let mut summary = String::new();
    let mut url = String::new();
    let mut published = String::new();
    let mut authors: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) => {
                let name = start.name().as_ref().to_vec();
                match local_name(&name) {
                    b"entry" => {
                        in_entry = true;
                        title.clear();
                        summary.clear();
                        url.clear();
                        published.clear();
                        authors.clear();
                        field = None;
                    }
                    b"title" if in_entry => field = Some(EntryField::Title),
                    b"summary" if in_entry => field = Some(EntryField::Summary),
                    b"id" if in_entry => field = Some(EntryField::Url),
                    b"published" if in_entry => field = Some(EntryField::Published),
                    b"name" if in_entry => field = Some(EntryField::AuthorName),
                    _ => {}
                }
            }
            Ok(Event::Text(text)) => {
                if let Some(target) = field.take() {
                    let value = text.unescape().unwrap_or_default().trim().to_string();
                    match target {
                        EntryField::Title => title = value,
                        EntryField::Summary => summary = value,
                        EntryField::Url => url = value,
                        EntryField::Published => published = value,
                        EntryField::AuthorName => authors.push(value),
                    }
                }
            }
            Ok(Event::End(end)) => {
                let name = end.name().as_ref().to_vec();
                if local_name(&name) == b"entry" && in_entry {
                    in_entry = false;
                    let published_date = published
                        .split('T')
                        .next()
                        .unwrap_or(published.as_str())
                        .to_string();
                    records.push(PaperRecord {
                        title: title.clone(),
                        authors: authors.clone(),
                        summary: summary.clone(),
                        url: url.clone(),
                        published_date,
                    });
                }
                field = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow!("failed to parse arXiv feed: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(records)
}
