use super::client::RecordStore;
use crate::record::{format_records, parse_records, Record};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{header::CONTENT_TYPE, Method, StatusCode};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9353/api/v1";

/// Client for the Landns dynamic record API.
///
/// Records travel as plain text in both directions, one record per line.
pub struct LandnsClient {
    client: reqwest::Client,
    endpoint: String,
}

#[async_trait]
impl RecordStore for LandnsClient {
    async fn set(&self, records: &[Record]) -> Result<()> {
        self.request(Method::POST, "", Some(format_records(records))).await?;
        Ok(())
    }

    async fn remove(&self, id: u64) -> Result<()> {
        self.request(Method::DELETE, &format!("id/{}", id), None).await?;
        Ok(())
    }

    async fn get(&self) -> Result<Vec<Record>> {
        self.fetch("").await
    }

    async fn glob(&self, query: &str) -> Result<Vec<Record>> {
        self.fetch(&format!("glob/{}", query)).await
    }

    async fn suffix(&self, query: &str) -> Result<Vec<Record>> {
        self.fetch(&format!("suffix/{}", query)).await
    }
}

impl LandnsClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}/{}", self.endpoint, path)
        }
    }

    async fn fetch(&self, path: &str) -> Result<Vec<Record>> {
        let text = self.request(Method::GET, path, None).await?;
        let records = parse_records(&text)
            .with_context(|| format!("Failed to parse records from {}", self.url(path)))?;
        debug!("Received {} records", records.len());
        Ok(records)
    }

    async fn request(&self, method: Method, path: &str, body: Option<String>) -> Result<String> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "text/plain").body(body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;
        let status = response.status();
        let text = response.text().await?;

        // The server reports failures as a comment line, e.g. "; 400: message".
        if status != StatusCode::OK {
            let message = text.trim();
            if message.is_empty() {
                return Err(anyhow::anyhow!("unexpected status code: {}", status.as_u16()));
            }
            return Err(anyhow::anyhow!(
                "unexpected status code: {}: {}",
                status.as_u16(),
                message
            ));
        }

        Ok(text)
    }
}

impl Default for LandnsClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
