//! HTTP client for the upstream text-to-speech API

use std::time::Duration;

use reqwest::header;

use crate::config::RelayConfig;
use crate::error::Result;
use crate::request::SynthesisRequest;

// The upstream service gates on browser-shaped requests.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";
const UPSTREAM_ORIGIN: &str = "https://www.openai.fm";
const UPSTREAM_REFERER: &str = "https://www.openai.fm/";

/// Thin client over the upstream synthesis endpoint.
///
/// Owns the payload and header construction so the rest of the relay never
/// touches the third-party contract directly; pointing `upstream_url` at a
/// local fake is enough to test without the live service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    endpoint: String,
}

impl UpstreamClient {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        // One timeout budget for both delivery modes; in streamed mode it
        // caps the whole transfer, not just the first byte.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.upstream_url.clone(),
        })
    }

    /// Perform the upstream call and return the raw response. Status
    /// handling is left to the caller so the buffered and streamed paths
    /// can consume the body differently.
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<reqwest::Response> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::ORIGIN, UPSTREAM_ORIGIN)
            .header(header::REFERER, UPSTREAM_REFERER)
            .form(&request.form_fields())
            .send()
            .await?;

        Ok(response)
    }
}
