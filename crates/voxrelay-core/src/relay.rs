//! The relay itself: validate, call upstream, deliver

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::TryStreamExt;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::RelayConfig;
use crate::error::{Error, Result};
use crate::request::SynthesisRequest;
use crate::upstream::UpstreamClient;

const FALLBACK_CONTENT_TYPE: &str = "audio/wav";

/// Audio delivered incrementally, carrying the upstream-reported
/// content type.
pub struct AudioStream {
    pub content_type: String,
    pub stream: BoxStream<'static, Result<Bytes>>,
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Stateless forwarding service; one instance is shared across requests
/// and holds nothing but the upstream client.
#[derive(Debug, Clone)]
pub struct RelayService {
    upstream: UpstreamClient,
}

impl RelayService {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            upstream: UpstreamClient::new(config)?,
        })
    }

    /// Await the complete upstream body and return it in one piece.
    pub async fn generate_buffered(&self, request: &SynthesisRequest) -> Result<Bytes> {
        let response = self.upstream.synthesize(request).await?;
        let response = reject_non_ok(response).await?;
        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "buffered upstream body");
        Ok(bytes)
    }

    /// Start relaying upstream bytes as they arrive. A non-200 upstream
    /// status fails here, before any byte reaches the caller.
    pub async fn generate_streamed(&self, request: &SynthesisRequest) -> Result<AudioStream> {
        let response = self.upstream.synthesize(request).await?;
        let response = reject_non_ok(response).await?;
        let content_type = content_type_of(&response);

        Ok(AudioStream {
            content_type,
            stream: Box::pin(response.bytes_stream().map_err(Error::from)),
        })
    }
}

/// Turn a non-200 upstream response into an error carrying its status
/// and diagnostic body text.
async fn reject_non_ok(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Upstream {
        status: status.as_u16(),
        body,
    })
}

fn content_type_of(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string()
}
