//! The `/api/generate` relay endpoint

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use voxrelay_core::{DeliveryMode, SynthesisRequest};

const ATTACHMENT_DISPOSITION: &str = "attachment; filename=\"voice_audio.wav\"";

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub vibe: Option<String>,
}

/// Generate voice audio from a text prompt.
///
/// Usage: `/api/generate?prompt=your+text+here&voice=alloy&vibe=null`
pub async fn generate(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Response, ApiError> {
    let relay_config = &state.config.relay;

    let prompt = params.prompt.unwrap_or_default();
    let request = SynthesisRequest::new(prompt)?
        .with_voice(
            params
                .voice
                .unwrap_or_else(|| relay_config.default_voice.clone()),
        )
        .with_vibe(
            params
                .vibe
                .unwrap_or_else(|| relay_config.default_vibe.clone()),
        );

    info!("Generating audio for: '{}'", request.prompt);

    match relay_config.delivery {
        DeliveryMode::Buffered => {
            let bytes = state.relay.generate_buffered(&request).await?;
            let headers = [
                (header::CONTENT_TYPE, "audio/wav"),
                (header::CONTENT_DISPOSITION, ATTACHMENT_DISPOSITION),
            ];
            Ok((headers, bytes).into_response())
        }
        DeliveryMode::Streamed => {
            let audio = state.relay.generate_streamed(&request).await?;
            let headers = [(header::CONTENT_TYPE, audio.content_type)];
            // Dropping the body stream on client disconnect drops the
            // upstream response and releases its connection.
            Ok((headers, Body::from_stream(audio.stream)).into_response())
        }
    }
}
