//! HTTP routes for the relay

mod generate;

use axum::http::HeaderValue;
use axum::response::Html;
use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use voxrelay_core::ServerConfig;

const HOME_PAGE: &str = include_str!("home.html");

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let server_config = state.config.server.clone();

    let mut router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api/generate", get(generate::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if server_config.cors_enabled {
        router = router.layer(cors_layer(&server_config));
    }

    router
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    }
}

/// Documentation page, doubling as a liveness probe for the original
/// deployment.
async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use voxrelay_core::{Config, DeliveryMode, RelayService};

    fn app(config: Config) -> Router {
        let relay = RelayService::new(&config.relay).unwrap();
        create_router(AppState::new(relay, config))
    }

    fn config_for(upstream_url: &str, delivery: DeliveryMode) -> Config {
        let mut config = Config::default();
        config.relay.upstream_url = upstream_url.to_string();
        config.relay.timeout_secs = 5;
        config.relay.delivery = delivery;
        config
    }

    async fn get_response(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn home_page_documents_the_endpoint() {
        let response = get_response(app(Config::default()), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("/api/generate"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = get_response(app(Config::default()), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_prompt_is_rejected_without_upstream_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .expect(0)
            .create_async()
            .await;

        let config = config_for(
            &format!("{}/api/generate", server.url()),
            DeliveryMode::Buffered,
        );
        let response = get_response(app(config), "/api/generate").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("prompt"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected() {
        let config = config_for("http://127.0.0.1:1/api/generate", DeliveryMode::Buffered);
        let response = get_response(app(config), "/api/generate?prompt=").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn buffered_success_returns_audio_attachment() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_header("content-type", "audio/wav")
            .with_body(b"RIFF...wav-data".as_slice())
            .create_async()
            .await;

        let config = config_for(
            &format!("{}/api/generate", server.url()),
            DeliveryMode::Buffered,
        );
        let response = get_response(app(config), "/api/generate?prompt=hi").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "audio/wav"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"voice_audio.wav\""
        );
        assert_eq!(body_bytes(response).await, b"RIFF...wav-data");
    }

    #[tokio::test]
    async fn streamed_success_preserves_upstream_content_type() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(b"mp3-bytes".as_slice())
            .create_async()
            .await;

        let config = config_for(
            &format!("{}/api/generate", server.url()),
            DeliveryMode::Streamed,
        );
        let response = get_response(app(config), "/api/generate?prompt=hi").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "audio/mpeg"
        );
        assert!(response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .is_none());
        assert_eq!(body_bytes(response).await, b"mp3-bytes");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(503)
            .with_body("rate limited")
            .create_async()
            .await;

        let config = config_for(
            &format!("{}/api/generate", server.url()),
            DeliveryMode::Buffered,
        );
        let response = get_response(app(config), "/api/generate?prompt=hi").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("503"));
        assert!(body.contains("rate limited"));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_internal_error() {
        let config = config_for("http://127.0.0.1:1/api/generate", DeliveryMode::Buffered);
        let response = get_response(app(config), "/api/generate?prompt=hi").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("transport"));
    }
}
