//! SENSE Gateway
//!
//! HTTP layer for the data market, built with Axum. The gateway does two
//! jobs: serve the built `sense-ui` assets and relay the record API to
//! the backend that owns the data.
//!
//! # Endpoints
//!
//! ## Records (proxied to the backend)
//! - `GET /api/records` - Full record set
//! - `POST /api/records` - Upload a new record
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Static assets
//! - Everything else is served from the configured static directory,
//!   falling back to `index.html` for client-side routes.
//!
//! # Example
//!
//! ```rust,ignore
//! use sense_market::config::Config;
//! use sense_market::gateway::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Config::load_default())?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{GatewayError, GatewayResult};
pub use state::AppState;

use axum::{
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the gateway router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route(
        "/records",
        get(routes::records::list_records).post(routes::records::create_record),
    );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    // Static UI assets with SPA fallback: unknown paths resolve to
    // index.html so client-side routes survive a reload
    let static_dir = PathBuf::from(&shared_state.config.gateway.static_dir);
    let assets = ServeDir::new(&static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the gateway server
pub async fn serve(state: AppState) -> Result<(), GatewayError> {
    let addr = state.config.gateway.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SENSE gateway listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GatewayError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("SENSE gateway shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::record::{NewRecord, Record};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get as stub_get,
        Json,
    };
    use chrono::NaiveDate;
    use tower::util::ServiceExt;

    fn test_state(backend_url: &str) -> AppState {
        let mut config = Config::default();
        config.backend.base_url = backend_url.to_string();
        AppState::new(config).unwrap()
    }

    fn sample_upload() -> NewRecord {
        NewRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            location: "Seoul Forest".to_string(),
            sense_type: "smell".to_string(),
            keyword: "pine".to_string(),
            emotion_score: 8.5,
            description: "Fresh pine after rain".to_string(),
        }
    }

    /// Stub record backend on an ephemeral port
    async fn spawn_stub_backend() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let records = vec![
            serde_json::json!({
                "id": 1,
                "date": "2025-05-30",
                "location": "Han River",
                "sense_type": "sound",
                "keyword": "waves",
                "emotion_score": 7.0,
                "description": "Evening waves"
            }),
            serde_json::json!({
                "id": 2,
                "date": "2025-06-01",
                "location": "Seoul Forest",
                "sense_type": "smell",
                "keyword": "pine",
                "emotion_score": 8.5,
                "description": "Fresh pine after rain"
            }),
        ];

        let router = Router::new().route(
            "/records",
            stub_get(move || {
                let records = records.clone();
                async move { Json(records) }
            })
            .post(|Json(body): Json<serde_json::Value>| async move {
                let mut created = body;
                created["id"] = serde_json::json!(7);
                Json(created)
            }),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = build_router(test_state("http://127.0.0.1:9"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_records_proxied() {
        let backend_url = spawn_stub_backend().await;
        let app = build_router(test_state(&backend_url));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let records: Vec<Record> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].sense_type, "smell");
    }

    #[tokio::test]
    async fn test_create_record_proxied() {
        let backend_url = spawn_stub_backend().await;
        let app = build_router(test_state(&backend_url));

        let body = serde_json::to_vec(&sample_upload()).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/records")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let record: Record = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.location, "Seoul Forest");
    }

    #[tokio::test]
    async fn test_create_record_rejects_invalid_upload() {
        // Validation fires before the backend is contacted, so an
        // unreachable backend address is fine here
        let app = build_router(test_state("http://127.0.0.1:9"));

        let mut upload = sample_upload();
        upload.location = String::new();
        let body = serde_json::to_vec(&upload).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/records")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_records_backend_down() {
        let app = build_router(test_state("http://127.0.0.1:9"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_not_found() {
        let app = build_router(test_state("http://127.0.0.1:9"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
