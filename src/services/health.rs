use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::giveaway::GiveawayController;
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub giveaway: GiveawayHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GiveawayHealth {
    pub state_file_status: String,
    pub next_draw: Option<DateTime<Utc>>,
    pub entry_count: usize,
    pub participant_count: usize,
    pub archived_rounds: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub controller: GiveawayController,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(controller: GiveawayController) -> Self {
        let state = AppState {
            controller,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    let status = state.controller.status().await;

    let file_status = match test_state_file(&status.state_file).await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    let health_response = HealthResponse {
        status: file_status.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        giveaway: GiveawayHealth {
            state_file_status: file_status.to_string(),
            next_draw: status.end_time,
            entry_count: status.entry_count,
            participant_count: status.participant_count,
            archived_rounds: status.archived_rounds,
        },
        uptime_seconds: uptime,
    };

    if health_response.status == "healthy" {
        Ok(Json(health_response))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    let status = state.controller.status().await;
    match test_state_file(&status.state_file).await {
        Ok(_) => Ok(Json("ready")),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn liveness_check() -> Json<&'static str> {
    // If this endpoint responds, the service is alive
    Json("alive")
}

async fn test_state_file(path: &Path) -> std::io::Result<()> {
    let metadata = tokio::fs::metadata(path).await?;
    if metadata.is_file() {
        Ok(())
    } else {
        Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "state path is not a file"))
    }
}
