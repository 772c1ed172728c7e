//! HTTP routes and handlers

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use phishguard_core::{RiskBucket, ScoreResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::page::{self, Verdict};
use crate::state::AppState;
use crate::telemetry;

const MISSING_MESSAGE: &str = "message field is required";

pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/api/analyze", post(analyze_json))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .fallback(fallback)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics_handle {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}

/// Empty form, no prior result
async fn index() -> Html<String> {
    Html(page::render(None))
}

/// Form submission body; `message` is optional so its absence maps to 400
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    message: Option<String>,
}

async fn submit_form(State(state): State<AppState>, Form(form): Form<AnalyzeForm>) -> Response {
    let Some(message) = form.message else {
        warn!("Form submitted without a message field");
        telemetry::record_rejection();
        return (
            StatusCode::BAD_REQUEST,
            Html(page::render_error(MISSING_MESSAGE)),
        )
            .into_response();
    };

    let (result, risk) = run_analysis(&state, &message).await;
    let reasons = result.reasons();
    let verdict = Verdict {
        risk,
        score: result.score(),
        reasons: &reasons,
    };

    Html(page::render(Some(&verdict))).into_response()
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub id: String,
    pub score: u32,
    pub risk: RiskBucket,
    pub label: String,
    pub reasons: Vec<String>,
}

async fn analyze_json(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let message = req.message.ok_or(AppError::MissingMessage)?;

    let (result, risk) = run_analysis(&state, &message).await;

    Ok(Json(AnalyzeResponse {
        id: uuid::Uuid::new_v4().to_string(),
        score: result.score(),
        risk,
        label: risk.label().to_string(),
        reasons: result.reasons(),
    }))
}

/// Score a message, bucket it, and record metrics
async fn run_analysis(state: &AppState, message: &str) -> (ScoreResult, RiskBucket) {
    let start = Instant::now();

    let result = state.scorer.analyze(message).await;
    let risk = RiskBucket::from_score(result.score(), &state.thresholds);

    let elapsed = start.elapsed();
    telemetry::record_analysis(&result, risk, elapsed);
    info!(
        score = result.score(),
        risk = %risk,
        chars = message.chars().count(),
        latency_ms = elapsed.as_millis() as u64,
        "Analysis complete"
    );

    (result, risk)
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("message field is required")]
    MissingMessage,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingMessage => {
                telemetry::record_rejection();
                StatusCode::BAD_REQUEST
            }
        };

        let body = json!({
            "error": {
                "message": self.to_string(),
                "type": "invalid_request_error",
            }
        });

        (status, Json(body)).into_response()
    }
}
