//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::components::OptionDraft;
use crate::navitas;

use super::dto::*;
use super::state::AppState;

/// Years accepted for date resolution on import.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1970..=2100;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/navitas/parse", post(parse_paste))
        .route("/api/navitas/import", post(import_paste))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Reject pastes over the configured size before parsing.
fn check_input_size(text: &serde_json::Value, state: &AppState) -> Result<(), AppError> {
    let limit = state.config.max_input_bytes;
    match text.as_str() {
        Some(s) if s.len() > limit => Err(AppError::PayloadTooLarge {
            message: format!("Input is {} bytes; the limit is {} bytes", s.len(), limit),
        }),
        _ => Ok(()),
    }
}

/// Parse a paste for preview.
///
/// Always answers 200 for any JSON body: parse failures are part of the
/// result, not an HTTP error.
async fn parse_paste(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, AppError> {
    let Json(req) = payload?;
    check_input_size(&req.text, &state)?;

    let result = navitas::parse_value(&req.text);
    info!(
        options = result.options.len(),
        errors = result.errors.len(),
        "parsed navitas paste"
    );

    Ok(Json(ParseResponse::from_result(&result)))
}

/// Parse a paste and convert every option into a storable draft.
async fn import_paste(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ImportResponse>, AppError> {
    let Json(req) = payload?;
    check_input_size(&req.text, &state)?;

    if let Some(year) = req.year.filter(|y| !YEAR_RANGE.contains(y)) {
        return Err(AppError::BadRequest {
            message: format!(
                "Invalid year: {} (expected {}-{})",
                year,
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ),
        });
    }

    let result = navitas::parse_value(&req.text);

    let mut errors = result.errors.clone();
    let mut drafts = Vec::with_capacity(result.options.len());
    for (i, option) in result.options.iter().enumerate() {
        match OptionDraft::from_option(option, req.year) {
            Ok(draft) => drafts.push(DraftResult::from_draft(&draft)),
            Err(e) => {
                warn!(option = i + 1, error = %e, "option could not be converted");
                errors.push(format!("Option {}: {}", i + 1, e));
            }
        }
    }

    if drafts.is_empty() {
        return Err(AppError::Unprocessable {
            message: format!("No importable options: {}", errors.join("; ")),
        });
    }

    info!(
        drafts = drafts.len(),
        errors = errors.len(),
        "imported navitas paste"
    );

    Ok(Json(ImportResponse { drafts, errors }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    PayloadTooLarge { message: String },
    Unprocessable { message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            // Well-formed JSON whose fields have the wrong types
            JsonRejection::JsonDataError(_) => AppError::Unprocessable { message },
            _ => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
