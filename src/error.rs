use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ChatResponse;

pub const EMPTY_MESSAGE: &str = "Message cannot be empty";
pub const GENERIC_FAILURE: &str =
    "Sorry, I encountered an error while processing your message. Please try again!";

/// Failures from the AI provider round trip.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("message cannot be empty")]
    Validation,
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(serde_json::Error),
    #[error("request body is a JSON {0}, not an object")]
    NotAnObject(&'static str),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation => {
                (StatusCode::BAD_REQUEST, Json(ChatResponse::error(EMPTY_MESSAGE))).into_response()
            }
            err => {
                tracing::error!(error = %err, "Error in chat endpoint");
                internal_error()
            }
        }
    }
}

/// The generic 500 body. Never carries upstream detail.
pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ChatResponse::error(GENERIC_FAILURE)),
    )
        .into_response()
}
