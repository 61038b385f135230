// src/routes/mod.rs
pub mod chat;

use std::{any::Any, path::Path};

use crate::{error::internal_error, state::SharedState};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::Response,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// `static_dir` must hold `index.html` plus the assets it links under `/static`.
///
/// `/chat` bodies are not size limited.
pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/chat", post(chat_handler).layer(DefaultBodyLimit::disable()))
        .route("/health", get(|| async { "OK" }))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "handler panicked");
    internal_error()
}
