#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use tower::util::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tuesday_chat::{
    error::GenerationError, routes::create_router, services::chatbot::TextModel,
    state::AppState,
};

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Clone)]
pub enum Outcome {
    Reply(Option<String>),
    Fail { status: u16, message: String },
    Panic,
}

/// Scripted model that records every prompt it receives.
pub struct FakeModel {
    outcome: Outcome,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self { outcome, prompts: Mutex::new(Vec::new()) })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Outcome::Reply(Some(text.to_string())))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for FakeModel {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Fail { status, message } => Err(GenerationError::Provider {
                status: *status,
                message: message.clone(),
            }),
            Outcome::Panic => panic!("model exploded"),
        }
    }
}

pub fn app_with(model: Arc<dyn TextModel>) -> Router {
    create_router(STATIC_DIR).with_state(Arc::new(AppState::new(model)))
}

pub async fn post_chat(app: Router, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing events into a buffer until the guard drops.
/// Works with the current-thread runtime used by `#[tokio::test]`.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
