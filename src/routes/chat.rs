use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let request = ChatRequest::from_body(&body)?;
    let message = request.trimmed_message().ok_or(AppError::Validation)?;

    let reply = generate_reply(state.model.as_ref(), message).await?;

    Ok(Json(ChatResponse::success(reply)))
}
