use async_trait::async_trait;

use crate::error::GenerationError;

pub const SYSTEM_PROMPT: &str = "You are Tuesday, a friendly and helpful AI assistant designed specifically for students. \
Your goal is to help students learn and understand concepts clearly. \
Provide helpful, accurate, and encouraging responses. \
Keep your answers clear and educational, and always maintain a positive, supportive tone. \
If you're unsure about something, be honest about it and suggest ways the student can find reliable information.";

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I couldn't generate a response right now. Please try again!";

/// A text-generation provider. One prompt in, at most one block of text out.
///
/// `Ok(None)` means the provider answered but produced no text.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}

pub fn build_prompt(message: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nStudent question: {message}")
}

/// Ask the model about a single, already trimmed student message.
pub async fn generate_reply(
    model: &dyn TextModel,
    message: &str,
) -> Result<String, GenerationError> {
    let prompt = build_prompt(message);
    let reply = model.generate(&prompt).await?;

    match reply {
        Some(text) if !text.is_empty() => Ok(text),
        _ => {
            tracing::debug!("provider returned no text, using fallback reply");
            Ok(FALLBACK_REPLY.to_string())
        }
    }
}
