// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Default)]
pub struct ChatRequest {
    pub message: Option<String>,
}

impl ChatRequest {
    /// Parse a raw `/chat` body. The body must be a JSON object; a `message`
    /// that is absent or not a string is kept as `None`.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body).map_err(AppError::MalformedBody)?;
        let fields = match value {
            Value::Object(fields) => fields,
            other => return Err(AppError::NotAnObject(json_kind(&other))),
        };

        let message = match fields.get("message") {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        };
        Ok(Self { message })
    }

    /// The message with surrounding whitespace removed, if anything is left.
    pub fn trimmed_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChatResponse {
    Success { response: String },
    Error { error: String },
}

impl ChatResponse {
    pub fn success(response: impl Into<String>) -> Self {
        Self::Success { response: response.into() }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error { error: error.into() }
    }
}
