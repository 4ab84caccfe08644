// InstantSeek chat API wire types

use serde::{Deserialize, Serialize};

/// Request body for the upstream `/api/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user message to answer.
    pub message: String,

    /// Upstream conversation correlation id. The field is always serialized,
    /// and always as an explicit `null`: the gateway never continues a
    /// conversation, so every exchange starts fresh.
    #[serde(rename = "conversationId")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    /// Build a single-turn request for the given message.
    pub fn single_turn(message: String) -> Self {
        Self {
            message,
            conversation_id: None,
        }
    }
}

/// Response body returned by the upstream `/api/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated answer text.
    pub response: String,

    /// The conversation id the upstream assigned to this exchange.
    pub conversation_id: String,
}
