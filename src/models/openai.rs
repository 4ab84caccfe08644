//! OpenAI Chat Completions API type definitions.
//!
//! These types cover the subset of the [Chat Completions API](https://platform.openai.com/docs/api-reference/chat)
//! this gateway speaks: they deserialize incoming requests from OpenAI clients
//! and serialize the completion object sent back to them.

use serde::{Deserialize, Serialize};

/// The single model identifier this gateway accepts and reports.
pub const SUPPORTED_MODEL: &str = "deepseek-chat";

/// OpenAI Chat Completions request structure.
///
/// Clients routinely send sampling parameters (`temperature`, `max_tokens`,
/// ...) that the upstream API has no use for; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// The model that will complete the conversation. Must equal
    /// [`SUPPORTED_MODEL`].
    pub model: String,

    /// The conversation so far. Only the last message is forwarded upstream.
    pub messages: Vec<Message>,

    /// Whether to emit the response as server-sent events.
    #[serde(default)]
    pub stream: bool,
}

/// A single message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender ("user", "assistant" or "system").
    pub role: String,
    /// The content of the message.
    pub content: String,
}

/// OpenAI Chat Completions response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Unique completion identifier, derived from the upstream conversation id.
    pub id: String,

    /// Object type (always "chat.completion").
    pub object: String,

    /// Unix timestamp of when the completion was created.
    pub created: i64,

    /// The model that handled the request.
    pub model: String,

    /// The generated completions (always exactly one).
    pub choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// The assistant message carrying the upstream answer.
    pub message: Message,

    /// Why generation stopped (always "stop": the upstream answer is final).
    pub finish_reason: String,

    /// Position of this choice in the list.
    pub index: u32,
}

impl ChatCompletionResponse {
    /// Create a completion for the given upstream conversation id and answer.
    pub fn new(conversation_id: &str, content: String) -> Self {
        Self {
            id: format!("chatcmpl-{}", conversation_id),
            object: "chat.completion".to_string(),
            created: chrono::Utc::now().timestamp(),
            model: SUPPORTED_MODEL.to_string(),
            choices: vec![Choice {
                message: Message {
                    role: "assistant".to_string(),
                    content,
                },
                finish_reason: "stop".to_string(),
                index: 0,
            }],
        }
    }
}
