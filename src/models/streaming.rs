// OpenAI SSE streaming chunk types

use serde::{Deserialize, Serialize};

/// The literal event terminating every OpenAI-style SSE stream.
pub const DONE_EVENT: &str = "data: [DONE]\n\n";

/// A single `chat.completion.chunk` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionChunk {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<StreamChoice>,
}

/// Choice entry inside a streaming chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChoice {
    pub index: u32,
    pub delta: Delta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Incremental message payload. Unset fields are omitted from the JSON, so
/// the terminal chunk's delta serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    /// Format as a Server-Sent Event (`data: <json>\n\n`).
    ///
    /// Chunks are plain data structures built by this crate; failing to
    /// serialize one is a bug, not a runtime condition.
    pub fn to_sse(&self) -> String {
        let data = serde_json::to_string(self).expect("stream chunk serialization cannot fail");
        format!("data: {}\n\n", data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(delta: Delta, finish_reason: Option<String>) -> ChatCompletionChunk {
        ChatCompletionChunk {
            id: "chatcmpl-abc123".to_string(),
            object: "chat.completion.chunk".to_string(),
            created: 1700000000,
            model: "deepseek-chat".to_string(),
            choices: vec![StreamChoice {
                index: 0,
                delta,
                finish_reason,
            }],
        }
    }

    #[test]
    fn test_role_chunk_sse_format() {
        let event = chunk(
            Delta {
                role: Some("assistant".to_string()),
                content: None,
            },
            None,
        );

        let sse = event.to_sse();
        assert!(sse.starts_with("data: {"));
        assert!(sse.ends_with("\n\n"));
        assert!(sse.contains("\"object\":\"chat.completion.chunk\""));
        assert!(sse.contains("\"delta\":{\"role\":\"assistant\"}"));
        // unset fields must be omitted, not serialized as null
        assert!(!sse.contains("content"));
        assert!(!sse.contains("finish_reason"));
    }

    #[test]
    fn test_terminal_chunk_has_empty_delta() {
        let event = chunk(Delta::default(), Some("stop".to_string()));

        let sse = event.to_sse();
        assert!(sse.contains("\"delta\":{}"));
        assert!(sse.contains("\"finish_reason\":\"stop\""));
    }

    #[test]
    fn test_done_event_literal() {
        assert_eq!(DONE_EVENT, "data: [DONE]\n\n");
    }
}
