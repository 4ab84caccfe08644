// Streaming translation (completion → SSE chunk sequence)

use crate::models::openai::ChatCompletionResponse;
use crate::models::streaming::{ChatCompletionChunk, Delta, StreamChoice, DONE_EVENT};

fn chunk_from(
    completion: &ChatCompletionResponse,
    delta: Delta,
    finish_reason: Option<String>,
) -> ChatCompletionChunk {
    ChatCompletionChunk {
        id: completion.id.clone(),
        object: "chat.completion.chunk".to_string(),
        created: completion.created,
        model: completion.model.clone(),
        choices: vec![StreamChoice {
            index: 0,
            delta,
            finish_reason,
        }],
    }
}

/// Render the complete SSE body for a finished completion.
///
/// The upstream answer is single-shot, so "streaming" is a format adaptation:
/// a role announcement, one chunk carrying the completion's single choice
/// text, the terminal chunk and the `[DONE]` sentinel, all rendered into one
/// buffer before any byte reaches the client.
pub fn render_sse_body(completion: &ChatCompletionResponse) -> String {
    let content = completion
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .unwrap_or_default();

    let role_chunk = chunk_from(
        completion,
        Delta {
            role: Some("assistant".to_string()),
            content: None,
        },
        None,
    );
    let content_chunk = chunk_from(
        completion,
        Delta {
            role: None,
            content: Some(content),
        },
        None,
    );
    let terminal_chunk = chunk_from(completion, Delta::default(), Some("stop".to_string()));

    let mut body = String::new();
    body.push_str(&role_chunk.to_sse());
    body.push_str(&content_chunk.to_sse());
    body.push_str(&terminal_chunk.to_sse());
    body.push_str(DONE_EVENT);
    body
}
