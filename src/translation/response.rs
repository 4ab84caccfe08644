// Response translation (InstantSeek → OpenAI)

use crate::models::instantseek::ChatResponse;
use crate::models::openai::ChatCompletionResponse;
use tracing::debug;

/// Translate an upstream ChatResponse into an OpenAI chat completion.
///
/// The upstream conversation id becomes the completion id (`chatcmpl-` prefix)
/// and the answer text becomes the content of the single assistant choice.
pub fn translate_response(upstream: &ChatResponse) -> ChatCompletionResponse {
    debug!(
        "Translating upstream response for conversation {}",
        upstream.conversation_id
    );

    ChatCompletionResponse::new(&upstream.conversation_id, upstream.response.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::openai::SUPPORTED_MODEL;

    fn upstream(response: &str, conversation_id: &str) -> ChatResponse {
        ChatResponse {
            response: response.to_string(),
            conversation_id: conversation_id.to_string(),
        }
    }

    #[test]
    fn test_round_trip_fields() {
        let completion = translate_response(&upstream("hi there", "abc123"));

        assert_eq!(completion.id, "chatcmpl-abc123");
        assert_eq!(completion.object, "chat.completion");
        assert_eq!(completion.model, SUPPORTED_MODEL);
        assert_eq!(completion.choices.len(), 1);
        assert_eq!(completion.choices[0].message.role, "assistant");
        assert_eq!(completion.choices[0].message.content, "hi there");
        assert_eq!(completion.choices[0].finish_reason, "stop");
        assert_eq!(completion.choices[0].index, 0);
    }

    #[test]
    fn test_created_is_current_unix_time() {
        let before = chrono::Utc::now().timestamp();
        let completion = translate_response(&upstream("hello", "conv-1"));
        let after = chrono::Utc::now().timestamp();

        assert!(completion.created >= before && completion.created <= after);
    }

    #[test]
    fn test_serialized_shape() {
        let completion = translate_response(&upstream("Hello! How can I help?", "conv-1"));
        let json = serde_json::to_value(&completion).unwrap();

        assert_eq!(json["id"], "chatcmpl-conv-1");
        assert_eq!(json["object"], "chat.completion");
        assert_eq!(json["model"], "deepseek-chat");
        assert!(json["created"].is_i64());
        assert_eq!(json["choices"][0]["message"]["role"], "assistant");
        assert_eq!(
            json["choices"][0]["message"]["content"],
            "Hello! How can I help?"
        );
        assert_eq!(json["choices"][0]["finish_reason"], "stop");
        assert_eq!(json["choices"][0]["index"], 0);
    }
}
