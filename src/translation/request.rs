// Request translation (OpenAI → InstantSeek)

use crate::error::{GatewayError, Result};
use crate::models::instantseek::ChatRequest;
use crate::models::openai::{ChatCompletionRequest, SUPPORTED_MODEL};
use tracing::debug;

/// Translate an OpenAI chat completion request into an upstream ChatRequest.
///
/// The upstream API answers a single message per call, so only the content of
/// the last inbound message is forwarded; earlier context is dropped.
pub fn translate_request(req: &ChatCompletionRequest) -> Result<ChatRequest> {
    if req.model != SUPPORTED_MODEL {
        debug!("Rejecting unsupported model: {}", req.model);
        return Err(GatewayError::UnsupportedModel(req.model.clone()));
    }

    let last = req
        .messages
        .last()
        .ok_or_else(|| GatewayError::InvalidRequest("messages must be non-empty".to_string()))?;

    debug!(
        "Translating request: forwarding last of {} messages upstream",
        req.messages.len()
    );

    Ok(ChatRequest::single_turn(last.content.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::openai::Message;

    fn request(model: &str, contents: &[&str]) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: model.to_string(),
            messages: contents
                .iter()
                .map(|c| Message {
                    role: "user".to_string(),
                    content: c.to_string(),
                })
                .collect(),
            stream: false,
        }
    }

    #[test]
    fn test_forwards_last_message_only() {
        let req = request(SUPPORTED_MODEL, &["first", "second", "third"]);
        let upstream = translate_request(&req).unwrap();

        assert_eq!(upstream.message, "third");
        assert!(upstream.conversation_id.is_none());
    }

    #[test]
    fn test_single_message() {
        let req = request(SUPPORTED_MODEL, &["hello"]);
        assert_eq!(translate_request(&req).unwrap().message, "hello");
    }

    #[test]
    fn test_rejects_unsupported_model() {
        let req = request("gpt-4o", &["hello"]);
        let err = translate_request(&req).unwrap_err();

        assert!(matches!(err, GatewayError::UnsupportedModel(_)));
        assert_eq!(err.to_string(), "Only deepseek-chat model is supported");
    }

    #[test]
    fn test_model_match_is_case_sensitive() {
        let req = request("DeepSeek-Chat", &["hello"]);
        assert!(translate_request(&req).is_err());
    }

    #[test]
    fn test_rejects_empty_messages() {
        let req = request(SUPPORTED_MODEL, &[]);
        let err = translate_request(&req).unwrap_err();

        assert!(matches!(err, GatewayError::InvalidRequest(_)));
        assert_eq!(err.to_string(), "messages must be non-empty");
    }
}
