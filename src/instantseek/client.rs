// InstantSeek API client

use crate::config::UpstreamConfig;
use crate::error::{GatewayError, Result};
use crate::models::instantseek::{ChatRequest, ChatResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Browser fingerprint sent with every upstream call.
///
/// The InstantSeek endpoint only answers requests that look like its own web
/// client, so these values are carried verbatim. They are an opaque unit:
/// change one and the upstream starts refusing traffic.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("sec-ch-ua-platform", "Windows"),
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36 Edg/133.0.0.0",
    ),
    (
        "sec-ch-ua",
        "\"Not(A:Brand\";v=\"99\", \"Microsoft Edge\";v=\"133\", \"Chromium\";v=\"133\"",
    ),
    ("Content-Type", "application/json"),
    ("sec-ch-ua-mobile", "?0"),
    ("Accept", "*/*"),
    ("Sec-Fetch-Site", "same-origin"),
    ("Sec-Fetch-Mode", "cors"),
    ("Sec-Fetch-Dest", "empty"),
    ("host", "instantseek.org"),
];

/// Client for the InstantSeek chat API.
///
/// Sends single-turn chat requests and decodes the answer. Every request
/// carries the browser fingerprint headers above; there is no API key, the
/// fingerprint is the whole handshake.
pub struct InstantSeekClient {
    http_client: Client,
    config: UpstreamConfig,
}

impl InstantSeekClient {
    /// Create a new InstantSeek client with connection pooling.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Send one chat message and decode the upstream answer.
    ///
    /// The upstream replies with HTTP 200 whether or not it liked the
    /// request, so the status code is not branched on. A body that does not
    /// decode as a chat answer is the failure signal, and the status goes
    /// into the error text for diagnosis.
    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse> {
        debug!("Calling InstantSeek chat API at {}", self.config.url);

        let mut http_request = self.http_client.post(&self.config.url);
        for (name, value) in BROWSER_HEADERS {
            http_request = http_request.header(*name, *value);
        }

        let response = http_request
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::InstantSeekApi(format!("HTTP error: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| GatewayError::InstantSeekApi(format!("Failed to read response body: {}", e)))?;

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse InstantSeek response: {}", e);
            error!("Upstream status: {} - Response body: {}", status, response_text);
            GatewayError::InstantSeekDecode(format!("HTTP {}: {}", status, e))
        })?;

        debug!(
            "Received InstantSeek answer for conversation {}",
            chat_response.conversation_id
        );
        Ok(chat_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_headers_are_verbatim() {
        let headers: std::collections::HashMap<_, _> = BROWSER_HEADERS.iter().copied().collect();

        assert_eq!(headers.len(), 10);
        assert_eq!(headers["sec-ch-ua-platform"], "Windows");
        assert_eq!(headers["sec-ch-ua-mobile"], "?0");
        assert_eq!(headers["Accept"], "*/*");
        assert_eq!(headers["Sec-Fetch-Site"], "same-origin");
        assert_eq!(headers["Sec-Fetch-Mode"], "cors");
        assert_eq!(headers["Sec-Fetch-Dest"], "empty");
        assert_eq!(headers["host"], "instantseek.org");
        assert!(headers["User-Agent"].contains("Edg/133.0.0.0"));
        assert!(headers["sec-ch-ua"].contains("\"Microsoft Edge\";v=\"133\""));
    }

    #[tokio::test]
    async fn test_send_message_decodes_answer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .match_header("user-agent", mockito::Matcher::Regex("Edg/133".to_string()))
            .match_header("sec-fetch-mode", "cors")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "message": "hello",
                "conversationId": null,
            })))
            .with_status(200)
            .with_body(r#"{"response":"hi there","conversation_id":"conv-9"}"#)
            .create_async()
            .await;

        let config = UpstreamConfig {
            url: format!("{}/api/chat", server.url()),
            timeout_seconds: 5,
        };
        let client = InstantSeekClient::new(&config).unwrap();

        let answer = client
            .send_message(&ChatRequest::single_turn("hello".to_string()))
            .await
            .unwrap();

        assert_eq!(answer.response, "hi there");
        assert_eq!(answer.conversation_id, "conv-9");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_rejects_undecodable_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body("<html>blocked</html>")
            .create_async()
            .await;

        let config = UpstreamConfig {
            url: format!("{}/api/chat", server.url()),
            timeout_seconds: 5,
        };
        let client = InstantSeekClient::new(&config).unwrap();

        let err = client
            .send_message(&ChatRequest::single_turn("hello".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::InstantSeekDecode(_)));
        assert!(err.to_string().contains("HTTP 200"));
    }

    #[tokio::test]
    async fn test_send_message_reports_transport_failure() {
        // Port 1 refuses connections on any sane test host.
        let config = UpstreamConfig {
            url: "http://127.0.0.1:1/api/chat".to_string(),
            timeout_seconds: 5,
        };
        let client = InstantSeekClient::new(&config).unwrap();

        let err = client
            .send_message(&ChatRequest::single_turn("hello".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::InstantSeekApi(_)));
    }
}
