// HTTP request handlers

use super::routes::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::GatewayError;
use crate::models::openai::ChatCompletionRequest;
use crate::translation::{render_sse_body, translate_request, translate_response};

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub message: String,
}

/// Catch-all handler: every path other than the chat completions endpoint
/// answers with the service banner, whatever the method.
pub async fn service_info_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "InstantSeek2Api Service Running...".to_string(),
        message: "MoLoveSze...".to_string(),
    })
}

/// Fallback for non-POST methods on the chat completions route.
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Handler for the /v1/chat/completions endpoint (OpenAI compatible)
pub async fn chat_completions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String, // Get raw JSON as string first
) -> Result<Response, GatewayError> {
    debug!(
        "Raw request JSON (first 500 chars): {}",
        body.chars().take(500).collect::<String>()
    );

    // Manually deserialize to get better error messages
    let req: ChatCompletionRequest = serde_json::from_str(&body).map_err(|e| {
        error!("Failed to deserialize request: {}", e);
        GatewayError::InvalidRequest(e.to_string())
    })?;

    info!(
        "Received chat completions request: model={}, messages={}, stream={}",
        req.model,
        req.messages.len(),
        req.stream
    );

    let upstream_req = translate_request(&req)?;
    let upstream_resp = state.instantseek_client.send_message(&upstream_req).await?;

    // An Accept header of exactly text/event-stream forces streaming even
    // when the body says stream=false. Exact match, no media-type parsing.
    let streaming = req.stream
        || headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) == Some("text/event-stream");

    let completion = translate_response(&upstream_resp);

    if streaming {
        debug!("Rendering streamed response for {}", completion.id);
        let sse_body = render_sse_body(&completion);

        Ok(Response::builder()
            .status(200)
            .header("Content-Type", "text/event-stream")
            .header("Cache-Control", "no-cache")
            .header("Connection", "keep-alive")
            .body(Body::from(sse_body))
            .unwrap())
    } else {
        Ok(Json(completion).into_response())
    }
}
