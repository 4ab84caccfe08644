// HTTP middleware

use super::routes::AppState;
use crate::error::GatewayError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::warn;

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// Bearer token gate for the whole router, the catch-all banner included.
///
/// With no token configured the gateway is open access. With one configured,
/// the Authorization header must read exactly `Bearer <token>`.
pub async fn require_bearer_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = state.config.auth.expected_token() {
        let expected_header = format!("Bearer {}", expected);
        let provided = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if provided != Some(expected_header.as_str()) {
            warn!("Rejected request with missing or invalid bearer token");
            return GatewayError::Unauthorized.into_response();
        }
    }

    next.run(request).await
}
