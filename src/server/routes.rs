// HTTP routes configuration

use super::handlers::{chat_completions_handler, method_not_allowed_handler, service_info_handler};
use super::middleware::{request_id_layers, require_bearer_auth};
use crate::config::AppConfig;
use crate::instantseek::InstantSeekClient;
use axum::{middleware, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub instantseek_client: Arc<InstantSeekClient>,
}

pub fn create_router(config: AppConfig, instantseek_client: InstantSeekClient) -> Router {
    let state = AppState {
        config,
        instantseek_client: Arc::new(instantseek_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route(
            "/v1/chat/completions",
            post(chat_completions_handler).fallback(method_not_allowed_handler),
        )
        // Every unknown path answers with the service banner, any method.
        .fallback(service_info_handler)
        // The token gate wraps routing itself, so even the banner is guarded.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
