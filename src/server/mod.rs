//! Axum-based HTTP server implementation for the InstantSeek gateway.
//!
//! This module is responsible for setting up the HTTP server, configuring
//! routes, and handling incoming requests from clients that expect an
//! OpenAI-compatible API. It bridges these requests to the InstantSeek
//! chat API.
//!
//! # Components
//!
//! - `handlers`: Implementation of the chat completions endpoint and the catch-all info page.
//! - `middleware`: Bearer token gate and request ID tracking.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
