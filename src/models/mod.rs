//! Data models for the OpenAI-compatible surface and the InstantSeek API.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The inbound OpenAI-compatible API (`openai`)
//! - The upstream InstantSeek chat API (`instantseek`)
//! - Streaming chunk types (`streaming`)

pub mod instantseek;
pub mod openai;
pub mod streaming;

pub use instantseek::{ChatRequest, ChatResponse};
pub use openai::{ChatCompletionRequest, ChatCompletionResponse, Choice, Message, SUPPORTED_MODEL};
pub use streaming::*;
