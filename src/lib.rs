// instantseek2api - OpenAI-compatible chat completions gateway for the InstantSeek API

pub mod cli;
pub mod config;
pub mod error;
pub mod instantseek;
pub mod models;
pub mod server;
pub mod translation;
pub mod utils;
