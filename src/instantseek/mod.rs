// InstantSeek API client module

mod client;

pub use client::InstantSeekClient;
