// Translation module - OpenAI ↔ InstantSeek API translation

pub mod request;
pub mod response;
pub mod streaming;

pub use request::translate_request;
pub use response::translate_response;
pub use streaming::render_sse_body;
