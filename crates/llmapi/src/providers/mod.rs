pub mod gemini;

pub use gemini::{convert_body_parts_gemini, send_generate_request};
