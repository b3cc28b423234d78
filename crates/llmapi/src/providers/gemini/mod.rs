mod api;
pub mod models;
pub use api::{
    build_generate_body, convert_body_parts_gemini, convert_messages_to_gemini_contents,
    generate_url, response_first_inline_image, response_first_text,
    send_generate_request,
};
