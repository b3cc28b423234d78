pub mod providers;
pub mod types;
pub mod utils;

pub use providers::gemini::send_generate_request;
pub use types::{LLMClient, LLMMessage, LLMMessageType, LLMUserType};
