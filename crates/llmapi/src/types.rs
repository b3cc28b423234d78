#[derive(Clone, Debug, PartialEq)]
pub enum LLMMessageType {
    TEXT(String),
    IMAGE { data_b64: String, mime_type: String },
}
impl LLMMessageType {
    pub fn text(text: impl Into<String>) -> Self {
        LLMMessageType::TEXT(text.into())
    }
    pub fn image_b64(data_b64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        LLMMessageType::IMAGE {
            data_b64: data_b64.into(),
            mime_type: mime_type.into(),
        }
    }
    pub fn image_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::image_b64(crate::utils::encode_bytes_to_base64(bytes), mime_type)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LLMUserType {
    Human,
    AI,
}

#[derive(Clone, Debug)]
pub struct LLMMessage {
    pub role: LLMUserType,
    pub content: Vec<LLMMessageType>,
}

impl LLMMessage {
    pub fn user(content: Vec<LLMMessageType>) -> Self {
        Self {
            role: LLMUserType::Human,
            content,
        }
    }
}

#[derive(Clone)]
pub struct LLMClient {
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) default_model: String,
}

impl LLMClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Self {
        let default_model = default_model.into();
        let default_model = default_model
            .strip_prefix("models/")
            .map(str::to_string)
            .unwrap_or(default_model);
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            default_model,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }
}

// The key never reaches debug output.
impl std::fmt::Debug for LLMClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMClient")
            .field("endpoint", &self.endpoint)
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_strips_models_prefix() {
        let client = LLMClient::new("key", "https://example.test/v1beta/models", "models/gemini-x");
        assert_eq!(client.default_model(), "gemini-x");

        let client = LLMClient::new("key", "https://example.test", "gemini-y");
        assert_eq!(client.default_model(), "gemini-y");
    }

    #[test]
    fn client_debug_hides_key() {
        let client = LLMClient::new("super-secret", "https://example.test", "gemini-x");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("gemini-x"));
    }

    #[test]
    fn user_message_has_human_role() {
        let message = LLMMessage::user(vec![LLMMessageType::text("hi")]);
        assert_eq!(message.role, LLMUserType::Human);
        assert_eq!(message.content, vec![LLMMessageType::text("hi")]);
    }

    #[test]
    fn image_bytes_are_base64_encoded() {
        let part = LLMMessageType::image_bytes(b"abc", "image/png");
        assert_eq!(part, LLMMessageType::image_b64("YWJj", "image/png"));
    }
}
