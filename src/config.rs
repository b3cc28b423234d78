use llmapi::LLMClient;

use crate::constants::DEFAULT_GEMINI_ENDPOINT;
use crate::error::{GenerateError, Result};

/// Credentials and endpoint for the generator. Built once from the CLI layer
/// and passed down explicitly.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    endpoint: String,
}

impl Config {
    /// Blank or missing keys are rejected.
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        let api_key = api_key
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(GenerateError::MissingApiKey)?;

        Ok(Self {
            api_key: api_key.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn client_for(&self, model: &str) -> LLMClient {
        LLMClient::new(self.api_key.as_str(), self.endpoint.as_str(), model)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
