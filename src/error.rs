//! Failures that end an invocation.
//!
//! Every variant is terminal: the binary prints it and exits with status 1.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{AspectRatio, REFERENCE_EXTENSIONS};

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Error, Debug)]
pub enum GenerateError {
    // Usage errors
    #[error("A prompt is required.")]
    MissingPrompt,

    #[error(
        "GEMINI_API_KEY is not set.\n\n  1. Copy .env.example to .env\n  2. Add your API key: GEMINI_API_KEY=your_key_here\n  3. Get a key at: https://aistudio.google.com/app/apikey"
    )]
    MissingApiKey,

    #[error("Invalid aspect ratio \"{0}\"\n  Valid options: {valid}", valid = AspectRatio::valid_list())]
    InvalidSize(String),

    #[error("Reference image not found: {}", .0.display())]
    ReferenceNotFound(PathBuf),

    #[error("Unsupported image format \"{0}\"\n  Supported: {supported}", supported = supported_extensions())]
    UnsupportedFormat(String),

    #[error("Unable to read reference image {}: {source}", .path.display())]
    ReferenceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Remote-call errors
    #[error("Generation failed: {message}")]
    Api { message: String, hints: Vec<String> },

    // Empty-result errors
    #[error("No image was returned in the response.")]
    NoImage {
        text: Option<String>,
        block_reason: Option<String>,
    },

    // Persistence errors
    #[error("Failed to decode generated image: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Unable to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Advisory lines printed after the error itself.
    pub fn details(&self) -> Vec<String> {
        match self {
            GenerateError::Api { hints, .. } => hints.iter().map(|hint| format!("→ {hint}")).collect(),
            GenerateError::NoImage { text, block_reason } => {
                let mut lines = Vec::new();
                if let Some(reason) = block_reason {
                    lines.push(format!("Prompt was blocked: {reason}"));
                }
                if let Some(text) = text {
                    lines.push(format!("Model responded with text: {text}"));
                }
                lines
            }
            _ => Vec::new(),
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            GenerateError::MissingPrompt
                | GenerateError::MissingApiKey
                | GenerateError::InvalidSize(_)
                | GenerateError::ReferenceNotFound(_)
                | GenerateError::UnsupportedFormat(_)
                | GenerateError::ReferenceRead { .. }
        )
    }
}

fn supported_extensions() -> String {
    REFERENCE_EXTENSIONS
        .map(|ext| format!(".{ext}"))
        .join(", ")
}
