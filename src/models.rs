use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use llmapi::LLMMessageType;
use serde::Serialize;

use crate::brand::ContentType;
use crate::constants::{DEFAULT_IMAGE_MODEL, DEFAULT_OUTPUT_DIR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "3:4")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Wide,
        AspectRatio::Tall,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    /// Used when neither `--size` nor a content type picks one.
    pub const DEFAULT: AspectRatio = AspectRatio::Wide;

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Portrait => "3:4",
        }
    }

    pub fn valid_list() -> String {
        Self::ALL.map(AspectRatio::as_str).join(", ")
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == value.trim())
            .ok_or(())
    }
}

/// Extensions accepted for `--ref`, lower-cased and without the dot.
pub const REFERENCE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

pub fn reference_mime_type(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Everything the user asked for on the command line, before validation.
#[derive(Debug, Clone)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub content_type: Option<String>,
    pub reference_path: Option<PathBuf>,
    pub size: Option<String>,
    pub model: String,
    pub output_dir: PathBuf,
    pub include_brand: bool,
}

impl GenerateImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            content_type: None,
            reference_path: None,
            size: None,
            model: DEFAULT_IMAGE_MODEL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            include_brand: true,
        }
    }
}

/// A validated request, ready to send.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub prompt: String,
    pub model: String,
    pub aspect_ratio: AspectRatio,
    pub content_type: Option<ContentType>,
    pub reference_path: Option<PathBuf>,
    pub composed_prompt: String,
    pub parts: Vec<LLMMessageType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_round_trips_through_text() {
        for ratio in AspectRatio::ALL {
            assert_eq!(ratio.as_str().parse::<AspectRatio>(), Ok(ratio));
        }
    }

    #[test]
    fn aspect_ratio_rejects_other_strings() {
        for bad in ["", "2:1", "16x9", "3:1", "1:1:1", "square"] {
            assert!(bad.parse::<AspectRatio>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn valid_list_names_every_ratio() {
        assert_eq!(AspectRatio::valid_list(), "1:1, 16:9, 9:16, 4:3, 3:4");
    }

    #[test]
    fn reference_mime_table() {
        assert_eq!(reference_mime_type("jpg"), Some("image/jpeg"));
        assert_eq!(reference_mime_type("JPEG"), Some("image/jpeg"));
        assert_eq!(reference_mime_type("png"), Some("image/png"));
        assert_eq!(reference_mime_type("webp"), Some("image/webp"));
        assert_eq!(reference_mime_type("gif"), Some("image/gif"));
        assert_eq!(reference_mime_type("bmp"), None);
        assert_eq!(reference_mime_type(""), None);
        for ext in REFERENCE_EXTENSIONS {
            assert!(reference_mime_type(ext).is_some());
        }
    }

    #[test]
    fn request_defaults() {
        let request = GenerateImageRequest::new("a cat");
        assert!(request.include_brand);
        assert_eq!(request.model, DEFAULT_IMAGE_MODEL);
        assert_eq!(request.output_dir, PathBuf::from("./output"));
        assert!(request.size.is_none());
    }
}
