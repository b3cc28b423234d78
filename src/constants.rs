pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
pub const FALLBACK_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const OUTPUT_EXTENSION: &str = "png";
pub const SLUG_MAX_LEN: usize = 45;
pub const PROMPT_PREVIEW_CHARS: usize = 90;
pub const DEFAULT_IMAGE_MIME: &str = "image/png";
