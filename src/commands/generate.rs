use std::future::Future;
use std::path::{Path, PathBuf};

use chrono::Utc;
use llmapi::providers::gemini::models::{GeminiResponse, GenerationConfig};
use llmapi::providers::gemini::send_generate_request;
use llmapi::types::{LLMMessage, LLMMessageType};
use serde::Serialize;
use tokio::fs;
use tokio::fs::try_exists;

use crate::brand::ContentType;
use crate::config::Config;
use crate::constants::PROMPT_PREVIEW_CHARS;
use crate::error::{GenerateError, Result};
use crate::extract::{api_error, extract_generated_image};
use crate::fs_utils::{output_file_name, write_image};
use crate::models::{reference_mime_type, AspectRatio, GenerateImageRequest, PreparedRequest};
use crate::prompt::{compose_prompt, preview, reference_prompt};

/// The remote side of a generation. Implemented by [`GeminiGenerator`] and by
/// canned responders in tests.
pub trait ImageGenerator {
    fn generate(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = anyhow::Result<GeminiResponse>> + Send;
}

#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    config: Config,
}

impl GeminiGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ImageGenerator for GeminiGenerator {
    fn generate(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = anyhow::Result<GeminiResponse>> + Send {
        let client = self.config.client_for(&request.model);
        let messages = vec![LLMMessage::user(request.parts.clone())];
        let generation_config = GenerationConfig::image_only(request.aspect_ratio.as_str());

        async move { send_generate_request(&client, messages, Some(&generation_config)).await }
    }
}

/// Validates the invocation and assembles the ordered request parts. Reads the
/// reference image, if any; never touches the network.
pub async fn build_request(request: &GenerateImageRequest) -> Result<PreparedRequest> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(GenerateError::MissingPrompt);
    }

    let content_type = resolve_content_type(request.content_type.as_deref());
    let aspect_ratio = resolve_aspect_ratio(request.size.as_deref(), content_type)?;
    let composed_prompt = compose_prompt(prompt, request.include_brand, content_type);

    let mut parts: Vec<LLMMessageType> = Vec::new();
    match &request.reference_path {
        Some(path) => {
            // image first, the model attends to order
            parts.push(load_reference(path).await?);
            parts.push(LLMMessageType::text(reference_prompt(&composed_prompt)));
        }
        None => parts.push(LLMMessageType::text(composed_prompt.clone())),
    }

    Ok(PreparedRequest {
        prompt: prompt.to_string(),
        model: request.model.trim().to_string(),
        aspect_ratio,
        content_type,
        reference_path: request.reference_path.clone(),
        composed_prompt,
        parts,
    })
}

pub fn resolve_content_type(raw: Option<&str>) -> Option<ContentType> {
    let raw = raw?;
    match raw.parse::<ContentType>() {
        Ok(content_type) => Some(content_type),
        Err(unknown) => {
            tracing::warn!(content_type = %unknown, "ignoring unrecognized content type");
            None
        }
    }
}

/// An explicit size wins; otherwise the content type's ratio, then the global default.
pub fn resolve_aspect_ratio(
    size: Option<&str>,
    content_type: Option<ContentType>,
) -> Result<AspectRatio> {
    match size {
        Some(size) => size
            .parse::<AspectRatio>()
            .map_err(|_| GenerateError::InvalidSize(size.to_string())),
        None => Ok(content_type
            .map(ContentType::default_aspect_ratio)
            .unwrap_or(AspectRatio::DEFAULT)),
    }
}

async fn load_reference(path: &Path) -> Result<LLMMessageType> {
    let exists = try_exists(path)
        .await
        .map_err(|source| GenerateError::ReferenceRead {
            path: path.to_path_buf(),
            source,
        })?;
    if !exists {
        return Err(GenerateError::ReferenceNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let mime_type = reference_mime_type(extension).ok_or_else(|| {
        GenerateError::UnsupportedFormat(if extension.is_empty() {
            String::new()
        } else {
            format!(".{}", extension.to_ascii_lowercase())
        })
    })?;

    let bytes = fs::read(path)
        .await
        .map_err(|source| GenerateError::ReferenceRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(LLMMessageType::image_bytes(&bytes, mime_type))
}

/// Sends the request once, extracts the first image and writes it under `output_dir`.
pub async fn generate_image<G: ImageGenerator>(
    generator: &G,
    request: &PreparedRequest,
    output_dir: &Path,
) -> Result<PathBuf> {
    log_generate_payload(request);

    let response = generator
        .generate(request)
        .await
        .map_err(|err| api_error(&err, &request.model))?;

    let generated = extract_generated_image(&response)?;
    tracing::debug!(
        mime_type = %generated.mime_type,
        size = generated.bytes.len(),
        "image extracted"
    );

    let file_name = output_file_name(Utc::now(), request.content_type, &request.prompt);
    write_image(output_dir, &file_name, &generated.bytes).await
}

/// Console summary printed before the call.
pub fn summary(request: &PreparedRequest) -> String {
    let mut lines = vec![
        format!("  Model   {}", request.model),
        format!("  Size    {}", request.aspect_ratio),
        format!("  Prompt  {}", preview(&request.prompt, PROMPT_PREVIEW_CHARS)),
    ];
    if let Some(content_type) = request.content_type {
        lines.push(format!("  Type    {content_type}"));
    }
    if let Some(path) = &request.reference_path {
        lines.push(format!("  Ref     {}", path.display()));
    }
    lines.push(String::new());
    lines.push("  Generating…".to_string());
    lines.join("\n")
}

fn log_generate_payload(request: &PreparedRequest) {
    #[derive(Serialize)]
    struct DebugPart {
        kind: &'static str,
        text_length: Option<usize>,
        mime_type: Option<String>,
        data_length: Option<usize>,
    }

    #[derive(Serialize)]
    struct DebugPayload<'a> {
        model: &'a str,
        aspect_ratio: AspectRatio,
        content_type: Option<&'static str>,
        parts: Vec<DebugPart>,
    }

    let parts = request
        .parts
        .iter()
        .map(|part| match part {
            LLMMessageType::TEXT(text) => DebugPart {
                kind: "text",
                text_length: Some(text.len()),
                mime_type: None,
                data_length: None,
            },
            LLMMessageType::IMAGE {
                data_b64,
                mime_type,
            } => DebugPart {
                kind: "image",
                text_length: None,
                mime_type: Some(mime_type.clone()),
                data_length: Some(data_b64.len()),
            },
        })
        .collect();

    let payload = DebugPayload {
        model: &request.model,
        aspect_ratio: request.aspect_ratio,
        content_type: request.content_type.map(ContentType::as_str),
        parts,
    };

    match serde_json::to_string(&payload) {
        Ok(json) => tracing::debug!(payload = %json, "generate request"),
        Err(err) => tracing::debug!(error = %err, "unable to serialise request summary"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn request(prompt: &str) -> GenerateImageRequest {
        GenerateImageRequest::new(prompt)
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected() {
        let err = build_request(&request("   ")).await.unwrap_err();
        assert!(matches!(err, GenerateError::MissingPrompt));
    }

    #[tokio::test]
    async fn every_valid_size_builds() {
        for ratio in AspectRatio::ALL {
            let mut req = request("a cat");
            req.size = Some(ratio.as_str().to_string());
            let prepared = build_request(&req).await.unwrap();
            assert_eq!(prepared.aspect_ratio, ratio);
        }
    }

    #[tokio::test]
    async fn invalid_size_is_rejected() {
        for bad in ["2:1", "16x9", "", "wide"] {
            let mut req = request("a cat");
            req.size = Some(bad.to_string());
            match build_request(&req).await {
                Err(GenerateError::InvalidSize(value)) => assert_eq!(value, bad),
                other => panic!("expected InvalidSize for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn content_type_picks_default_ratio() {
        assert_eq!(
            resolve_aspect_ratio(None, Some(ContentType::Blog)).unwrap(),
            AspectRatio::Wide
        );
        assert_eq!(
            resolve_aspect_ratio(None, Some(ContentType::Social)).unwrap(),
            AspectRatio::Square
        );
        assert_eq!(resolve_aspect_ratio(None, None).unwrap(), AspectRatio::Wide);
        assert_eq!(
            resolve_aspect_ratio(Some("3:4"), Some(ContentType::Social)).unwrap(),
            AspectRatio::Portrait
        );
    }

    #[test]
    fn unknown_content_type_is_ignored() {
        assert_eq!(resolve_content_type(Some("poster")), None);
        assert_eq!(resolve_content_type(Some("hero")), Some(ContentType::Hero));
        assert_eq!(resolve_content_type(None), None);
    }

    #[tokio::test]
    async fn text_only_request_has_one_part() {
        let prepared = build_request(&request("a cat")).await.unwrap();
        assert_eq!(prepared.parts.len(), 1);
        assert_eq!(
            prepared.parts[0],
            LLMMessageType::text(prepared.composed_prompt.clone())
        );
        assert!(prepared.composed_prompt.contains("Brand style guide:"));
    }

    #[tokio::test]
    async fn no_brand_drops_brand_section() {
        let mut req = request("a cat");
        req.include_brand = false;
        let prepared = build_request(&req).await.unwrap();
        assert!(!prepared.composed_prompt.contains("Brand style guide:"));
    }

    #[tokio::test]
    async fn reference_image_precedes_instruction() {
        let dir = tempfile::tempdir().unwrap();
        for (name, mime) in [
            ("ref.jpg", "image/jpeg"),
            ("ref.JPEG", "image/jpeg"),
            ("ref.png", "image/png"),
            ("ref.webp", "image/webp"),
            ("ref.gif", "image/gif"),
        ] {
            let path = dir.path().join(name);
            std::fs::File::create(&path)
                .unwrap()
                .write_all(b"abc")
                .unwrap();

            let mut req = request("clinic front desk");
            req.reference_path = Some(path);
            let prepared = build_request(&req).await.unwrap();

            assert_eq!(prepared.parts.len(), 2);
            assert_eq!(prepared.parts[0], LLMMessageType::image_b64("YWJj", mime));
            match &prepared.parts[1] {
                LLMMessageType::TEXT(text) => {
                    assert!(text.starts_with("Use the provided image strictly"));
                    assert!(text.ends_with(&prepared.composed_prompt));
                }
                other => panic!("expected text part, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn missing_reference_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request("a cat");
        req.reference_path = Some(dir.path().join("nope.png"));
        assert!(matches!(
            build_request(&req).await,
            Err(GenerateError::ReferenceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn unsupported_reference_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ref.BMP");
        std::fs::write(&path, b"abc").unwrap();

        let mut req = request("a cat");
        req.reference_path = Some(path);
        match build_request(&req).await {
            Err(GenerateError::UnsupportedFormat(ext)) => assert_eq!(ext, ".bmp"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn summary_lists_optional_lines() {
        let mut req = request(&"x".repeat(120));
        req.content_type = Some("social".to_string());
        let prepared = build_request(&req).await.unwrap();
        let text = summary(&prepared);

        assert!(text.contains("  Size    1:1"));
        assert!(text.contains("  Type    social"));
        assert!(text.contains(&format!("  Prompt  {}…", "x".repeat(90))));
        assert!(!text.contains("Ref"));
        assert!(text.ends_with("Generating…"));
    }
}
