//! Pulls the generated image out of a Gemini response, and turns remote
//! failures into advisory hints.

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;
use llmapi::providers::gemini::models::GeminiResponse;
use llmapi::providers::gemini::{response_first_inline_image, response_first_text};

use crate::constants::{API_KEY_ENV, DEFAULT_IMAGE_MIME, FALLBACK_IMAGE_MODEL};
use crate::error::{GenerateError, Result};
use crate::models::GeneratedImage;

pub fn extract_generated_image(response: &GeminiResponse) -> Result<GeneratedImage> {
    let Some(inline_data) = response_first_inline_image(response) else {
        return Err(GenerateError::NoImage {
            text: response_first_text(response).map(str::to_string),
            block_reason: block_reason(response),
        });
    };

    let mime_type = match inline_data.mime_type.trim() {
        "" => DEFAULT_IMAGE_MIME,
        mime_type => mime_type,
    };
    let bytes = BASE64_ENGINE.decode(inline_data.data.trim())?;

    Ok(GeneratedImage {
        mime_type: mime_type.to_string(),
        bytes,
    })
}

fn block_reason(response: &GeminiResponse) -> Option<String> {
    let feedback = response.prompt_feedback.as_ref()?;
    match (&feedback.block_reason, &feedback.block_reason_message) {
        (Some(reason), Some(message)) => Some(format!("{reason} ({message})")),
        (Some(reason), None) => Some(reason.clone()),
        (None, Some(message)) => Some(message.clone()),
        (None, None) => None,
    }
}

/// Best-effort hints keyed off the wording of the provider's error message.
pub fn diagnose_failure(message: &str, model: &str) -> Vec<String> {
    let lowered = message.to_lowercase();

    if message.contains("API_KEY") {
        vec![format!(
            "Check that your {API_KEY_ENV} is correct and has not expired."
        )]
    } else if message.contains("404") || lowered.contains("not found") {
        vec![
            format!("Model \"{model}\" may not be available yet in your region or account tier."),
            format!("Try: --model {FALLBACK_IMAGE_MODEL}"),
        ]
    } else if message.contains("SAFETY") || lowered.contains("blocked") {
        vec!["The prompt was blocked by safety filters. Try rephrasing.".to_string()]
    } else {
        Vec::new()
    }
}

pub fn api_error(err: &anyhow::Error, model: &str) -> GenerateError {
    let message = format!("{err:#}");
    let hints = diagnose_failure(&message, model);
    GenerateError::Api { message, hints }
}
