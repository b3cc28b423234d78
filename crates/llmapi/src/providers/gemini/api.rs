use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{Value, json};

use crate::types::{LLMClient, LLMMessage, LLMMessageType, LLMUserType};

use super::models::{GeminiResponse, GenerationConfig, InlineData};

pub fn convert_body_parts_gemini(body_part: Vec<LLMMessageType>) -> Vec<Value> {
    body_part
        .into_iter()
        .map(|part| match part {
            LLMMessageType::TEXT(text) => json!({ "text": text }),
            LLMMessageType::IMAGE {
                data_b64,
                mime_type,
            } => json!({
                "inlineData": {
                    "mimeType": mime_type,
                    "data": data_b64
                }
            }),
        })
        .collect()
}
pub fn convert_messages_to_gemini_contents(messages: Vec<LLMMessage>) -> Vec<Value> {
    messages
        .into_iter()
        .map(|m| {
            let parts = convert_body_parts_gemini(m.content);
            json!({
                "role": role_to_str(m.role),
                "parts": parts
            })
        })
        .collect()
}
fn role_to_str(role: LLMUserType) -> &'static str {
    match role {
        LLMUserType::Human => "user",
        LLMUserType::AI => "model",
    }
}

pub fn generate_url(api_client: &LLMClient) -> String {
    let endpoint = api_client.endpoint().trim_end_matches('/');
    format!("{}/{}:generateContent", endpoint, api_client.default_model())
}

pub fn build_generate_body(
    messages: Vec<LLMMessage>,
    config: Option<&GenerationConfig>,
) -> Result<Value> {
    let mut body = json!({
        "contents": convert_messages_to_gemini_contents(messages)
    });
    if let Some(config) = config {
        body["generationConfig"] =
            serde_json::to_value(config).context("Failed to encode generation config")?;
    }
    Ok(body)
}

/// Sends a single `generateContent` call. Non-success statuses become errors
/// whose message carries both the status and the raw body.
pub async fn send_generate_request(
    api_client: &LLMClient,
    messages: Vec<LLMMessage>,
    config: Option<&GenerationConfig>,
) -> Result<GeminiResponse> {
    let url = generate_url(api_client);
    let body = build_generate_body(messages, config)?;

    tracing::debug!(%url, "sending Gemini generateContent request");

    let client = Client::new();
    let response = client
        .post(&url)
        .header("x-goog-api-key", api_client.api_key())
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .context("HTTP request failed")?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .context("Reading response body failed")?;

    if !status.is_success() {
        return Err(anyhow::anyhow!(
            "Gemini generateContent failed: status {} body {}",
            status,
            response_text
        ));
    }

    let response: GeminiResponse = serde_json::from_str(&response_text).with_context(|| {
        format!(
            "Failed to decode Gemini response JSON. Raw response: {}",
            response_text
        )
    })?;

    tracing::debug!(
        candidates = response.candidates.len(),
        model_version = response.model_version.as_deref().unwrap_or("unknown"),
        "received Gemini response"
    );

    Ok(response)
}

/// First part carrying non-empty inline data, scanning candidates then parts in order.
pub fn response_first_inline_image(response: &GeminiResponse) -> Option<&InlineData> {
    response
        .candidates
        .iter()
        .flat_map(|candidate| candidate.parts())
        .filter_map(|part| part.inline_data.as_ref())
        .find(|inline_data| !inline_data.data.trim().is_empty())
}

/// Text of the first text-bearing part of the first candidate.
pub fn response_first_text(response: &GeminiResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .parts()
        .iter()
        .filter_map(|part| part.text.as_deref())
        .find(|text| !text.is_empty())
}
