use crate::brand::{BRAND_STYLE, ContentType};

pub const REFERENCE_INSTRUCTION: &str = "Use the provided image strictly as a visual style reference — match its color palette, \
lighting, composition style, and overall aesthetic. Do not reproduce any text, logos, or \
UI elements from the reference. Generate a new image described as:";

/// Joins the labeled prompt sections, separated by blank lines.
pub fn compose_prompt(
    subject: &str,
    include_brand: bool,
    content_type: Option<ContentType>,
) -> String {
    let mut sections: Vec<String> = vec![format!("Subject:\n{}", subject.trim())];

    if include_brand {
        sections.push(format!("Brand style guide:\n{BRAND_STYLE}"));
    }

    if let Some(content_type) = content_type {
        sections.push(format!(
            "Content type ({content_type}):\n{}",
            content_type.style()
        ));
    }

    sections.join("\n\n")
}

pub fn reference_prompt(composed_prompt: &str) -> String {
    format!("{REFERENCE_INSTRUCTION}\n\n{composed_prompt}")
}

/// Single-line preview for the console summary.
pub fn preview(prompt: &str, max_chars: usize) -> String {
    let mut chars = prompt.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
