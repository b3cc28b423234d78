use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs;

use crate::brand::ContentType;
use crate::constants::{OUTPUT_EXTENSION, SLUG_MAX_LEN};
use crate::error::{GenerateError, Result};

/// Lower-cases `text`, collapses every run of non `[a-z0-9]` characters into a
/// single hyphen, trims hyphens at both ends and truncates to [`SLUG_MAX_LEN`].
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    // ASCII only, so byte truncation is safe
    slug.truncate(SLUG_MAX_LEN);
    slug
}

/// `2026-10-19T08-15-42`: whole seconds, no `:` or `.`.
pub fn file_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S").to_string()
}

pub fn output_file_name(
    now: DateTime<Utc>,
    content_type: Option<ContentType>,
    prompt: &str,
) -> String {
    let timestamp = file_timestamp(now);
    let slug = slugify(prompt);
    match content_type {
        Some(content_type) => format!("{timestamp}--{content_type}--{slug}.{OUTPUT_EXTENSION}"),
        None => format!("{timestamp}--{slug}.{OUTPUT_EXTENSION}"),
    }
}

pub async fn ensure_output_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .map_err(|source| GenerateError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    Ok(dir.to_path_buf())
}

/// Writes `bytes` to `dir/file_name` in one shot, replacing any existing file.
pub async fn write_image(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let output_dir = ensure_output_dir(dir).await?;
    let target_path = output_dir.join(file_name);

    fs::write(&target_path, bytes)
        .await
        .map_err(|source| GenerateError::Io {
            path: target_path.clone(),
            source,
        })?;

    tracing::debug!(path = %target_path.display(), size = bytes.len(), "image written");
    Ok(target_path)
}
