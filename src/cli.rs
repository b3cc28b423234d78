use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_OUTPUT_DIR};
use crate::models::GenerateImageRequest;

const EXAMPLES: &str = "\
Examples:
  brand-image-gen \"Hero banner for an urgent care website, clean and professional\" --type hero
  brand-image-gen \"Blog header: the future of urgent care operations\" --type blog
  brand-image-gen \"Match this visual style, new scene: a patient checking in\" --ref ./ref.png
  brand-image-gen \"Square social card, bold typography\" --size 1:1 --no-brand
  brand-image-gen --type social -- \"-5 degrees outside, winter clinic hours\"

The API key is read from GEMINI_API_KEY (a .env file in the working directory is loaded first).";

/// Generate on-brand images with Google Gemini.
///
/// The generated PNG is written to the output directory; status goes to stdout,
/// errors to stderr.
#[derive(Parser, Debug)]
#[command(name = "brand-image-gen", version, after_help = EXAMPLES)]
pub struct Cli {
    /// Description of the image to generate (all words are joined)
    #[arg(value_name = "PROMPT")]
    pub prompt: Vec<String>,

    /// Content type: blog | social | hero | email
    #[arg(long = "type", value_name = "TYPE")]
    pub content_type: Option<String>,

    /// Reference image path (used as style guide): jpg, jpeg, png, webp, gif
    #[arg(long = "ref", value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Aspect ratio: 1:1 | 16:9 | 9:16 | 4:3 | 3:4 (default: from --type, else 16:9)
    #[arg(long, value_name = "RATIO")]
    pub size: Option<String>,

    /// Model ID
    #[arg(long, value_name = "ID", default_value = DEFAULT_IMAGE_MODEL)]
    pub model: String,

    /// Output directory
    #[arg(long = "out", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Do not append the brand style guide to the prompt
    #[arg(long)]
    pub no_brand: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, env = "GEMINI_ENDPOINT", default_value = DEFAULT_GEMINI_ENDPOINT, hide = true)]
    pub endpoint: String,
}

impl Cli {
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ").trim().to_string()
    }

    pub fn to_request(&self) -> GenerateImageRequest {
        GenerateImageRequest {
            prompt: self.prompt_text(),
            content_type: self.content_type.clone(),
            reference_path: self.reference.clone(),
            size: self.size.clone(),
            model: self.model.clone(),
            output_dir: self.output_dir.clone(),
            include_brand: !self.no_brand,
        }
    }
}
