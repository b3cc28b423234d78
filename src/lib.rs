pub mod brand;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod fs_utils;
pub mod models;
pub mod prompt;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

pub use brand::{ContentType, BRAND_STYLE};
pub use cli::Cli;
pub use commands::generate::{
    build_request, generate_image, summary, GeminiGenerator, ImageGenerator,
};
pub use config::Config;
pub use constants::{
    API_KEY_ENV, DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_OUTPUT_DIR,
    FALLBACK_IMAGE_MODEL,
};
pub use error::{GenerateError, Result};
pub use fs_utils::slugify;
pub use models::{AspectRatio, GenerateImageRequest, GeneratedImage, PreparedRequest};

const DEFAULT_LOG_DIRECTIVES: &str = "brand_image_gen=warn,llmapi=warn";
const VERBOSE_LOG_DIRECTIVES: &str = "brand_image_gen=debug,llmapi=debug";

/// Entry point for the binary: parse, generate once, report.
pub async fn run() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    let api_key = std::env::var(API_KEY_ENV).ok();
    let result = execute(&cli, api_key.as_deref(), GeminiGenerator::new).await;
    ExitCode::from(conclude(&result))
}

/// Runs one invocation: validate, build, call the generator made from the
/// resolved [`Config`], then write the image. The prompt is checked before the
/// credential, and the credential before any other validation.
pub async fn execute<G, F>(cli: &Cli, api_key: Option<&str>, make_generator: F) -> Result<PathBuf>
where
    G: ImageGenerator,
    F: FnOnce(Config) -> G,
{
    let request = cli.to_request();
    if request.prompt.is_empty() {
        return Err(GenerateError::MissingPrompt);
    }

    let config = Config::new(api_key)?.with_endpoint(cli.endpoint.as_str());
    let prepared = build_request(&request).await?;

    println!("\n{}", summary(&prepared));

    let generator = make_generator(config);
    generate_image(&generator, &prepared, &request.output_dir).await
}

/// Reports the outcome and returns the process exit status: 0 only when an
/// image was written.
pub fn conclude(result: &Result<PathBuf>) -> u8 {
    match result {
        Ok(path) => {
            println!("\n  ✓ Saved: {}\n", path.display());
            0
        }
        Err(GenerateError::MissingPrompt) => {
            let _ = Cli::command().print_help();
            1
        }
        Err(err) => {
            tracing::debug!(usage = err.is_usage(), "generation aborted");
            report(err);
            1
        }
    }
}

/// Prints an error and its advisory lines to stderr.
pub fn report(err: &GenerateError) {
    eprintln!("\n  Error: {err}");
    for line in err.details() {
        eprintln!("  {line}");
    }
    eprintln!();
}

fn init_tracing(verbose: bool) {
    let directives = if verbose {
        VERBOSE_LOG_DIRECTIVES
    } else {
        DEFAULT_LOG_DIRECTIVES
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
