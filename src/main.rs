use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    brand_image_gen::run().await
}
