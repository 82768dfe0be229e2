use anyhow::Result;

use memebot::cli::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    CliApp::run().await?;
    Ok(())
}
