use anyhow::Result;
use clap::Parser;

use salespipe::cli::Cli;
use salespipe::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.execute().await {
        Ok(()) => {
            logging::log_session_end();
            Ok(())
        }
        Err(e) => {
            tracing::error!("Pipeline error: {}", e);

            // Log error chain if available
            let mut source = e.source();
            while let Some(err) = source {
                tracing::error!("   Caused by: {}", err);
                source = err.source();
            }

            logging::log_session_end();
            Err(e)
        }
    }
}
