use std::process::ExitCode;

use blockjuic3::bootstrap::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        tracing::error!("blockjuic3 error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
