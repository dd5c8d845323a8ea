mod cli;
use std::process::ExitCode;

use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::run().await {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Only a failed liveness probe or a bad configuration ends up here
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
