use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trivia_fetch::fetch_questions;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match fetch_questions().await {
        Ok(questions) => info!("Fetched {} questions", questions.len()),
        Err(e) => {
            error!("Error fetching questions: {}", e);
            std::process::exit(1);
        }
    }
}
