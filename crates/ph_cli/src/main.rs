use std::process::ExitCode;
use clap::Parser;
use ph_core::Result;
use ph_scrapers::{handle_command, ScraperArgs};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "printheadlines", author, version, about = "Print the article teasers of a news listing page, or the entries of a news feed", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    scraper: ScraperArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Process exit status for a finished run.
fn exit_status(result: &Result<usize>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    ph_scrapers::logging::init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let result = handle_command(&cli.scraper, stdout.lock()).await;
    match &result {
        Ok(count) => info!("✨ Reported {} headlines", count),
        Err(e) => error!("Failed to print headlines: {}", e),
    }
    ExitCode::from(exit_status(&result))
}
