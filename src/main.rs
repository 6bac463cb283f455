use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use receipt_processor::calculation::score_receipt;
use receipt_processor::config::ConfigLoader;
use receipt_processor::error::{EngineError, EngineResult};
use receipt_processor::service::parse_receipt;
use receipt_processor::validation::accept;
use receipt_processor::{server, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "receipt-processor",
    about = "Validate receipts and award them points",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a receipt JSON file and print its breakdown
    Score {
        /// Path to the receipt JSON file
        file: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let result = match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score { file } => run_score(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(EngineError::InvalidReceipt { issues }) => {
            eprintln!("receipt is invalid:");
            for issue in issues {
                eprintln!("  {issue}");
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_server(args: ServeArgs) -> EngineResult<()> {
    let loader = match &args.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::default(),
    }
    .with_overrides(args.host, args.port);

    telemetry::init(loader.logging())?;
    server::serve(loader.server()).await
}

fn run_score(file: &Path) -> EngineResult<()> {
    let text = std::fs::read_to_string(file)?;
    let receipt = accept(parse_receipt(&text)?)?;

    for line in score_receipt(&receipt).breakdown() {
        println!("{line}");
    }
    Ok(())
}
