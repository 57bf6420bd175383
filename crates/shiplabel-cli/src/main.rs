//! CLI application for extracting customer names from shipping-label PDFs.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shiplabel_core::{extract_with, LabelParser, PdfExtractor};

/// Print the customer names found after "BILL TO / SHIP TO" as a JSON array
#[derive(Parser)]
#[command(name = "shiplabel")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Shipping-label PDF to read
    #[arg(allow_hyphen_values = true)]
    pdf_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Exactly one raw argument, so `--` counts as one too
    if std::env::args_os().len() != 2 {
        Cli::command()
            .error(ErrorKind::WrongNumberOfValues, "expected exactly one PDF path")
            .exit();
    }
    let cli = Cli::parse();

    // stdout carries only the JSON result
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Processing file: {}", cli.pdf_path.display());

    let names = match extract_with(&PdfExtractor::new(), &LabelParser::new(), &cli.pdf_path) {
        Ok(result) => {
            debug!(
                "{} pages, {} candidates, {} rejected in {}ms",
                result.pages, result.candidates, result.rejected, result.processing_time_ms
            );
            result.names.into_vec()
        }
        Err(e) => {
            eprintln!("Error opening PDF: {}", e);
            Vec::new()
        }
    };

    println!("{}", serde_json::to_string(&names)?);

    Ok(())
}
