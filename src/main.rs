//! # Quetzal CLI
//!
//! Command-line interface for warranty receipt printing.
//!
//! ## Usage
//!
//! ```bash
//! # Print the built-in demo receipt to the first printer found
//! quetzal print
//!
//! # Print a receipt from a JSON file on 80mm paper
//! quetzal print --json sale.json --paper 80mm
//!
//! # Target a specific printer by name or address
//! quetzal print --device "MTP-II"
//!
//! # Compose only: write the ESC/POS bytes to a file, no radio needed
//! quetzal print --dump receipt.bin
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quetzal::render::{compose, logo};
use quetzal::{BleLink, PaperProfile, ReceiptData, print_receipt, receipt};

/// Quetzal - warranty receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "quetzal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a warranty receipt
    Print {
        /// Receipt JSON file (prints the demo receipt when omitted)
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Paper profile: 58mm, 80mm, or a column count
        #[arg(long, default_value = "58mm")]
        paper: String,

        /// Select a printer by name or address instead of the first found
        #[arg(long)]
        device: Option<String>,

        /// Write composed bytes to a file instead of printing
        #[arg(long, value_name = "FILE")]
        dump: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            json,
            paper,
            device,
            dump,
        } => {
            let paper = PaperProfile::parse(&paper)?;

            let data: ReceiptData = match json {
                Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
                None => receipt::demo(chrono::Local::now().format("%d/%m/%y").to_string()),
            };

            match dump {
                Some(path) => {
                    let logo = match &data.logo_url {
                        Some(url) => logo::fetch_logo(url).await,
                        None => None,
                    };
                    let document = compose(&data, paper, logo.as_deref());
                    fs::write(&path, document.to_bytes())?;
                    println!("Wrote {} bytes to {}", document.len(), path.display());
                }
                None => {
                    let mut link = match device {
                        Some(hint) => BleLink::with_device(hint),
                        None => BleLink::new(),
                    };
                    print_receipt(&data, paper, &mut link).await?;
                    println!("Receipt printed.");
                }
            }
        }
    }

    Ok(())
}
