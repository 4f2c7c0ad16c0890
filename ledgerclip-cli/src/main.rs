use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ledgerclip_core::SnippetTransaction;
use ledgerclip_extract::extract_transaction;
use std::io::Read;
use std::path::{Path, PathBuf};

mod config;
mod state;

use config::Config;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LEDGERCLIP_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "ledgerclip",
    version,
    long_version = LONG_VERSION,
    about = "Extract structured transactions from pasted bank-statement snippets"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract one transaction from a snippet (stdin when no file is given)
    Extract {
        /// File containing a single pasted snippet
        file: Option<PathBuf>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract one transaction per snippet file and summarize
    Batch {
        /// Snippet files, one pasted snippet each
        files: Vec<PathBuf>,

        /// Write extracted records to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print records as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Write a default config to ~/.ledgerclip/config.toml
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract { file, json } => extract_one(file, json),
        Command::Batch { files, csv, json } => batch(files, csv, json),
        Command::InitConfig => config::init_config(),
    }
}

fn read_snippet(file: Option<&Path>) -> Result<String> {
    match file {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

fn extract_one(file: Option<PathBuf>, json: bool) -> Result<()> {
    let cfg = config::load_config()?;
    let text = read_snippet(file.as_deref())?;

    let Some(record) = extract_transaction(&text)? else {
        eprintln!("could not extract transaction data (confidence 0.0)");
        std::process::exit(1);
    };

    if json || cfg.output.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record, &cfg);
    }
    Ok(())
}

fn batch(files: Vec<PathBuf>, csv_out: Option<PathBuf>, json: bool) -> Result<()> {
    if files.is_empty() {
        bail!("no snippet files given");
    }
    let cfg = config::load_config()?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for path in &files {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        match extract_transaction(&text)? {
            Some(record) => {
                if json || cfg.output.json {
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    print_record(&record, &cfg);
                }
                records.push(record);
            }
            None => {
                skipped += 1;
                eprintln!("{}: could not extract transaction data", path.display());
            }
        }
    }

    let balance: f64 = records.iter().map(|r| r.amount).sum();
    println!(
        "\nExtracted {} of {} snippets (skipped {})",
        records.len(),
        files.len(),
        skipped
    );
    println!("Net balance: {balance:.2}");

    if let Some(path) = csv_out {
        write_csv(&path, &records)?;
        println!("Wrote {} records to {}", records.len(), path.display());
    }
    Ok(())
}

fn print_record(record: &SnippetTransaction, cfg: &Config) {
    println!(
        "{} | {:.*} | {} | confidence={:.2}",
        record.date,
        cfg.output.amount_decimals,
        record.amount,
        record.description,
        record.confidence
    );
}

fn write_csv(path: &Path, records: &[SnippetTransaction]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("open {}", path.display()))?;
    wtr.write_record(["date", "amount", "description", "confidence"])?;
    for r in records {
        wtr.write_record([
            r.date.to_string(),
            format!("{:.2}", r.amount),
            r.description.clone(),
            format!("{:.2}", r.confidence),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
