use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

// Use library instead of local modules
use receipt_points::{is_valid_receipt, logging, score_breakdown, Receipt, ReceiptPayload};

#[derive(Parser)]
#[command(name = "receipt-points", version, about = "Score purchase receipts offline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the per-rule points breakdown for a receipt JSON file
    Score { file: PathBuf },
    /// Check a receipt JSON file without scoring it
    Validate { file: PathBuf },
}

fn main() -> Result<()> {
    logging::init("receipt_points=warn");
    let cli = Cli::parse();

    match cli.command {
        Command::Score { file } => run_score(&file),
        Command::Validate { file } => run_validate(&file),
    }
}

fn load_payload(path: &Path) -> Result<ReceiptPayload> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;

    serde_json::from_str(&content).context("Failed to parse receipt JSON")
}

fn run_score(path: &Path) -> Result<()> {
    let payload = load_payload(path)?;
    let receipt = Receipt::try_from(payload).context("The receipt is invalid")?;
    let breakdown = score_breakdown(&receipt);

    println!(
        "🧾 {} ({} {})",
        receipt.retailer,
        receipt.purchase_date,
        receipt.purchase_time.format("%H:%M")
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for score in &breakdown.scores {
        println!("  {:<14} {:>6}", score.field, score.points);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {:<14} {:>6}", "points", breakdown.total());

    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let payload = load_payload(path)?;

    if !is_valid_receipt(&payload) {
        bail!("The receipt is invalid: a required field is missing or empty");
    }

    match Receipt::try_from(payload) {
        Ok(receipt) => {
            println!(
                "✓ Valid receipt from {} with {} item(s)",
                receipt.retailer,
                receipt.items.len()
            );
            Ok(())
        }
        Err(e) => bail!("The receipt is invalid: {}", e),
    }
}
