#![forbid(unsafe_code)]
//! Build a small ledger, optionally tamper with it, and report its integrity.

use clap::Parser;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use std::path::PathBuf;
use tallychain::blockchain::Blockchain;
use tallychain::config::{load_config, load_config_from};
use tallychain::transaction::TransactionRecord;

#[derive(Parser, Debug)]
#[command(name = "tallychain", about = "Append-only ledger integrity demo")]
struct Args {
    /// Path to a TOML config file (defaults to ./tallychain.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overwrite the amount of the newest block in an exported copy before validating
    #[arg(long)]
    tamper: bool,

    /// Print the JSON export of the chain
    #[arg(long)]
    json: bool,
}

fn tamper_latest_amount(chain: &Blockchain) -> Result<Blockchain, Box<dyn std::error::Error>> {
    let mut exported: serde_json::Value = serde_json::from_str(&chain.to_json()?)?;
    let last = chain.len() - 1;
    let amount = chain.latest().payload().amount;
    exported[last]["payload"]["amount"] = serde_json::json!(amount + 100.0);
    Ok(Blockchain::from_json(&exported.to_string())?)
}

fn print_blocks(chain: &Blockchain) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Index").add_attribute(Attribute::Bold),
            Cell::new("Amount").add_attribute(Attribute::Bold),
            Cell::new("Sender").add_attribute(Attribute::Bold),
            Cell::new("Receiver").add_attribute(Attribute::Bold),
            Cell::new("Timestamp").add_attribute(Attribute::Bold),
            Cell::new("Hash").add_attribute(Attribute::Bold),
            Cell::new("Hash OK").add_attribute(Attribute::Bold),
        ]);

    for block in chain {
        let payload = block.payload();
        let hash = block.hash_str();
        table.add_row(vec![
            Cell::new(block.index()),
            Cell::new(payload.amount),
            Cell::new(&payload.sender_key),
            Cell::new(&payload.receiver_key),
            Cell::new(payload.timestamp_rfc3339()),
            Cell::new(&hash[..16]),
            Cell::new(if block.is_hash_valid() { "yes" } else { "no" }),
        ]);
    }

    println!("{}", table);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let mut chain = Blockchain::with_config(&config);
    chain.append(TransactionRecord::now(1.5, "Nathan", "jeff"));

    if args.tamper {
        println!("{}", "Tampering with the newest block's amount...".yellow());
        chain = tamper_latest_amount(&chain)?;
    }

    print_blocks(&chain);

    if args.json {
        println!("{}", chain.to_json()?);
    }

    println!();
    match chain.first_fault() {
        None => println!("{}", "Is chain valid? yes".bright_green().bold()),
        Some(fault) => {
            println!("{}", "Is chain valid? no".bright_red().bold());
            println!("{}", format!("First fault: {}", fault).red());
        }
    }

    Ok(())
}
