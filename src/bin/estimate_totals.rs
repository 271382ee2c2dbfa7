//! Price an estimate from a line-item file and print the totals
//!
//! Reads line items from CSV (or JSON with --json) and prints the priced
//! rows plus the per-rate VAT breakdown table.

use anyhow::Context;
use clap::Parser;
use pricing_engine::estimate::compute_totals;
use pricing_engine::loader::{load_line_items, load_line_items_json};

#[derive(Parser)]
#[command(about = "Price an estimate and print its tax breakdown")]
struct Args {
    /// Line-item file (CSV: quantity,unit_cost,margin_percent,unit_price,tax_rate)
    input: std::path::PathBuf,

    /// Treat the input as a JSON estimate export instead of CSV
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let items = if args.json {
        load_line_items_json(&args.input)
    } else {
        load_line_items(&args.input)
    }
    .with_context(|| format!("Failed to load line items from {}", args.input.display()))?;

    log::info!("Loaded {} line items", items.len());

    println!("{:<6} {:>12} {:>12} {:>8}", "Qty", "UnitPrice", "Subtotal", "VAT%");
    for item in &items {
        println!(
            "{:<6} {:>12.2} {:>12.2} {:>8.2}",
            item.quantity,
            item.pricing.unit_price(),
            item.line_subtotal(),
            item.tax_rate.resolve(),
        );
    }

    let totals = compute_totals(&items);

    println!("\nSubtotal: {:>12.2}", totals.subtotal);
    for group in &totals.tax_groups {
        println!(
            "VAT {:>5.2}% on {:>12.2}: {:>10.2}",
            group.tax_rate_percent, group.taxable_base, group.tax_due,
        );
    }
    println!("Total tax: {:>11.2}", totals.total_tax);
    println!("Grand total: {:>9.2}", totals.grand_total);

    Ok(())
}
