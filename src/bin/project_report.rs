//! Profitability and cash-flow report across project ledgers
//!
//! Loads one JSON ledger file per project, summarizes each project in
//! parallel, prints the per-project and global summary cards, and writes
//! a period-bucketed cash-flow CSV for charting.

use anyhow::Context;
use clap::Parser;
use pricing_engine::loader::load_project_ledger;
use pricing_engine::project::{summarize, summarize_global, CostEntry, ProjectLedger};
use pricing_engine::reporting::{bucket_cash_flow, Period};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(about = "Summarize project profitability and cash flow")]
struct Args {
    /// Project ledger JSON files (budget, cost_entries, hour_entries)
    #[arg(required = true)]
    ledgers: Vec<PathBuf>,

    /// Cash-flow bucketing granularity
    #[arg(long, value_enum, default_value = "month")]
    period: PeriodArg,

    /// Output CSV for the bucketed cash flow
    #[arg(long, default_value = "cash_flow_report.csv")]
    output: PathBuf,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PeriodArg {
    Day,
    Week,
    Month,
    Year,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Day => Period::Day,
            PeriodArg::Week => Period::Week,
            PeriodArg::Month => Period::Month,
            PeriodArg::Year => Period::Year,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let ledgers: Vec<ProjectLedger> = args
        .ledgers
        .iter()
        .map(|path| {
            load_project_ledger(path)
                .with_context(|| format!("Failed to load ledger {}", path.display()))
        })
        .collect::<anyhow::Result<_>>()?;
    log::info!("Loaded {} ledgers in {:?}", ledgers.len(), start.elapsed());

    // Per-project summaries in parallel
    let summaries: Vec<_> = ledgers
        .par_iter()
        .map(|ledger| summarize(ledger.budget, &ledger.cost_entries, &ledger.hour_entries))
        .collect();

    println!(
        "{:<30} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Project", "Budgeted", "Spent", "Labor", "Collected", "Profit"
    );
    for (path, summary) in args.ledgers.iter().zip(&summaries) {
        println!(
            "{:<30} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            path.display(),
            summary.budgeted,
            summary.spent,
            summary.labor_cost,
            summary.collected,
            summary.profit,
        );
    }

    let global = summarize_global(&ledgers);
    println!(
        "{:<30} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
        "TOTAL",
        global.budgeted,
        global.spent,
        global.labor_cost,
        global.collected,
        global.profit,
    );
    println!("Margin: {:.2}%", global.margin_percent());

    // Bucketed cash flow across all projects
    let all_entries: Vec<CostEntry> = ledgers
        .iter()
        .flat_map(|l| l.cost_entries.iter().copied())
        .collect();
    let buckets = bucket_cash_flow(&all_entries, args.period.into());

    let mut file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    writeln!(file, "Period,Income,Expense")?;
    for bucket in &buckets {
        writeln!(
            file,
            "{},{:.2},{:.2}",
            bucket.period, bucket.income, bucket.expense
        )?;
    }
    println!(
        "Wrote {} cash-flow buckets to {}",
        buckets.len(),
        args.output.display()
    );

    Ok(())
}
