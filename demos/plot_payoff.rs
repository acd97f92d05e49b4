// Example: plot_payoff.rs
// Loads an options CSV, analyses it and writes an SVG of the expiration
// profit/loss curve for one row, with the zero line and break-even marker.
//
// Usage:
//     cargo run --example plot_payoff -- <csv_path> <ROW>
//
// The CSV must contain the columns Ticker, Expiry, Type, Premium, Strike, IV, HV.
// The output image will be written to payoff.svg in the working directory.

use std::env;
use std::fs::File;

use anyhow::{bail, Context, Result};
use option_analyzer::{analyze_csv, default_configs, payoff_for, report::render_payoff_svg};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: {} <csv_file> <row>\nExample: {} options.csv 1",
            args[0], args[0]
        );
        std::process::exit(1);
    }
    let csv_path = &args[1];
    let row: usize = args[2].parse().context("row must be a positive integer")?;

    let config = default_configs::bulk();
    let file = File::open(csv_path).with_context(|| format!("cannot open {}", csv_path))?;
    let report = analyze_csv(file, &config)?;
    println!("Loaded {} options", report.len());

    let Some(selected) = row.checked_sub(1).and_then(|i| report.records.get(i)) else {
        bail!("row {} out of range (1..={})", row, report.len());
    };

    println!(
        "{} {} K={:.2} premium={:.2}: {}",
        selected.record.ticker(),
        selected.record.option_type(),
        selected.record.strike(),
        selected.record.premium(),
        selected.derived.label
    );

    let profile = payoff_for(&selected.record, &config)?;
    if let Some((lo, hi)) = profile.profit_bounds() {
        println!("P/L range over the curve: {:.2} .. {:.2}", lo, hi);
    }
    println!("Break-even: {:.2}", profile.break_even);

    render_payoff_svg(&profile, "payoff.svg")?;
    println!("Chart saved to payoff.svg");
    Ok(())
}
