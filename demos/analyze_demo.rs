// demos/analyze_demo.rs

//! Demonstration of a full analysis pass
//!
//! This example shows how to:
//! 1. Load a batch of option records from CSV text
//! 2. Grade and classify every record against the batch mean IV
//! 3. Print the formatted results table
//! 4. Export the augmented batch back to CSV

use anyhow::Result;
use option_analyzer::{
    analyze_csv, default_configs, export_csv,
    report::{display_rows, render_table},
    rules_help,
};

const DEMO_CSV: &str = "\
Ticker,Expiry,Type,Premium,Strike,IV,HV
AAPL,2030-01-18,Call,5.00,150.00,20.00,15.00
MSFT,2030-01-18,Put,8.00,400.00,18.00,25.00
TSLA,2030-03-15,Call,30.00,200.00,60.00,45.00
SPY,2030-06-21,Put,1.50,400.00,12.00,9.00
QQQ,2030-06-21,Call,40.00,400.00,30.00,30.00
IWM,2030-06-21,Put,2.00,50.00,28.00,35.00
";

fn main() -> Result<()> {
    println!("Option Analysis Demo");
    println!("====================");

    let config = default_configs::bulk();

    println!("\nStep 1: Loading and analysing {} rows...", DEMO_CSV.lines().count() - 1);
    let report = analyze_csv(DEMO_CSV.as_bytes(), &config)?;

    if let Some(mean_iv) = report.mean_iv {
        println!("  Batch mean IV: {:.2}%", mean_iv);
    }

    println!("\nStep 2: Results");
    print!(
        "{}",
        render_table(&display_rows(&report, config.display_decimals))
    );

    println!("\nStep 3: Export");
    export_csv(&report, std::io::stdout())?;

    println!("\n{}", rules_help(config.grade_threshold));
    Ok(())
}
