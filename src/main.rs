//! Command-line front-end.
//!
//! # Analyse a CSV batch and export the augmented table
//! option-analyzer analyze --input options.csv --export option_analysis.csv
//!
//! # Chart the payoff of the second row
//! option-analyzer analyze --input options.csv --plot 2 --svg payoff.svg
//!
//! # Analyse one hand-entered position
//! option-analyzer manual --ticker aapl --expiry 2026-12-18 --type call \
//!     --premium 5 --strike 150 --iv 20 --hv 15

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

use option_analyzer::{
    analyze_csv, analyze_manual, default_configs, export_csv, io::parse_expiry, payoff_for,
    report::{display_rows, render_payoff_svg, render_table},
    rules_help, AnalysisConfig, AnalysisReport, ManualEntry, OptionType, PremiumSource,
};

#[derive(Parser)]
#[command(name = "option-analyzer")]
#[command(about = "Grade single-leg options by IV/HV and premium-to-strike")]
#[command(version)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse every row of a CSV file
    Analyze {
        /// CSV with columns Ticker, Expiry, Type, Premium, Strike, IV, HV
        #[arg(short, long)]
        input: PathBuf,

        /// Write the augmented table to this CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// 1-based row whose payoff should be charted
        #[arg(long)]
        plot: Option<usize>,

        /// Output path for the payoff chart
        #[arg(long, default_value = "payoff.svg")]
        svg: PathBuf,
    },

    /// Analyse one hand-entered position
    Manual {
        #[arg(long, default_value = "AAPL")]
        ticker: String,

        /// Expiry date (YYYY-MM-DD, YYYY/MM/DD, MM/DD/YYYY or DD.MM.YYYY); must not be in the past
        #[arg(long)]
        expiry: String,

        /// Call or Put
        #[arg(long = "type", default_value = "Call")]
        option_type: String,

        /// Bid, Ask or Mark
        #[arg(long, default_value = "Mark")]
        premium_source: String,

        #[arg(long)]
        premium: f64,

        #[arg(long)]
        strike: f64,

        /// Implied volatility, percent
        #[arg(long)]
        iv: f64,

        /// Historical volatility, percent
        #[arg(long)]
        hv: f64,

        /// Output path for the payoff chart
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Explain how records are graded
    Explain,
}

fn load_config(path: Option<&PathBuf>, fallback: AnalysisConfig) -> Result<AnalysisConfig> {
    match path {
        Some(p) => {
            let mut config = AnalysisConfig::from_path(p)
                .with_context(|| format!("failed to load config {}", p.display()))?;
            config.validate_expiry |= fallback.validate_expiry;
            Ok(config)
        }
        None => Ok(fallback),
    }
}

fn print_report(report: &AnalysisReport, config: &AnalysisConfig) {
    println!("Analysis results:");
    print!(
        "{}",
        render_table(&display_rows(report, config.display_decimals))
    );
    if let Some(mean_iv) = report.mean_iv {
        println!("Mean IV: {:.*}", config.display_decimals, mean_iv);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::level_filters::LevelFilter::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            export,
            plot,
            svg,
        } => {
            let config = load_config(cli.config.as_ref(), default_configs::bulk())?;
            let file = File::open(&input)
                .with_context(|| format!("failed to open {}", input.display()))?;
            let report = analyze_csv(file, &config)
                .with_context(|| format!("failed to analyse {}", input.display()))?;

            print_report(&report, &config);

            if let Some(path) = export {
                let out = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                export_csv(&report, out)?;
                info!(path = %path.display(), "export written");
            }

            if let Some(row) = plot {
                let Some(selected) = row.checked_sub(1).and_then(|i| report.records.get(i)) else {
                    bail!("row {} out of range (1..={})", row, report.len());
                };
                let profile = payoff_for(&selected.record, &config)?;
                render_payoff_svg(&profile, &svg)?;
                println!(
                    "Break-even for {}: {:.2} (chart saved to {})",
                    profile.ticker,
                    profile.break_even,
                    svg.display()
                );
            }
        }
        Commands::Manual {
            ticker,
            expiry,
            option_type,
            premium_source,
            premium,
            strike,
            iv,
            hv,
            svg,
        } => {
            let config = load_config(cli.config.as_ref(), default_configs::interactive())?;
            let Some(expiry) = parse_expiry(&expiry) else {
                bail!("invalid expiry {:?}, expected a date such as 2030-01-18", expiry);
            };
            let Some(option_type) = OptionType::parse(&option_type) else {
                bail!("invalid option type {:?}, expected Call or Put", option_type);
            };
            let Some(premium_source) = PremiumSource::parse(&premium_source) else {
                bail!(
                    "invalid premium source {:?}, expected Bid, Ask or Mark",
                    premium_source
                );
            };

            let entry = ManualEntry {
                ticker,
                expiry,
                option_type,
                premium_source,
                premium,
                strike,
                iv,
                hv,
            };
            let today = Local::now().date_naive();
            let report = analyze_manual(entry, today, &config)?;
            print_report(&report, &config);

            if let Some(analyzed) = report.records.first() {
                let profile = payoff_for(&analyzed.record, &config)?;
                println!("Break-even: {:.2}", profile.break_even);
                if let Some(path) = svg {
                    render_payoff_svg(&profile, &path)?;
                    println!("Chart saved to {}", path.display());
                }
            }
        }
        Commands::Explain => {
            let config = load_config(cli.config.as_ref(), default_configs::standard())?;
            println!("{}", rules_help(config.grade_threshold));
        }
    }

    Ok(())
}
