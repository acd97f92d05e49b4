use chrono::NaiveDate;
use option_analyzer::{
    analyze_batch, default_configs, AnalysisConfig, OptionRecord, OptionType,
};

fn main() -> anyhow::Result<()> {
    // Example position (minimal example)
    let expiry = NaiveDate::from_ymd_opt(2030, 1, 18).expect("valid date");
    let record = OptionRecord::new("AAPL", expiry, OptionType::Call, 16.0, 150.0, 32.0, 24.0)?;

    println!("Option-analyzer Default Configuration Examples\n");

    // 1. Standard configuration
    println!("1. Standard Configuration:");
    let standard = default_configs::standard();
    describe(&standard);
    println!("   Use case: General screening\n");

    // 2. Interactive configuration
    println!("2. Interactive Configuration (hand-entered records):");
    let interactive = default_configs::interactive();
    describe(&interactive);
    println!("   Use case: Form entry, past expiries rejected\n");

    // 3. Bulk configuration
    println!("3. Bulk Configuration (CSV loads):");
    describe(&default_configs::bulk());
    println!("   Use case: File uploads, expiries taken as given\n");

    // 4. Custom configuration from TOML
    println!("4. Custom Configuration (TOML):");
    let custom = AnalysisConfig::from_toml_str(
        r#"
        grade_threshold = 12.0

        [payoff]
        samples = 41
        lower_factor = 0.5
        upper_factor = 1.5
        "#,
    )?;
    describe(&custom);
    println!();

    // The grade threshold changes the outcome for the same record
    for (name, config) in [("standard", &standard), ("custom", &custom)] {
        let report = analyze_batch(vec![record.clone()], config)?;
        let row = &report.records[0];
        println!(
            "{:>8}: grade {:.2} -> {}",
            name, row.derived.grade, row.derived.label
        );
    }
    Ok(())
}

fn describe(config: &AnalysisConfig) {
    println!("   Grade threshold: {}", config.grade_threshold);
    println!(
        "   Payoff curve: {} points over [{}K, {}K]",
        config.payoff.samples, config.payoff.lower_factor, config.payoff.upper_factor
    );
    println!("   Validate expiry: {}", config.validate_expiry);
    println!("   Display decimals: {}", config.display_decimals);
}
