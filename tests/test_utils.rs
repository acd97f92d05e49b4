#![allow(dead_code)] // Each test binary uses a different subset of helpers

use chrono::NaiveDate;
use option_analyzer::{OptionRecord, OptionType};

/// Expiry far enough out that no test depends on today's date
pub fn test_expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 18).expect("valid date")
}

/// Helper to build a validated record concisely
pub fn create_record(
    ticker: &str,
    option_type: OptionType,
    premium: f64,
    strike: f64,
    iv: f64,
    hv: f64,
) -> OptionRecord {
    OptionRecord::new(ticker, test_expiry(), option_type, premium, strike, iv, hv)
        .expect("test record should be valid")
}

pub fn call(premium: f64, strike: f64, iv: f64, hv: f64) -> OptionRecord {
    create_record("TEST", OptionType::Call, premium, strike, iv, hv)
}

pub fn put(premium: f64, strike: f64, iv: f64, hv: f64) -> OptionRecord {
    create_record("TEST", OptionType::Put, premium, strike, iv, hv)
}

/// A small mixed batch covering every recommendation category
pub const SAMPLE_CSV: &str = "\
Ticker,Expiry,Type,Premium,Strike,IV,HV
aapl,2030-01-18,Call,5.00,150.00,20.00,15.00
msft,2030-01-18,Put,8.00,100.00,10.00,25.00
tsla,2030-03-15,Call,30.00,200.00,60.00,45.00
spy,2030-06-21,Put,1.50,400.00,12.00,9.00
qqq,2030-06-21,Call,40.00,400.00,30.00,30.00
iwm,2030-06-21,Put,2.00,50.00,28.00,35.00
";

/// Fixed spread of records with known recommendations under the default threshold
pub fn mixed_batch() -> Vec<OptionRecord> {
    vec![
        create_record("AAA", OptionType::Call, 5.0, 150.0, 20.0, 15.0),
        create_record("BBB", OptionType::Put, 8.0, 100.0, 10.0, 25.0),
        create_record("CCC", OptionType::Call, 30.0, 200.0, 60.0, 45.0),
        create_record("DDD", OptionType::Put, 1.5, 400.0, 12.0, 9.0),
        create_record("EEE", OptionType::Call, 40.0, 400.0, 30.0, 30.0),
        create_record("FFF", OptionType::Put, 2.0, 50.0, 28.0, 35.0),
    ]
}
