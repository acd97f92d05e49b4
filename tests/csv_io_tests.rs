mod test_utils;

use chrono::NaiveDate;
use option_analyzer::io::{
    load_records, load_records_from_path, parse_expiry, report_to_csv_string, EXPORT_COLUMNS,
};
use option_analyzer::{analyze_batch, analyze_csv, default_configs, AnalysisError, OptionType};
use test_utils::{mixed_batch, SAMPLE_CSV};

/// Loads the sample file, uppercases tickers and parses types and dates.
#[test]
fn test_load_sample_csv() {
    let records = load_records(SAMPLE_CSV.as_bytes()).expect("sample CSV should load");

    assert_eq!(records.len(), 6);
    assert_eq!(records[0].ticker(), "AAPL");
    assert_eq!(records[0].option_type(), OptionType::Call);
    assert_eq!(records[1].option_type(), OptionType::Put);
    assert_eq!(
        records[2].expiry(),
        NaiveDate::from_ymd_opt(2030, 3, 15).unwrap()
    );
    assert!((records[3].premium() - 1.5).abs() < 1e-12);
    assert!((records[3].strike() - 400.0).abs() < 1e-12);
}

/// CSV analysis matches analysing the equivalent in-memory batch.
#[test]
fn test_csv_matches_in_memory_batch() {
    let config = default_configs::bulk();
    let from_csv = analyze_csv(SAMPLE_CSV.as_bytes(), &config).unwrap();
    let in_memory = analyze_batch(mixed_batch(), &config).unwrap();

    assert_eq!(from_csv.mean_iv, in_memory.mean_iv);
    for (a, b) in from_csv.records.iter().zip(&in_memory.records) {
        assert_eq!(a.derived.recommendation, b.derived.recommendation);
        assert!((a.derived.grade - b.derived.grade).abs() < 1e-12);
    }
}

/// Column order does not matter and unknown columns are ignored.
#[test]
fn test_reordered_and_extra_columns() {
    let csv = "\
Notes,HV,IV,Strike,Premium,Type,Expiry,Ticker
first,15,20,150,5,call,2030-01-18,aapl
";
    let records = load_records(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ticker(), "AAPL");
    assert!((records[0].hv() - 15.0).abs() < 1e-12);
    assert!((records[0].iv() - 20.0).abs() < 1e-12);
}

/// Missing columns abort the load and are all named in the error.
#[test]
fn test_missing_columns() {
    let csv = "Ticker,Expiry,Type,Premium,Strike\nAAPL,2030-01-18,Call,5,150\n";
    let err = load_records(csv.as_bytes()).unwrap_err();

    match &err {
        AnalysisError::MissingColumns { missing } => {
            assert_eq!(missing, &vec!["IV".to_string(), "HV".to_string()]);
        }
        other => panic!("expected MissingColumns, got {:?}", other),
    }
    let msg = err.to_string();
    assert!(msg.contains("IV") && msg.contains("HV"), "message: {}", msg);
}

/// An unparseable date aborts the whole load, naming row and column.
#[test]
fn test_bad_expiry_is_fatal() {
    let csv = "\
Ticker,Expiry,Type,Premium,Strike,IV,HV
AAPL,2030-01-18,Call,5,150,20,15
MSFT,not-a-date,Put,8,100,10,25
";
    let err = analyze_csv(csv.as_bytes(), &default_configs::bulk()).unwrap_err();
    match err {
        AnalysisError::Parse { row, column, value, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Expiry");
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_bad_number_and_type() {
    let bad_number = "Ticker,Expiry,Type,Premium,Strike,IV,HV\nAAPL,2030-01-18,Call,five,150,20,15\n";
    assert!(matches!(
        load_records(bad_number.as_bytes()),
        Err(AnalysisError::Parse { ref column, .. }) if column == "Premium"
    ));

    let bad_type = "Ticker,Expiry,Type,Premium,Strike,IV,HV\nAAPL,2030-01-18,Straddle,5,150,20,15\n";
    assert!(matches!(
        load_records(bad_type.as_bytes()),
        Err(AnalysisError::Parse { ref column, .. }) if column == "Type"
    ));
}

/// Strike of zero is rejected at load time instead of producing an infinite grade.
#[test]
fn test_zero_strike_rejected() {
    let csv = "Ticker,Expiry,Type,Premium,Strike,IV,HV\nAAPL,2030-01-18,Call,5,0,20,15\n";
    let err = load_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InvalidField { row: 1, ref column, .. } if column == "Strike"
    ));
}

/// Bulk loads do not re-validate expiry against today.
#[test]
fn test_bulk_load_accepts_past_expiry() {
    let csv = "Ticker,Expiry,Type,Premium,Strike,IV,HV\nOLD,2001-01-19,Put,1,10,20,15\n";
    let report = analyze_csv(csv.as_bytes(), &default_configs::bulk()).unwrap();
    assert_eq!(report.len(), 1);
}

#[test]
fn test_header_only_yields_empty_report() {
    let csv = "Ticker,Expiry,Type,Premium,Strike,IV,HV\n";
    let report = analyze_csv(csv.as_bytes(), &default_configs::bulk()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.mean_iv, None);
}

#[test]
fn test_expiry_formats() {
    let expected = NaiveDate::from_ymd_opt(2030, 1, 18).unwrap();
    for s in [
        "2030-01-18",
        "2030/01/18",
        "01/18/2030",
        "18.01.2030",
        "2030-01-18 00:00:00",
        "2030-01-18T16:00:00",
        " 2030-01-18 ",
    ] {
        assert_eq!(parse_expiry(s), Some(expected), "failed to parse {:?}", s);
    }
    assert_eq!(parse_expiry("2030-02-30"), None);
    assert_eq!(parse_expiry(""), None);
}

/// Export has a header row plus one row per record, with every column present.
#[test]
fn test_export_layout() {
    let report = analyze_batch(mixed_batch(), &default_configs::bulk()).unwrap();
    let text = report_to_csv_string(&report).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), report.len() + 1);
    assert_eq!(lines[0], EXPORT_COLUMNS.join(","));
    assert!(lines[1].starts_with("AAA,2030-01-18,Call,5,150,20,15,"));
    assert!(lines[1].contains("Do not sell Call (Grade < 10)"));
    assert!(lines[1].ends_with(",unfavorable"));
}

/// Exporting and re-loading (derived columns ignored) reproduces every recommendation.
#[test]
fn test_export_reload_round_trip() {
    let config = default_configs::bulk();
    let original = analyze_csv(SAMPLE_CSV.as_bytes(), &config).unwrap();
    let exported = report_to_csv_string(&original).unwrap();
    let reloaded = analyze_csv(exported.as_bytes(), &config).unwrap();

    assert_eq!(original.len(), reloaded.len());
    assert_eq!(original.mean_iv, reloaded.mean_iv);
    for (a, b) in original.records.iter().zip(&reloaded.records) {
        assert_eq!(a.record, b.record);
        assert_eq!(a.derived.recommendation, b.derived.recommendation);
        assert_eq!(a.derived.label, b.derived.label);
    }
}

/// Loading from a file path behaves like loading from a reader.
#[test]
fn test_load_from_path() {
    let path = std::env::temp_dir().join(format!("options_{}.csv", std::process::id()));
    std::fs::write(&path, SAMPLE_CSV).expect("write fixture");

    let records = load_records_from_path(&path).expect("load from path");
    assert_eq!(records.len(), 6);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(
        load_records_from_path(&path),
        Err(AnalysisError::Io(_))
    ));
}

/// A blank ticker cell names the data row it came from.
#[test]
fn test_blank_ticker_names_row() {
    let csv = "\
Ticker,Expiry,Type,Premium,Strike,IV,HV
AAPL,2030-01-18,Call,5,150,20,15
,2030-01-18,Put,8,100,10,25
";
    let err = load_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyTicker { row: 2 }));
    let msg = err.to_string();
    assert!(msg.contains("row 2") && msg.contains("Ticker"), "message: {}", msg);
}
