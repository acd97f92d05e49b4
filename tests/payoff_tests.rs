mod test_utils;

use option_analyzer::report::render_payoff_svg;
use option_analyzer::{
    default_configs, payoff_for, AnalysisConfig, AnalysisError, PayoffConfig, ProfitLossCurve,
};
use test_utils::{call, mixed_batch, put};

/// Curve always has `samples` points spanning [0.8K, 1.2K] inclusive.
#[test]
fn test_curve_length_and_endpoints() {
    for samples in [2usize, 3, 10, 100, 257] {
        let config = PayoffConfig {
            samples,
            ..PayoffConfig::default()
        };
        for record in mixed_batch() {
            let points = ProfitLossCurve::for_record(&record, &config).to_vec();
            let k = record.strike();

            assert_eq!(points.len(), samples);
            assert!(
                (points[0].0 - 0.8 * k).abs() < 1e-9,
                "first spot {} != {}",
                points[0].0,
                0.8 * k
            );
            assert!(
                (points[samples - 1].0 - 1.2 * k).abs() < 1e-9,
                "last spot {} != {}",
                points[samples - 1].0,
                1.2 * k
            );
        }
    }
}

/// Spots are evenly spaced.
#[test]
fn test_curve_spacing() {
    let record = call(5.0, 150.0, 20.0, 15.0);
    let points = ProfitLossCurve::for_record(&record, &PayoffConfig::default()).to_vec();
    let step = (180.0 - 120.0) / 99.0;
    for pair in points.windows(2) {
        assert!((pair[1].0 - pair[0].0 - step).abs() < 1e-9);
    }
}

/// Call: flat loss of the premium below strike, rising one-for-one above.
#[test]
fn test_call_profit_values() {
    let record = call(5.0, 150.0, 20.0, 15.0);
    let profile = payoff_for(&record, &default_configs::standard()).unwrap();

    for &(spot, profit) in &profile.points {
        let expected = (spot - 150.0).max(0.0) - 5.0;
        assert!((profit - expected).abs() < 1e-9);
    }
    assert!((profile.break_even - 155.0).abs() < 1e-9);
}

/// Put: rising one-for-one below strike, flat loss above.
#[test]
fn test_put_profit_values() {
    let record = put(8.0, 100.0, 10.0, 25.0);
    let profile = payoff_for(&record, &default_configs::standard()).unwrap();

    for &(spot, profit) in &profile.points {
        let expected = (100.0 - spot).max(0.0) - 8.0;
        assert!((profit - expected).abs() < 1e-9);
    }
    assert!((profile.break_even - 92.0).abs() < 1e-9);
}

/// The curve can be iterated any number of times with the same result.
#[test]
fn test_curve_restartable() {
    let record = put(8.0, 100.0, 10.0, 25.0);
    let curve = ProfitLossCurve::for_record(&record, &PayoffConfig::default());
    let a: Vec<_> = curve.iter().collect();
    let b: Vec<_> = curve.iter().collect();
    let cloned: Vec<_> = curve.iter().clone().collect();
    assert_eq!(a, b);
    assert_eq!(a, cloned);
    assert_eq!(curve.len(), 100);
}

/// Wider configured range is honoured.
#[test]
fn test_custom_range() {
    let config = AnalysisConfig {
        payoff: PayoffConfig {
            samples: 5,
            lower_factor: 0.5,
            upper_factor: 1.5,
        },
        ..AnalysisConfig::default()
    };
    let profile = payoff_for(&call(2.0, 100.0, 20.0, 20.0), &config).unwrap();
    let spots: Vec<f64> = profile.points.iter().map(|p| p.0).collect();
    let expected = [50.0, 75.0, 100.0, 125.0, 150.0];
    for (s, e) in spots.iter().zip(expected) {
        assert!((s - e).abs() < 1e-9);
    }
}

/// Smoke test: the chart renders to an SVG file containing the break-even marker's colour.
#[test]
fn test_render_payoff_svg() {
    let record = call(5.0, 150.0, 20.0, 15.0);
    let profile = payoff_for(&record, &default_configs::standard()).unwrap();

    let path = std::env::temp_dir().join(format!("payoff_test_{}.svg", std::process::id()));
    render_payoff_svg(&profile, &path).expect("rendering failed");

    let svg = std::fs::read_to_string(&path).expect("chart not written");
    assert!(svg.contains("<svg"), "output is not SVG");
    assert!(svg.contains("TEST Call"), "caption missing");
    let _ = std::fs::remove_file(&path);
}

/// Curve settings that cannot span [lower, upper] with both endpoints are rejected up front.
#[test]
fn test_payoff_rejects_invalid_curve_config() {
    let record = call(5.0, 150.0, 20.0, 15.0);

    let single_sample = AnalysisConfig {
        payoff: PayoffConfig {
            samples: 1,
            ..PayoffConfig::default()
        },
        ..AnalysisConfig::default()
    };
    assert!(matches!(
        payoff_for(&record, &single_sample),
        Err(AnalysisError::Config(_))
    ));

    let inverted = AnalysisConfig {
        payoff: PayoffConfig {
            samples: 5,
            lower_factor: 1.5,
            upper_factor: 1.2,
        },
        ..AnalysisConfig::default()
    };
    assert!(matches!(
        payoff_for(&record, &inverted),
        Err(AnalysisError::Config(_))
    ));
}
