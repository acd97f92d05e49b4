// src/report/plot.rs

//! SVG chart of an expiration payoff: the P/L curve, a zero line and a
//! vertical break-even marker.

use plotters::prelude::*;
use std::path::Path;

use crate::error::{AnalysisError, Result};
use crate::models::payoff::PayoffProfile;

fn plot_error<E: std::fmt::Display>(e: E) -> AnalysisError {
    AnalysisError::Plot(e.to_string())
}

/// Draw `profile` into an SVG file at `path`.
pub fn render_payoff_svg<P: AsRef<Path>>(profile: &PayoffProfile, path: P) -> Result<()> {
    let (first, last) = match (profile.points.first(), profile.points.last()) {
        (Some(f), Some(l)) => (f.0, l.0),
        _ => return Err(plot_error("payoff profile has no points")),
    };
    let (min_pl, max_pl) = profile.profit_bounds().unwrap_or((-1.0, 1.0));

    // Keep the zero line visible and pad by 5%
    let y_lo = min_pl.min(0.0);
    let y_hi = max_pl.max(0.0);
    let padding = ((y_hi - y_lo) * 0.05).max(1e-6);
    let (y_min, y_max) = (y_lo - padding, y_hi + padding);

    let root = SVGBackend::new(path.as_ref(), (1024, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "{} {} | K={:.2} premium={:.2} | break-even {:.2}",
                profile.ticker,
                profile.option_type,
                profile.strike,
                profile.premium,
                profile.break_even
            ),
            ("sans-serif", 24),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first..last, y_min..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Spot at expiration")
        .y_desc("Profit / loss per share")
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            profile.points.clone(),
            BLUE.stroke_width(2),
        )))
        .map_err(plot_error)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(first, 0.0), (last, 0.0)],
            BLACK.stroke_width(1),
        )))
        .map_err(plot_error)?;

    if profile.break_even >= first && profile.break_even <= last {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(profile.break_even, y_min), (profile.break_even, y_max)],
                RED.stroke_width(1),
            )))
            .map_err(plot_error)?;
    }

    root.present().map_err(plot_error)?;
    Ok(())
}
