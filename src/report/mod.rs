//! Presentation helpers: formatted table rows and payoff charts.

pub mod plot;
pub mod table;

pub use plot::render_payoff_svg;
pub use table::{display_rows, render_table, DisplayRow};
