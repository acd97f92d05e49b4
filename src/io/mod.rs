//! Input and output boundaries: tabular loading, hand entry and CSV export.

pub mod csv_loader;
pub mod export;
pub mod manual;

pub use csv_loader::{load_records, load_records_from_path, parse_expiry, REQUIRED_COLUMNS};
pub use export::{report_to_csv_string, write_report, EXPORT_COLUMNS};
pub use manual::{ManualEntry, PremiumSource};
