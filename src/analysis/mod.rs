pub mod config;
pub mod pipeline;
pub mod types;

pub use crate::error::{AnalysisError, Result};
