//! Output formatting for analysis records.

mod json;
mod markdown;

pub use json::{format_analysis_json, parse_analysis_json};
pub use markdown::format_analysis_markdown;
