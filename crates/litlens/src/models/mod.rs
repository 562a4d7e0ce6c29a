//! Data models for paper analysis records.
//!
//! All models use `#[serde(default)]` so every field is constructible from
//! partial JSON, and list fields are never null.

mod analysis;

pub use analysis::{Dataset, FutureDirections, Methodology, PaperAnalysis, ResultsSection};
