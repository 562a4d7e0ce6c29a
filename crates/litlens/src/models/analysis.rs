//! The Paper Analysis Record.
//!
//! A fixed-schema description of one analyzed paper. Every list field
//! defaults to empty (never absent) and every optional scalar defaults to a
//! sentinel string, so the markdown renderer interpolates unconditionally
//! and never branches on missing-vs-empty. Records are constructed once per
//! paper, immutable thereafter, and live only for the session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel for optional scalars the analysis could not populate.
pub(crate) const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel for a missing source URL.
pub(crate) const NOT_FOUND: &str = "Not found";

fn not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

fn not_found() -> String {
    NOT_FOUND.to_string()
}

/// How the paper approaches its problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Methodology {
    /// Core approach summary.
    #[serde(default = "not_specified")]
    pub core_approach: String,

    /// Technique names, in the order the analysis listed them.
    #[serde(default)]
    pub techniques: Vec<String>,

    /// What the paper claims is novel.
    #[serde(default = "not_specified")]
    pub novelty: String,
}

impl Default for Methodology {
    fn default() -> Self {
        Self { core_approach: not_specified(), techniques: Vec::new(), novelty: not_specified() }
    }
}

/// Dataset details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Where the data came from.
    #[serde(default = "not_specified")]
    pub source: String,

    /// Size description (e.g., "1.2M sentence pairs").
    #[serde(default = "not_specified")]
    pub size: String,

    /// Data type description (e.g., "parallel text").
    #[serde(default = "not_specified")]
    pub data_type: String,

    /// Processing steps, in order.
    #[serde(default)]
    pub processing_steps: Vec<String>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            source: not_specified(),
            size: not_specified(),
            data_type: not_specified(),
            processing_steps: Vec::new(),
        }
    }
}

/// Reported results.
///
/// Quantitative metrics are a name-to-value map; insertion order is
/// irrelevant, so a `BTreeMap` keeps rendering deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSection {
    /// Metric name to reported value.
    #[serde(default)]
    pub quantitative: BTreeMap<String, String>,

    /// Qualitative observations, in order.
    #[serde(default)]
    pub qualitative: Vec<String>,

    /// Benchmark descriptions, in order.
    #[serde(default)]
    pub benchmarks: Vec<String>,
}

/// Future work, both explicit and inferred.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureDirections {
    /// Directions the authors state themselves.
    #[serde(default)]
    pub author_stated: Vec<String>,

    /// Gaps inferable from the paper but not stated by the authors.
    #[serde(default)]
    pub implied_gaps: Vec<String>,
}

/// A fully described analysis of one paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperAnalysis {
    /// Paper title.
    #[serde(default = "not_specified")]
    pub title: String,

    /// Publication year.
    #[serde(default)]
    pub year: i32,

    /// Source URL, or the "Not found" sentinel.
    #[serde(default = "not_found")]
    pub url: String,

    /// Methodology section.
    #[serde(default)]
    pub methodology: Methodology,

    /// Dataset section.
    #[serde(default)]
    pub dataset: Dataset,

    /// Results section.
    #[serde(default)]
    pub results: ResultsSection,

    /// Future directions section.
    #[serde(default)]
    pub future_directions: FutureDirections,

    /// Self-rated certainty, 0-100. Purely advisory; never drives a
    /// control decision.
    #[serde(default)]
    pub confidence_score: f64,

    /// Section names the analysis could not populate, in order.
    #[serde(default)]
    pub missing_sections: Vec<String>,
}

impl Default for PaperAnalysis {
    fn default() -> Self {
        Self {
            title: not_specified(),
            year: 0,
            url: not_found(),
            methodology: Methodology::default(),
            dataset: Dataset::default(),
            results: ResultsSection::default(),
            future_directions: FutureDirections::default(),
            confidence_score: 0.0,
            missing_sections: Vec::new(),
        }
    }
}
