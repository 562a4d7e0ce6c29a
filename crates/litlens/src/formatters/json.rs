//! JSON import/export of analysis records.

use crate::models::PaperAnalysis;

/// Serialize a record as pretty-printed JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_analysis_json(analysis: &PaperAnalysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

/// Parse a record from JSON.
///
/// Absent fields take their documented defaults (empty lists, sentinel
/// scalars), so a partial record file is valid input.
///
/// # Errors
///
/// Returns error if the input is not valid JSON for the record schema.
pub fn parse_analysis_json(input: &str) -> serde_json::Result<PaperAnalysis> {
    serde_json::from_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut record = PaperAnalysis { title: "Test Paper".into(), year: 2024, ..Default::default() };
        record.methodology.techniques.push("self-attention".into());

        let json = format_analysis_json(&record).unwrap();
        let parsed = parse_analysis_json(&json).unwrap();

        assert_eq!(parsed.title, "Test Paper");
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.methodology.techniques, vec!["self-attention"]);
    }
}
