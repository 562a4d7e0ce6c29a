//! Markdown rendering of the Paper Analysis Record.

use crate::models::PaperAnalysis;

/// Render a record as a markdown document.
///
/// Total for any validly constructed record: every field has a non-null
/// default, so no branch on missing data exists. Section order is fixed;
/// every list renders one bullet per element in list order, and empty lists
/// render the header with zero bullets beneath.
#[must_use]
pub fn format_analysis_markdown(analysis: &PaperAnalysis) -> String {
    let mut output = String::new();

    // Title and link
    output.push_str(&format!("# {} ({})\n", analysis.title, analysis.year));
    output.push_str(&format!("**Link**: {}\n\n", analysis.url));

    // Methodology
    output.push_str("## Methodology\n");
    output.push_str(&format!("* Core approach: {}\n", analysis.methodology.core_approach));
    output.push_str("* Techniques:\n");
    for technique in &analysis.methodology.techniques {
        output.push_str(&format!("  - {technique}\n"));
    }
    output.push_str(&format!("* Novelty: {}\n\n", analysis.methodology.novelty));

    // Dataset
    output.push_str("## Dataset\n");
    output.push_str(&format!("* Source: {}\n", analysis.dataset.source));
    output.push_str(&format!(
        "* Size/Type: {} | {}\n",
        analysis.dataset.size, analysis.dataset.data_type
    ));
    output.push_str("* Processing:\n");
    for step in &analysis.dataset.processing_steps {
        output.push_str(&format!("  - {step}\n"));
    }
    output.push('\n');

    // Results
    output.push_str("## Results\n");
    output.push_str("* Quantitative:\n");
    for (metric, value) in &analysis.results.quantitative {
        output.push_str(&format!("  - {metric}: {value}\n"));
    }
    output.push_str("* Qualitative:\n");
    for observation in &analysis.results.qualitative {
        output.push_str(&format!("  - {observation}\n"));
    }
    output.push_str("* Benchmarks:\n");
    for benchmark in &analysis.results.benchmarks {
        output.push_str(&format!("  - {benchmark}\n"));
    }
    output.push('\n');

    // Future directions
    output.push_str("## Future Directions\n");
    output.push_str("* Author-stated:\n");
    for direction in &analysis.future_directions.author_stated {
        output.push_str(&format!("  - {direction}\n"));
    }
    output.push_str("* Implied gaps:\n");
    for gap in &analysis.future_directions.implied_gaps {
        output.push_str(&format!("  - {gap}\n"));
    }
    output.push('\n');

    // Confidence and missing data
    output.push_str(&format!("**Confidence Score**: {:.2}%\n\n", analysis.confidence_score));
    output.push_str("## Missing Data\n");
    for section in &analysis.missing_sections {
        output.push_str(&format!("- {section}\n"));
    }

    output
}
