//! Multi-paper comparison.

use super::ToolContext;
use crate::config::limits;
use crate::error::{ToolError, ToolResult};
use crate::{extract, prompts};

/// A document queued for comparison: a display name plus raw PDF bytes.
#[derive(Debug, Clone)]
pub struct NamedDocument {
    /// Name shown in errors and logs (typically the filename).
    pub name: String,
    /// Raw PDF bytes.
    pub bytes: Vec<u8>,
}

impl NamedDocument {
    /// Create a named document.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }
}

/// Compare 2-5 papers pairwise.
///
/// The 2-5 bound is validated on the input list before any extraction or
/// model call. Every document is then extracted, collecting per-file
/// failures instead of aborting on the first. After exclusions the lower
/// bound is re-validated: if fewer than two texts survive, a validation
/// error naming the failed files is returned and the model is not invoked.
/// Otherwise the comparison runs over the surviving texts and any excluded
/// files are logged.
///
/// # Errors
///
/// Returns error when the bound check fails (before or after exclusions) or
/// on model failure.
pub async fn compare_documents(ctx: &ToolContext, docs: &[NamedDocument]) -> ToolResult<String> {
    if docs.len() < limits::MIN_COMPARISON_PAPERS || docs.len() > limits::MAX_COMPARISON_PAPERS {
        return Err(ToolError::validation(
            "papers",
            format!(
                "expected between {} and {} PDFs, got {}",
                limits::MIN_COMPARISON_PAPERS,
                limits::MAX_COMPARISON_PAPERS,
                docs.len()
            ),
        ));
    }

    let mut texts = Vec::with_capacity(docs.len());
    let mut failed: Vec<String> = Vec::new();

    for doc in docs {
        match extract::extract_text(&doc.bytes) {
            Ok(text) => texts.push(text),
            Err(e) => {
                tracing::warn!(file = %doc.name, error = %e, "Excluding paper from comparison");
                failed.push(format!("{}: {}", doc.name, e));
            }
        }
    }

    // Re-validate the lower bound after exclusions. One bad file must not
    // silently shrink the comparison below what was checked above.
    if texts.len() < limits::MIN_COMPARISON_PAPERS {
        return Err(ToolError::validation(
            "papers",
            format!(
                "only {} of {} PDFs yielded text, need at least {} (failed: {})",
                texts.len(),
                docs.len(),
                limits::MIN_COMPARISON_PAPERS,
                failed.join("; ")
            ),
        ));
    }

    if !failed.is_empty() {
        tracing::info!(
            excluded = failed.len(),
            compared = texts.len(),
            "Comparing fewer papers than uploaded"
        );
    }

    let prompt = prompts::comparison_prompt(&texts);

    tracing::info!(papers = texts.len(), "Generating comparative analysis");
    let response = ctx.client.generate(&prompt).await?;

    Ok(response)
}
