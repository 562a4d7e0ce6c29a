//! Single-paper analysis.

use super::ToolContext;
use crate::error::ToolResult;
use crate::{extract, prompts};

/// Analyze one paper supplied as PDF bytes.
///
/// Extracts the text, builds the literature-review instruction, and returns
/// the model's free-text response unmodified. If extraction fails the model
/// is never invoked.
///
/// # Errors
///
/// Returns error on extraction failure or model failure.
pub async fn analyze_document(ctx: &ToolContext, pdf_bytes: &[u8]) -> ToolResult<String> {
    let text = extract::extract_text(pdf_bytes)?;
    analyze_text(ctx, &text).await
}

/// Analyze already-extracted paper text.
///
/// # Errors
///
/// Returns error on model failure.
pub async fn analyze_text(ctx: &ToolContext, text: &str) -> ToolResult<String> {
    let prompt = prompts::analysis_prompt(text);

    tracing::info!(text_chars = text.chars().count(), "Generating literature review");
    let response = ctx.client.generate(&prompt).await?;

    Ok(response)
}
