//! Follow-up question answering over a generated analysis.

use super::ToolContext;
use crate::error::{ToolError, ToolResult};
use crate::prompts;
use crate::session::SessionContext;

/// Answer a question using the session's last analysis as context.
///
/// Requires a prior analysis in the session. The model's answer is returned
/// unmodified; the caller records the exchange in the session history.
///
/// # Errors
///
/// Returns a validation error when no analysis exists yet, or a model error
/// on API failure.
pub async fn answer_question(
    ctx: &ToolContext,
    session: &SessionContext,
    question: &str,
) -> ToolResult<String> {
    let question = question.trim();
    if question.is_empty() {
        return Err(ToolError::validation("question", "question must not be empty"));
    }

    let Some(analysis) = session.analysis() else {
        return Err(ToolError::validation(
            "session",
            "no analysis available yet; analyze a paper first",
        ));
    };

    let prompt = prompts::chat_prompt(analysis, question);

    tracing::info!(question_chars = question.chars().count(), "Answering follow-up question");
    let answer = ctx.client.generate(&prompt).await?;

    Ok(answer)
}
