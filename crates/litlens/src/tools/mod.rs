//! Analysis operations.
//!
//! Each operation:
//! 1. Validates its input
//! 2. Extracts text and/or builds a prompt
//! 3. Calls the Gemini client and returns the raw response

mod analyze;
mod chat;
mod compare;

pub use analyze::{analyze_document, analyze_text};
pub use chat::answer_question;
pub use compare::{NamedDocument, compare_documents};

use std::sync::Arc;

use crate::client::GeminiClient;

/// Operation execution context.
pub struct ToolContext {
    /// Gemini client.
    pub client: Arc<GeminiClient>,
}

impl ToolContext {
    /// Create a new operation context.
    #[must_use]
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}
