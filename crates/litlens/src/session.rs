//! Session state for one interactive run.
//!
//! The session context is created at session start, passed explicitly to
//! each handler, and dropped at session end. The interaction model is
//! strictly request/response, so there is a single writer and no locking.

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// The human asking questions.
    User,
    /// The model's answer.
    Assistant,
}

/// One chat exchange entry.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    /// Message author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

/// Per-session state: extracted text, the last generated analysis, and the
/// chat history.
#[derive(Debug, Default)]
pub struct SessionContext {
    paper_text: Option<String>,
    analysis: Option<String>,
    history: Vec<ChatTurn>,
}

impl SessionContext {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the extracted paper text.
    pub fn set_paper_text(&mut self, text: String) {
        self.paper_text = Some(text);
    }

    /// Extracted paper text, if any.
    #[must_use]
    pub fn paper_text(&self) -> Option<&str> {
        self.paper_text.as_deref()
    }

    /// Store the generated analysis.
    pub fn set_analysis(&mut self, analysis: String) {
        self.analysis = Some(analysis);
    }

    /// Last generated analysis, if any.
    #[must_use]
    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }

    /// Append a completed question/answer exchange to the history.
    pub fn record_exchange(&mut self, question: String, answer: String) {
        self.history.push(ChatTurn { role: ChatRole::User, content: question });
        self.history.push(ChatTurn { role: ChatRole::Assistant, content: answer });
    }

    /// Chat history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Clear the chat history ("clear chat"). Paper text and analysis are
    /// kept; only the conversation resets.
    pub fn clear_chat(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session() {
        let session = SessionContext::new();
        assert!(session.paper_text().is_none());
        assert!(session.analysis().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_record_exchange_orders_roles() {
        let mut session = SessionContext::new();
        session.record_exchange("q1".into(), "a1".into());
        session.record_exchange("q2".into(), "a2".into());

        let history = session.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].role, ChatRole::User);
        assert_eq!(history[1].role, ChatRole::Assistant);
        assert_eq!(history[2].content, "q2");
    }

    #[test]
    fn test_clear_chat_keeps_analysis() {
        let mut session = SessionContext::new();
        session.set_analysis("the review".into());
        session.record_exchange("q".into(), "a".into());

        session.clear_chat();

        assert!(session.history().is_empty());
        assert_eq!(session.analysis(), Some("the review"));
    }
}
