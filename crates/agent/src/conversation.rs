//! Conversation thread bookkeeping
//!
//! Keeps the visible history for one contact. Each submission appends the
//! contact's message and then exactly one agent message: the generated reply,
//! or the persona's fallback text when the responder fails. A failure never
//! propagates and never leaves the thread with a dangling contact message.

use autoreply_core::{ConversationMessage, PersonaConfig, ReplyResult};
use chrono::Utc;

use crate::traits::Responder;

/// Reasoning line recorded when the responder could not produce a reply
pub const RESPONDER_FAILURE_REASON: &str =
    "API request failed, falling back to static response template.";

/// Visible history of one thread plus the latest reply
#[derive(Debug, Clone, Default)]
pub struct ConversationThread {
    messages: Vec<ConversationMessage>,
    last_result: Option<ReplyResult>,
}

impl ConversationThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages, oldest first
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Result behind the most recent agent message
    pub fn last_result(&self) -> Option<&ReplyResult> {
        self.last_result.as_ref()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Submit a contact message and record the reply
    ///
    /// Blank drafts are ignored and return `None`.
    pub fn submit<R>(
        &mut self,
        config: &PersonaConfig,
        draft: &str,
        responder: &R,
    ) -> Option<&ReplyResult>
    where
        R: Responder + ?Sized,
    {
        let content = draft.trim();
        if content.is_empty() {
            return None;
        }

        let incoming = ConversationMessage::contact(content, self.next_timestamp());
        self.messages.push(incoming);

        let result = match responder.respond(config, content, &self.messages) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "Responder failed, sending fallback reply");
                ReplyResult::fallback(config, RESPONDER_FAILURE_REASON)
            },
        };

        let reply = ConversationMessage::agent(result.reply.clone(), self.next_timestamp());
        self.messages.push(reply);
        self.last_result = Some(result);

        tracing::debug!(messages = self.messages.len(), "Thread updated");
        self.last_result.as_ref()
    }

    /// Clear the thread
    pub fn reset(&mut self) {
        self.messages.clear();
        self.last_result = None;
    }

    /// Wall-clock milliseconds, kept strictly above the previous entry
    fn next_timestamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.messages.last() {
            Some(last) if last.timestamp >= now => last.timestamp + 1,
            _ => now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ReplyEngine;
    use crate::AgentError;
    use autoreply_core::{Author, ReplyMeta};

    struct OfflineResponder;

    impl Responder for OfflineResponder {
        fn respond(
            &self,
            _config: &PersonaConfig,
            _message: &str,
            _history: &[ConversationMessage],
        ) -> Result<ReplyResult, AgentError> {
            Err(AgentError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        let mut thread = ConversationThread::new();
        assert!(thread
            .submit(&PersonaConfig::default(), "   ", &ReplyEngine)
            .is_none());
        assert!(thread.is_empty());
        assert!(thread.last_result().is_none());
    }

    #[test]
    fn test_submit_appends_contact_then_agent() {
        let config = PersonaConfig::default();
        let mut thread = ConversationThread::new();
        let reply = thread
            .submit(&config, "  any update on the deck?  ", &ReplyEngine)
            .map(|r| r.reply.clone())
            .unwrap();

        let messages = thread.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, Author::Contact);
        assert_eq!(messages[0].text, "any update on the deck?");
        assert_eq!(messages[1].author, Author::Agent);
        assert_eq!(messages[1].text, reply);
        assert!(messages[1].timestamp > messages[0].timestamp);
    }

    #[test]
    fn test_intro_sent_once_per_thread() {
        let config = PersonaConfig::default();
        let mut thread = ConversationThread::new();

        thread.submit(&config, "first message here", &ReplyEngine);
        thread.submit(&config, "second message here", &ReplyEngine);

        let agent_replies: Vec<&str> = thread
            .messages()
            .iter()
            .filter(|m| m.is_from_agent())
            .map(|m| m.text.as_str())
            .collect();
        assert!(agent_replies[0].starts_with(&config.auto_intro));
        assert!(!agent_replies[1].contains(&config.auto_intro));
    }

    #[test]
    fn test_responder_failure_uses_fallback() {
        let config = PersonaConfig::default();
        let mut thread = ConversationThread::new();
        let result = thread
            .submit(&config, "hello?", &OfflineResponder)
            .cloned()
            .unwrap();

        assert_eq!(result.reply, config.fallback);
        assert_eq!(result.reasoning, vec![RESPONDER_FAILURE_REASON.to_string()]);
        assert_eq!(result.meta, ReplyMeta::neutral(config.tone));

        assert_eq!(thread.len(), 2);
        assert_eq!(thread.messages()[1].text, config.fallback);
    }

    #[test]
    fn test_timestamps_strictly_increase() {
        let config = PersonaConfig::default();
        let mut thread = ConversationThread::new();
        for _ in 0..5 {
            thread.submit(&config, "ping", &ReplyEngine);
        }
        assert!(thread
            .messages()
            .windows(2)
            .all(|pair| pair[1].timestamp > pair[0].timestamp));
    }

    #[test]
    fn test_reset() {
        let mut thread = ConversationThread::new();
        thread.submit(&PersonaConfig::default(), "hey", &ReplyEngine);
        thread.reset();
        assert!(thread.is_empty());
        assert!(thread.last_result().is_none());
    }
}
