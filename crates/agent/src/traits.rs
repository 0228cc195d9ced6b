//! Responder abstraction
//!
//! Anything that turns (persona, message, history) into a reply implements
//! [`Responder`]: the local [`ReplyEngine`], or a remote client calling the
//! HTTP adapter. The conversation thread only talks to this trait, which
//! keeps it testable with failing mock implementations.

use autoreply_core::{ConversationMessage, PersonaConfig, ReplyRequest, ReplyResult};

use crate::response::generate_reply;
use crate::AgentError;

/// Produces replies for a thread
pub trait Responder: Send + Sync {
    /// Generate a reply to `message` given the thread so far
    fn respond(
        &self,
        config: &PersonaConfig,
        message: &str,
        history: &[ConversationMessage],
    ) -> Result<ReplyResult, AgentError>;
}

/// In-process reply engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyEngine;

impl ReplyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Handle a boundary request, applying the message/history defaults
    pub fn handle(&self, request: ReplyRequest) -> Result<ReplyResult, AgentError> {
        let (config, message, history) = request.into_parts()?;
        self.respond(&config, &message, &history)
    }
}

impl Responder for ReplyEngine {
    fn respond(
        &self,
        config: &PersonaConfig,
        message: &str,
        history: &[ConversationMessage],
    ) -> Result<ReplyResult, AgentError> {
        Ok(generate_reply(config, message, history))
    }
}
