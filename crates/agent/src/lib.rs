//! Auto-reply engine
//!
//! Features:
//! - Keyword-based intent classification
//! - Time-of-day hint detection
//! - Sample-phrase selection
//! - Tone-templated reply composition with a reasoning trace
//! - Responder trait abstraction for testability
//! - Conversation thread bookkeeping with fallback on responder failure
//!
//! Every helper is pure and deterministic. The static tables (tone templates,
//! intent and slot keywords) live in `autoreply_core` and are read-only.

pub mod conversation;
pub mod intent;
pub mod response;
pub mod sample;
pub mod time_hint;
pub mod traits;

pub use conversation::{ConversationThread, RESPONDER_FAILURE_REASON};
pub use intent::detect_intents;
pub use response::{
    escalation_triggered, generate_reply, should_send_intro, EMPTY_MESSAGE_REASON, PRIORITY_CLAUSE,
};
pub use sample::pick_sample_phrase;
pub use time_hint::detect_time_hint;
pub use traits::{ReplyEngine, Responder};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    /// Request violated the boundary contract
    #[error(transparent)]
    Request(#[from] autoreply_core::Error),

    /// A remote responder could not be reached or answered with an error
    #[error("Responder unavailable: {0}")]
    Unavailable(String),
}
