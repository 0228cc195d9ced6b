//! Reply request/response shapes

use serde::{Deserialize, Serialize};

use crate::conversation::ConversationMessage;
use crate::error::{Error, Result};
use crate::persona::{PersonaConfig, TonePreset};
use crate::signals::Intent;

/// Request accepted at the reply boundary
///
/// `message` and `history` may be absent or null; `config` may not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyRequest {
    #[serde(default)]
    pub config: Option<PersonaConfig>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<ConversationMessage>>,
}

impl ReplyRequest {
    pub fn new(config: PersonaConfig, message: impl Into<String>) -> Self {
        Self {
            config: Some(config),
            message: Some(message.into()),
            history: None,
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationMessage>) -> Self {
        self.history = Some(history);
        self
    }

    /// Split into (config, message, history), applying defaults
    pub fn into_parts(self) -> Result<(PersonaConfig, String, Vec<ConversationMessage>)> {
        let config = self.config.ok_or(Error::MissingConfig)?;
        Ok((
            config,
            self.message.unwrap_or_default(),
            self.history.unwrap_or_default(),
        ))
    }
}

/// Summary of the decisions behind a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMeta {
    /// Tone the reply was written in
    pub mood: TonePreset,
    pub matched_intents: Vec<Intent>,
    pub escalation_triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_sample: Option<String>,
}

impl ReplyMeta {
    /// Meta for a reply that made no decisions
    pub fn neutral(mood: TonePreset) -> Self {
        Self {
            mood,
            matched_intents: Vec::new(),
            escalation_triggered: false,
            used_sample: None,
        }
    }
}

/// Generated reply with its reasoning trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyResult {
    pub reply: String,
    /// One entry per decision, in the order they were made
    pub reasoning: Vec<String>,
    pub meta: ReplyMeta,
}

impl ReplyResult {
    /// The configured fallback text with a single explanatory reasoning line
    pub fn fallback(config: &PersonaConfig, reason: impl Into<String>) -> Self {
        Self {
            reply: config.fallback.clone(),
            reasoning: vec![reason.into()],
            meta: ReplyMeta::neutral(config.tone),
        }
    }

    /// Dashboard view of this reply
    pub fn status(&self, config: &PersonaConfig) -> StatusSummary {
        StatusSummary::new(config, &self.meta)
    }
}

/// Status dashboard data for the latest reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    /// Next manual reply window
    pub next_window: String,
    pub avg_delay_minutes: u32,
    pub escalation: bool,
    pub intents: Vec<Intent>,
}

impl StatusSummary {
    pub fn new(config: &PersonaConfig, meta: &ReplyMeta) -> Self {
        Self {
            next_window: config.availability.clone(),
            avg_delay_minutes: config.response_delay_minutes,
            escalation: meta.escalation_triggered,
            intents: meta.matched_intents.clone(),
        }
    }

    pub fn escalation_label(&self) -> &'static str {
        if self.escalation {
            "Triggered"
        } else {
            "Clear"
        }
    }

    pub fn intents_label(&self) -> String {
        if self.intents.is_empty() {
            return "n/a".to_string();
        }
        self.intents
            .iter()
            .map(Intent::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn delay_label(&self) -> String {
        format!("{} min", self.avg_delay_minutes)
    }
}
