//! Reply composition
//!
//! Turns the classifier, time-hint and sample-phrase signals into the final
//! reply text plus a reasoning trace. The decision sequence is fixed:
//!
//! 1. Empty message short-circuits to the fallback text
//! 2. Escalation check against the configured keywords
//! 3. Reasoning lines (tone, intents, escalation, sample phrase, time hint)
//! 4. Intro decision from history
//! 5. Body clauses, closer and signature

use autoreply_core::{
    ConversationMessage, Intent, PersonaConfig, ReplyMeta, ReplyResult, TimeSlot,
};

use crate::intent::detect_intents;
use crate::sample::pick_sample_phrase;
use crate::time_hint::detect_time_hint;

/// Reasoning line for the empty-message path
pub const EMPTY_MESSAGE_REASON: &str = "Incoming message was empty, using fallback response.";

/// Clause added when an escalation keyword is present
pub const PRIORITY_CLAUSE: &str =
    "Flagged as priority \u{2014} I'll jump back in ahead of schedule or call if needed.";

/// An agent message containing this marker means the intro was already sent
pub const INTRO_MARKER: &str = "auto-responder";

/// Signals computed once per message
#[derive(Debug, Clone)]
struct ReplyContext<'a> {
    intents: Vec<Intent>,
    escalation: bool,
    sample_phrase: Option<&'a str>,
    time_hint: Option<TimeSlot>,
}

impl<'a> ReplyContext<'a> {
    fn build(config: &'a PersonaConfig, message: &str) -> Self {
        let intents = detect_intents(message);
        let escalation = escalation_triggered(&config.escalate_keywords, message);
        let sample_phrase = pick_sample_phrase(&config.sample_phrases, &intents);
        let time_hint = detect_time_hint(message);

        Self {
            intents,
            escalation,
            sample_phrase,
            time_hint,
        }
    }

    fn has_intent(&self, intent: Intent) -> bool {
        self.intents.contains(&intent)
    }

    fn reasoning(&self, config: &PersonaConfig) -> Vec<String> {
        let mut reasoning = vec![format!("Tone preset: {}", config.tone)];

        if self.intents.is_empty() {
            reasoning.push("No explicit intent detected, relying on fallback tone.".to_string());
        } else {
            let labels: Vec<&str> = self.intents.iter().map(Intent::as_str).collect();
            reasoning.push(format!("Detected intents: {}", labels.join(", ")));
        }

        if self.escalation {
            reasoning.push("Escalation keywords detected, adding prioritisation line.".to_string());
        }

        if let Some(phrase) = self.sample_phrase {
            reasoning.push(format!(
                "Reinforcing familiarity via sample phrase \"{}\".",
                phrase
            ));
        }

        if let Some(slot) = self.time_hint {
            reasoning.push(format!("Recipient referenced {}, mirroring in reply.", slot));
        }

        reasoning
    }
}

/// Whether any configured keyword occurs in the message, ignoring case
pub fn escalation_triggered(keywords: &[String], message: &str) -> bool {
    let normalized = message.to_lowercase();
    keywords
        .iter()
        .any(|keyword| normalized.contains(&keyword.to_lowercase()))
}

/// Introduce the twin once per thread
///
/// True unless an agent message in the history already mentions the auto-responder.
pub fn should_send_intro(history: &[ConversationMessage]) -> bool {
    !history
        .iter()
        .any(|entry| entry.is_from_agent() && entry.text.to_lowercase().contains(INTRO_MARKER))
}

/// Generate a reply for `message` in the voice of `config`
///
/// Pure: the same inputs always produce the same reply and reasoning trace.
pub fn generate_reply(
    config: &PersonaConfig,
    message: &str,
    history: &[ConversationMessage],
) -> ReplyResult {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        tracing::debug!(tone = %config.tone, "Empty incoming message, using fallback");
        return ReplyResult::fallback(config, EMPTY_MESSAGE_REASON);
    }

    let context = ReplyContext::build(config, trimmed);
    let reasoning = context.reasoning(config);
    let send_intro = should_send_intro(history);
    let reply = compose(config, &context, send_intro);

    tracing::debug!(
        tone = %config.tone,
        intents = context.intents.len(),
        escalation = context.escalation,
        time_hint = ?context.time_hint,
        intro = send_intro,
        "Composed reply"
    );

    ReplyResult {
        reply,
        reasoning,
        meta: ReplyMeta {
            mood: config.tone,
            escalation_triggered: context.escalation,
            used_sample: context.sample_phrase.map(str::to_string),
            matched_intents: context.intents,
        },
    }
}

fn compose(config: &PersonaConfig, context: &ReplyContext<'_>, send_intro: bool) -> String {
    let template = config.tone.template();
    let mut parts: Vec<String> = Vec::with_capacity(7);

    if send_intro {
        parts.push(config.auto_intro.clone());
    }

    parts.push(format!(
        "{}! {} {}",
        template.opener, template.acknowledgement, template.assurance
    ));

    if context.has_intent(Intent::Scheduling) {
        parts.push(format!(
            "If this is about timing, I'm back online around {}.",
            config.availability
        ));
    } else {
        parts.push(format!("My next reply window is {}.", config.availability));
    }

    if let Some(slot) = context.time_hint {
        parts.push(format!("I'll aim to follow up {}.", slot.mirror_phrase()));
    }

    if context.escalation {
        parts.push(PRIORITY_CLAUSE.to_string());
    }

    if let Some(phrase) = context.sample_phrase {
        parts.push(phrase.to_string());
    }

    parts.push(template.closer.to_string());

    format!("{} {}", parts.join(" "), config.signature)
        .trim()
        .to_string()
}
