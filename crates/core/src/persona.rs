//! Persona definitions
//!
//! A persona describes the voice the auto-reply speaks in:
//! - Tone preset (one of a closed set, each backed by a fixed template)
//! - Availability window and signature
//! - Reusable sample phrases and escalation keywords
//! - Fallback and introduction lines

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Tone preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TonePreset {
    /// Warm & friendly
    #[default]
    Warm,
    /// Direct & concise
    Direct,
    /// Playful & upbeat
    Playful,
    /// Professional & calm
    Professional,
}

impl TonePreset {
    /// All presets, in display order
    pub const ALL: [TonePreset; 4] = [
        TonePreset::Warm,
        TonePreset::Direct,
        TonePreset::Playful,
        TonePreset::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TonePreset::Warm => "warm",
            TonePreset::Direct => "direct",
            TonePreset::Playful => "playful",
            TonePreset::Professional => "professional",
        }
    }

    /// Label shown in the persona form
    pub fn display_name(&self) -> &'static str {
        match self {
            TonePreset::Warm => "Warm & friendly",
            TonePreset::Direct => "Direct & concise",
            TonePreset::Playful => "Playful & upbeat",
            TonePreset::Professional => "Professional & calm",
        }
    }

    /// Fixed phrasing for this tone
    pub fn template(&self) -> &'static ToneTemplate {
        match self {
            TonePreset::Warm => &WARM,
            TonePreset::Direct => &DIRECT,
            TonePreset::Playful => &PLAYFUL,
            TonePreset::Professional => &PROFESSIONAL,
        }
    }
}

impl std::fmt::Display for TonePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TonePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TonePreset::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| Error::UnknownTone(s.to_string()))
    }
}

/// Text fragments a tone contributes to every reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneTemplate {
    pub opener: &'static str,
    pub acknowledgement: &'static str,
    pub assurance: &'static str,
    pub closer: &'static str,
}

const WARM: ToneTemplate = ToneTemplate {
    opener: "Hey",
    acknowledgement: "Thanks so much for the message.",
    assurance: "I'm heads-down right now but didn't want to leave you hanging.",
    closer: "Appreciate you!",
};

const DIRECT: ToneTemplate = ToneTemplate {
    opener: "Hi",
    acknowledgement: "Got your note.",
    assurance: "Unavailable at the moment, looping back as soon as I can.",
    closer: "Talk soon.",
};

const PLAYFUL: ToneTemplate = ToneTemplate {
    opener: "Heey \u{1F44B}",
    acknowledgement: "I see you sliding into my chats.",
    assurance: "Currently away from WhatsApp but I promise I'll bounce back ASAP.",
    closer: "Hold it down till then!",
};

const PROFESSIONAL: ToneTemplate = ToneTemplate {
    opener: "Hello",
    acknowledgement: "Thank you for reaching out.",
    assurance: "I'm in focus mode away from WhatsApp but I will review this shortly.",
    closer: "Best regards.",
};

/// Persona configuration
///
/// Owned by the caller; reply generation only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaConfig {
    /// Display name
    pub alias: String,
    /// Free-text description of how the user usually writes
    pub persona: String,
    /// Tone preset
    pub tone: TonePreset,
    /// Availability window, quoted verbatim in replies
    pub availability: String,
    /// Appended to every generated reply
    pub signature: String,
    /// Sent when the incoming message is empty
    pub fallback: String,
    /// Candidate reusable sentences, in preference order
    #[serde(default)]
    pub sample_phrases: Vec<String>,
    /// Case-insensitive trigger words for the priority clause
    #[serde(default)]
    pub escalate_keywords: Vec<String>,
    /// Advertised auto-reply delay (minutes)
    #[serde(default = "default_response_delay")]
    pub response_delay_minutes: u32,
    /// Introduction explaining the auto-reply, sent once per thread
    pub auto_intro: String,
}

fn default_response_delay() -> u32 {
    45
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            alias: "Alex".to_string(),
            persona: "Product-minded designer, upbeat and reliable friend who keeps things clear and kind."
                .to_string(),
            tone: TonePreset::Warm,
            availability: "Weekdays 09:00-18:00 (GMT)".to_string(),
            signature: "- Alex".to_string(),
            fallback: "I'll circle back with a thoughtful reply as soon as I'm back online."
                .to_string(),
            sample_phrases: vec![
                "appreciate you being patient".to_string(),
                "I'll loop back with details before the day ends".to_string(),
                "feel free to drop anything else here".to_string(),
            ],
            escalate_keywords: vec![
                "urgent".to_string(),
                "deadline".to_string(),
                "emergency".to_string(),
                "production".to_string(),
            ],
            response_delay_minutes: default_response_delay(),
            auto_intro: "I'm in focus mode away from WhatsApp right now, so you are chatting with my auto-responder twin."
                .to_string(),
        }
    }
}

impl PersonaConfig {
    /// Create a persona with the given alias, other fields from the default persona
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Default::default()
        }
    }

    /// Set tone
    pub fn with_tone(mut self, tone: TonePreset) -> Self {
        self.tone = tone;
        self
    }

    /// Set availability window
    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = availability.into();
        self
    }

    /// Set signature
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Replace sample phrases
    pub fn with_sample_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sample_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Replace escalation keywords
    pub fn with_escalate_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.escalate_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Page headline, e.g. "Alex's WhatsApp auto twin"
    pub fn headline(&self) -> String {
        format!("{}'s WhatsApp auto twin", self.alias)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Add a sample phrase; returns false when blank or already present
    pub fn add_sample_phrase(&mut self, phrase: &str) -> bool {
        push_chip(&mut self.sample_phrases, phrase)
    }

    /// Add an escalation keyword; returns false when blank or already present
    pub fn add_escalate_keyword(&mut self, keyword: &str) -> bool {
        push_chip(&mut self.escalate_keywords, keyword)
    }

    pub fn remove_sample_phrase(&mut self, index: usize) -> Option<String> {
        (index < self.sample_phrases.len()).then(|| self.sample_phrases.remove(index))
    }

    pub fn remove_escalate_keyword(&mut self, index: usize) -> Option<String> {
        (index < self.escalate_keywords.len()).then(|| self.escalate_keywords.remove(index))
    }

    /// Validate fields the type system does not constrain
    pub fn validate(&self) -> Result<()> {
        if self.alias.trim().is_empty() {
            return Err(Error::InvalidPersona {
                field: "alias".to_string(),
                message: "Display name cannot be blank".to_string(),
            });
        }

        if self.response_delay_minutes == 0 {
            return Err(Error::InvalidPersona {
                field: "responseDelayMinutes".to_string(),
                message: "Response delay must be at least 1 minute".to_string(),
            });
        }

        Ok(())
    }
}

fn push_chip(items: &mut Vec<String>, draft: &str) -> bool {
    let cleaned = draft.trim();
    if cleaned.is_empty() || items.iter().any(|item| item == cleaned) {
        return false;
    }
    items.push(cleaned.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_persona() {
        let persona = PersonaConfig::default();
        assert_eq!(persona.alias, "Alex");
        assert_eq!(persona.tone, TonePreset::Warm);
        assert_eq!(persona.sample_phrases.len(), 3);
        assert_eq!(persona.response_delay_minutes, 45);
        assert!(persona.auto_intro.contains("auto-responder"));
        assert!(persona.validate().is_ok());
    }

    #[test]
    fn test_tone_round_trip_labels() {
        for tone in TonePreset::ALL {
            assert_eq!(tone.as_str().parse::<TonePreset>().unwrap(), tone);
        }
        assert_eq!(
            "sarcastic".parse::<TonePreset>(),
            Err(Error::UnknownTone("sarcastic".to_string()))
        );
    }

    #[test]
    fn test_tone_templates() {
        assert_eq!(TonePreset::Direct.template().opener, "Hi");
        assert_eq!(TonePreset::Playful.template().opener, "Heey 👋");
        assert_eq!(TonePreset::Professional.template().closer, "Best regards.");
    }

    #[test]
    fn test_unknown_tone_rejected_on_parse() {
        let json = r#"{
            "alias": "Sam", "persona": "", "tone": "grumpy", "availability": "later",
            "signature": "- Sam", "fallback": "brb", "autoIntro": "auto-responder here"
        }"#;
        assert!(serde_json::from_str::<PersonaConfig>(json).is_err());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{
            "alias": "Sam", "persona": "", "tone": "direct", "availability": "later",
            "signature": "- Sam", "fallback": "brb", "autoIntro": "hi",
            "samplePhrases": ["on it"], "escalateKeywords": ["prod"], "responseDelayMinutes": 5
        }"#;
        let persona: PersonaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(persona.tone, TonePreset::Direct);
        assert_eq!(persona.sample_phrases, vec!["on it"]);
        assert_eq!(persona.escalate_keywords, vec!["prod"]);
        assert_eq!(persona.response_delay_minutes, 5);
    }

    #[test]
    fn test_headline_collapses_whitespace() {
        let persona = PersonaConfig::new("  Jamie   Lee ");
        assert_eq!(persona.headline(), "Jamie Lee 's WhatsApp auto twin");
        assert_eq!(PersonaConfig::default().headline(), "Alex's WhatsApp auto twin");
    }

    #[test]
    fn test_chip_editing() {
        let mut persona = PersonaConfig::default().with_sample_phrases(Vec::<String>::new());
        assert!(persona.add_sample_phrase("  on my way  "));
        assert!(!persona.add_sample_phrase("on my way"));
        assert!(!persona.add_sample_phrase("   "));
        assert_eq!(persona.sample_phrases, vec!["on my way"]);

        assert_eq!(persona.remove_sample_phrase(3), None);
        assert_eq!(persona.remove_sample_phrase(0), Some("on my way".to_string()));
        assert!(persona.sample_phrases.is_empty());

        assert!(persona.add_escalate_keyword("outage"));
        assert_eq!(persona.remove_escalate_keyword(persona.escalate_keywords.len() - 1), Some("outage".to_string()));
    }

    #[test]
    fn test_validate() {
        let mut persona = PersonaConfig::default();
        persona.response_delay_minutes = 0;
        assert!(matches!(
            persona.validate(),
            Err(Error::InvalidPersona { ref field, .. }) if field == "responseDelayMinutes"
        ));

        let persona = PersonaConfig::new("   ");
        assert!(persona.validate().is_err());
    }
}
