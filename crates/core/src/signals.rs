//! Message signals: intents and time-of-day hints
//!
//! Both label sets are closed. Keyword intents and time slots carry their
//! trigger substrings; `Question` and `ShortPing` are structural and have none.

use serde::{Deserialize, Serialize};

/// Coarse intent inferred from keyword presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    Greeting,
    Urgency,
    Scheduling,
    FollowUp,
    Gratitude,
    Delivery,
    Social,
    /// Message contains a question mark
    Question,
    /// Three whitespace-delimited tokens or fewer
    ShortPing,
}

impl Intent {
    /// Keyword-driven intents in match order
    pub const KEYWORD_INTENTS: [Intent; 7] = [
        Intent::Greeting,
        Intent::Urgency,
        Intent::Scheduling,
        Intent::FollowUp,
        Intent::Gratitude,
        Intent::Delivery,
        Intent::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Urgency => "urgency",
            Intent::Scheduling => "scheduling",
            Intent::FollowUp => "followUp",
            Intent::Gratitude => "gratitude",
            Intent::Delivery => "delivery",
            Intent::Social => "social",
            Intent::Question => "question",
            Intent::ShortPing => "shortPing",
        }
    }

    /// Lower-case trigger substrings
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::Greeting => &["hey", "hello", "hi", "good morning", "good evening"],
            Intent::Urgency => &["urgent", "asap", "immediately", "right now", "emergency"],
            Intent::Scheduling => &["meeting", "schedule", "call", "calendar", "book"],
            Intent::FollowUp => &["any update", "checking in", "follow up", "reminder"],
            Intent::Gratitude => &["thanks", "thank you", "appreciate"],
            Intent::Delivery => &["send", "deliver", "ready", "finished"],
            Intent::Social => &["coffee", "drink", "hang", "party", "dinner"],
            Intent::Question | Intent::ShortPing => &[],
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Time-of-day or weekend reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Weekend,
}

impl TimeSlot {
    /// Slots in match order
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Weekend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::Weekend => "weekend",
        }
    }

    /// Lower-case trigger substrings
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            TimeSlot::Morning => &["morning", "am"],
            TimeSlot::Afternoon => &["afternoon", "pm"],
            TimeSlot::Evening => &["evening", "tonight"],
            TimeSlot::Weekend => &["saturday", "sunday", "weekend"],
        }
    }

    /// How the reply echoes the slot back
    pub fn mirror_phrase(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "tomorrow morning",
            TimeSlot::Afternoon => "this afternoon",
            TimeSlot::Evening => "this evening",
            TimeSlot::Weekend => "over the weekend",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
