//! Intent classification
//!
//! Fixed keyword-set matching only. Labels come back in table order, each at
//! most once, followed by the structural `question` and `shortPing` labels.

use autoreply_core::Intent;

/// Messages with this many whitespace tokens or fewer count as a short ping
pub const SHORT_PING_MAX_TOKENS: usize = 3;

/// Detect intents in raw message text
pub fn detect_intents(message: &str) -> Vec<Intent> {
    let normalized = message.to_lowercase();
    let token_count = normalized.split_whitespace().count();
    if token_count == 0 {
        return Vec::new();
    }

    let mut intents: Vec<Intent> = Intent::KEYWORD_INTENTS
        .into_iter()
        .filter(|intent| {
            intent
                .keywords()
                .iter()
                .any(|keyword| normalized.contains(keyword))
        })
        .collect();

    if normalized.contains('?') {
        intents.push(Intent::Question);
    }

    if token_count <= SHORT_PING_MAX_TOKENS {
        intents.push(Intent::ShortPing);
    }

    intents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_has_no_intents() {
        assert!(detect_intents("").is_empty());
        assert!(detect_intents("   \n\t").is_empty());
    }

    #[test]
    fn test_keyword_order_follows_table() {
        let intents = detect_intents("Thanks! Can we book a call? It's urgent");
        assert_eq!(
            intents,
            vec![
                Intent::Urgency,
                Intent::Scheduling,
                Intent::Gratitude,
                Intent::Question
            ]
        );
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let intents = detect_intents("ANY UPDATE on the Deliverables for the party planning");
        assert!(intents.contains(&Intent::FollowUp));
        assert!(intents.contains(&Intent::Delivery));
        assert!(intents.contains(&Intent::Social));
    }

    #[test]
    fn test_each_label_at_most_once() {
        let intents = detect_intents("hey hello hi good morning?? ??");
        assert_eq!(
            intents.iter().filter(|i| **i == Intent::Greeting).count(),
            1
        );
        assert_eq!(
            intents.iter().filter(|i| **i == Intent::Question).count(),
            1
        );
    }

    #[test]
    fn test_short_ping() {
        assert_eq!(detect_intents("you there?"), vec![Intent::Question, Intent::ShortPing]);
        assert!(!detect_intents("are you around at all").contains(&Intent::ShortPing));
        assert!(detect_intents("one   two\tthree").contains(&Intent::ShortPing));
    }

    #[test]
    fn test_substring_false_positive_preserved() {
        // "this" contains "hi"
        assert!(detect_intents("is this done yet or not").contains(&Intent::Greeting));
    }
}
