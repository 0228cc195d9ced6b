//! Sample-phrase selection

use autoreply_core::Intent;

/// Pick one configured phrase, preferring one that overlaps the intents
///
/// A phrase qualifies when any of its lower-cased words is a substring of the
/// space-joined intent labels. The labels keep their wire casing, so a word
/// like "ping" never matches `shortPing`. Without a qualifying phrase the first
/// configured one is used; with no phrases at all there is no selection.
pub fn pick_sample_phrase<'a>(phrases: &'a [String], intents: &[Intent]) -> Option<&'a str> {
    let first = phrases.first()?;
    let labels = intents
        .iter()
        .map(Intent::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let targeted = phrases.iter().find(|phrase| {
        phrase
            .to_lowercase()
            .split_whitespace()
            .any(|word| labels.contains(word))
    });

    Some(targeted.unwrap_or(first).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(pick_sample_phrase(&[], &[Intent::Scheduling]), None);
    }

    #[test]
    fn test_relevance_over_order() {
        let list = phrases(&["let's grab coffee", "ask me any question here"]);
        assert_eq!(
            pick_sample_phrase(&list, &[Intent::Scheduling, Intent::Question]),
            Some("ask me any question here")
        );
    }

    #[test]
    fn test_falls_back_to_first() {
        let list = phrases(&["let's grab coffee", "happy to reschedule the call"]);
        // no word of either phrase occurs inside "scheduling"
        assert_eq!(
            pick_sample_phrase(&list, &[Intent::Scheduling]),
            Some("let's grab coffee")
        );
        assert_eq!(pick_sample_phrase(&list, &[]), Some("let's grab coffee"));
    }

    #[test]
    fn test_camel_case_labels_keep_their_casing() {
        let list = phrases(&["no worries", "quick PING back soon"]);
        assert_eq!(pick_sample_phrase(&list, &[Intent::ShortPing]), Some("no worries"));

        let list = phrases(&["let's grab coffee", "ping me later"]);
        assert_eq!(
            pick_sample_phrase(&list, &[Intent::Question, Intent::ShortPing]),
            Some("let's grab coffee")
        );

        // the lower-case head of a camelCase label still matches
        let list = phrases(&["sounds good", "Short and sweet"]);
        assert_eq!(
            pick_sample_phrase(&list, &[Intent::ShortPing]),
            Some("Short and sweet")
        );
    }
}
