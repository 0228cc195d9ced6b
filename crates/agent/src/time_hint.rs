//! Time-of-day hint detection

use autoreply_core::TimeSlot;

/// First slot (in table order) with a keyword in the message
///
/// At most one hint is produced; later slots are not considered once one matches.
pub fn detect_time_hint(message: &str) -> Option<TimeSlot> {
    let normalized = message.to_lowercase();
    TimeSlot::ALL.into_iter().find(|slot| {
        slot.keywords()
            .iter()
            .any(|keyword| normalized.contains(keyword))
    })
}
