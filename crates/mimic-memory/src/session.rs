// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splitting a transcript into conversation sessions by inactivity.

use chrono::Duration;
use mimic_config::DateOrder;
use mimic_core::MessageRecord;
use mimic_transcript::parse_timestamp;

/// Split `messages` wherever two consecutive timestamps are more than
/// `gap_minutes` apart.
///
/// A pair with an unreadable timestamp on either side never splits.
pub fn segment_sessions(
    messages: &[MessageRecord],
    gap_minutes: i64,
    order: DateOrder,
) -> Vec<&[MessageRecord]> {
    if messages.is_empty() {
        return Vec::new();
    }

    let gap = Duration::minutes(gap_minutes);
    let times: Vec<_> = messages
        .iter()
        .map(|m| parse_timestamp(&m.timestamp_raw, order))
        .collect();

    let mut sessions = Vec::new();
    let mut start = 0;
    for i in 1..messages.len() {
        let split = match (times[i - 1], times[i]) {
            (Some(prev), Some(next)) => next - prev > gap,
            _ => false,
        };
        if split {
            sessions.push(&messages[start..i]);
            start = i;
        }
    }
    sessions.push(&messages[start..]);
    sessions
}

#[cfg(test)]
mod tests {
    use mimic_test_utils::fixtures;
    use mimic_transcript::parse_messages;

    use super::*;

    #[test]
    fn day_gap_splits() {
        let messages = parse_messages(fixtures::TWO_SESSIONS);
        let sessions = segment_sessions(&messages, 30, DateOrder::DayFirst);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].len(), 5);
        assert_eq!(sessions[1].len(), 6);
    }

    #[test]
    fn exactly_the_gap_stays_together() {
        let raw = "1/1/21, 1:00 pm - A: one\n1/1/21, 1:30 pm - B: two\n1/1/21, 2:01 pm - A: three";
        let messages = parse_messages(raw);
        let sessions = segment_sessions(&messages, 30, DateOrder::DayFirst);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].len(), 2);
    }

    #[test]
    fn unreadable_timestamp_fails_open() {
        let raw = "1/1/21, 1:00 pm - A: one\n31/2/21, 9:00 pm - B: two\n5/3/21, 2:00 pm - A: three";
        let messages = parse_messages(raw);
        assert_eq!(messages.len(), 3);
        let sessions = segment_sessions(&messages, 30, DateOrder::DayFirst);
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn empty_input_has_no_sessions() {
        assert!(segment_sessions(&[], 30, DateOrder::DayFirst).is_empty());
    }
}
