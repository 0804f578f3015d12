// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented transcript parser.

use std::sync::LazyLock;

use mimic_config::TranscriptConfig;
use mimic_core::MessageRecord;
use regex::Regex;
use tracing::debug;

/// `<date>, <time> - <sender>: <content>`. Time may carry seconds and an
/// am/pm marker separated by a space, a no-break space or a narrow no-break
/// space.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,2}/\d{1,2}/(?:\d{4}|\d{2}),\s\d{1,2}:\d{2}(?::\d{2})?(?:[ \u{a0}\u{202f}]?[aApP][mM])?)\s-\s([^:]+):\s(.+)$",
    )
    .unwrap()
});

/// Result of parsing one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Records in export order.
    pub messages: Vec<MessageRecord>,
    /// First sender that is not the known user, or the first sender at all
    /// when no user was given.
    pub counterpart: Option<String>,
}

impl Transcript {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Distinct senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for message in &self.messages {
            if !seen.contains(&message.sender.as_str()) {
                seen.push(&message.sender);
            }
        }
        seen
    }
}

/// Parse an export with default settings and no known user.
pub fn parse_messages(raw: &str) -> Vec<MessageRecord> {
    parse(raw, None, &TranscriptConfig::default()).messages
}

/// Parse an export into records and find the counterpart of `known_user`.
pub fn parse(raw: &str, known_user: Option<&str>, config: &TranscriptConfig) -> Transcript {
    let mut transcript = Transcript::default();
    let mut orphans = 0usize;

    for line in raw.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(caps) = HEADER.captures(line) {
            let sender = caps[2].trim().to_string();
            let content = caps[3].to_string();

            if transcript.counterpart.is_none() && known_user != Some(sender.as_str()) {
                transcript.counterpart = Some(sender.clone());
            }

            transcript.messages.push(MessageRecord {
                is_media: content.contains(config.media_marker.as_str()),
                sender,
                timestamp_raw: caps[1].to_string(),
                content,
            });
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        match transcript.messages.last_mut() {
            Some(last) => {
                last.content.push('\n');
                last.content.push_str(line);
            }
            None => orphans += 1,
        }
    }

    debug!(
        records = transcript.messages.len(),
        skipped_lines = orphans,
        counterpart = transcript.counterpart.as_deref().unwrap_or("-"),
        "parsed transcript"
    );
    transcript
}

#[cfg(test)]
mod tests {
    use mimic_test_utils::fixtures;

    use super::*;

    #[test]
    fn header_and_continuation_fold_into_one_record() {
        let raw = "03/11/20, 7:35 pm - Avii: first line\nsecond line";
        let messages = parse_messages(raw);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "first line\nsecond line");
        assert_eq!(messages[0].sender, "Avii");
        assert_eq!(messages[0].timestamp_raw, "03/11/20, 7:35 pm");
        assert!(!messages[0].is_media);
    }

    #[test]
    fn blank_continuation_lines_are_skipped() {
        let raw = "03/11/20, 7:35 pm - Avii: hi\n   \n\nthere";
        let messages = parse_messages(raw);
        assert_eq!(messages[0].content, "hi\nthere");
    }

    #[test]
    fn leading_notice_is_ignored() {
        let messages = parse_messages(fixtures::FIRST_CHAT);
        assert_eq!(messages.len(), 19);
        assert_eq!(messages[0].sender, "Avii");
        assert!(messages[0].is_media);
        assert!(messages[1].is_media);
        assert!(!messages[2].is_media);
    }

    #[test]
    fn empty_and_malformed_input_yield_nothing() {
        assert!(parse_messages("").is_empty());
        assert!(parse_messages("just some words\nno headers here").is_empty());
    }

    #[test]
    fn counterpart_is_first_other_sender() {
        let config = TranscriptConfig::default();
        let transcript = parse(fixtures::FIRST_CHAT, Some("Avii"), &config);
        assert_eq!(transcript.counterpart.as_deref(), Some("Divija Joshi"));

        let transcript = parse(fixtures::FIRST_CHAT, None, &config);
        assert_eq!(transcript.counterpart.as_deref(), Some("Avii"));
        assert_eq!(transcript.senders(), vec!["Avii", "Divija Joshi"]);
    }

    #[test]
    fn counterpart_absent_when_only_user_speaks() {
        let raw = "03/11/20, 7:35 pm - Avii: hello?\n03/11/20, 7:36 pm - Avii: anyone";
        let transcript = parse(raw, Some("Avii"), &TranscriptConfig::default());
        assert!(transcript.counterpart.is_none());
        assert_eq!(transcript.messages.len(), 2);
    }

    #[test]
    fn accepts_crlf_seconds_and_uppercase_meridiem() {
        let raw = "1/2/2021, 10:05:33 PM - Sam: late\r\n1/2/2021, 22:06 - Sam: later\r\n";
        let messages = parse_messages(raw);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].timestamp_raw, "1/2/2021, 10:05:33 PM");
        assert_eq!(messages[0].content, "late");
        assert_eq!(messages[1].timestamp_raw, "1/2/2021, 22:06");
    }

    #[test]
    fn narrow_no_break_space_before_meridiem() {
        let raw = "03/11/20, 7:35\u{202f}pm - Avii: hey";
        let messages = parse_messages(raw);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hey");
    }

    #[test]
    fn custom_media_marker() {
        let config = TranscriptConfig {
            media_marker: "<attached:".to_string(),
            ..TranscriptConfig::default()
        };
        let raw = "03/11/20, 7:35 pm - Avii: <attached: photo.jpg>";
        let transcript = parse(raw, None, &config);
        assert!(transcript.messages[0].is_media);
    }

    #[test]
    fn colon_in_content_stays_in_content() {
        let raw = "03/11/20, 7:35 pm - Avii: time: now";
        let messages = parse_messages(raw);
        assert_eq!(messages[0].sender, "Avii");
        assert_eq!(messages[0].content, "time: now");
    }
}
