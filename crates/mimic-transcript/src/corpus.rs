// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prior exchanges mined from a transcript.

use mimic_core::{ContextPair, MessageRecord};
use tracing::debug;

/// Every text message by `participant` that directly answers a text message
/// from someone else becomes a `(context, response)` pair.
///
/// Media on either side breaks the pair.
pub fn context_pairs(messages: &[MessageRecord], participant: &str) -> Vec<ContextPair> {
    let pairs: Vec<ContextPair> = messages
        .windows(2)
        .filter_map(|window| {
            let (previous, current) = (&window[0], &window[1]);
            let answers = current.sender == participant
                && previous.sender != participant
                && !current.is_media
                && !previous.is_media;
            answers.then(|| ContextPair::new(&previous.content, &current.content))
        })
        .collect();

    debug!(participant, pairs = pairs.len(), "derived context pairs");
    pairs
}

#[cfg(test)]
mod tests {
    use mimic_test_utils::fixtures;
    use tracing_test::traced_test;

    use super::*;
    use crate::parse_messages;

    #[test]
    fn pairs_follow_turn_changes() {
        let messages = parse_messages(fixtures::FIRST_CHAT);
        let pairs = context_pairs(&messages, "Divija Joshi");

        assert_eq!(pairs[0], ContextPair::new("Its me yashasvi", "Oh hii"));
        // A second consecutive message from the same sender is not a reply.
        assert!(!pairs.iter().any(|p| p.response == "I didnt recognize ur voice"));
        assert!(pairs.iter().any(|p| p.context == "Mine" && p.response == "Woah"));
        assert_eq!(pairs.len(), 7);
    }

    #[test]
    fn media_breaks_pairs() {
        let raw = "1/1/21, 1:00 pm - A: <Media omitted>\n1/1/21, 1:01 pm - B: nice pic";
        let messages = parse_messages(raw);
        assert!(context_pairs(&messages, "B").is_empty());
    }

    #[test]
    fn unknown_participant_yields_nothing() {
        let messages = parse_messages(fixtures::FIRST_CHAT);
        assert!(context_pairs(&messages, "Nobody").is_empty());
        assert!(context_pairs(&[], "Nobody").is_empty());
    }

    #[traced_test]
    #[test]
    fn logs_pair_count() {
        let messages = parse_messages(fixtures::GREETING_PAIR);
        let pairs = context_pairs(&messages, "Divija Joshi");
        assert_eq!(pairs.len(), 1);
        assert!(logs_contain("derived context pairs"));
    }
}
