// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flags nostalgic or event-related sessions and keeps one line from each.

use std::sync::LazyLock;

use mimic_config::{DateOrder, MemoryConfig};
use mimic_core::MessageRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::session::segment_sessions;

/// Session text worth remembering: looking back, or an occasion.
static MEMORY_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"(?i)remember|remember when|that time|it was fun|we should|we could|that was|never forget",
        )
        .unwrap(),
        Regex::new(r"(?i)miss|trip|vacation|visit|party|celebration|birthday|holiday|event")
            .unwrap(),
    ]
});

/// A participant line taken from a flagged session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryExcerpt {
    pub content: String,
    /// Position of the source session among all sessions.
    pub session_index: usize,
}

/// Pull up to `config.max_excerpts` memory lines spoken by `participant`,
/// earliest session first.
pub fn extract_memories(
    messages: &[MessageRecord],
    participant: &str,
    config: &MemoryConfig,
    order: DateOrder,
) -> Vec<MemoryExcerpt> {
    let sessions = segment_sessions(messages, config.session_gap_minutes, order);
    let total = sessions.len();

    let excerpts: Vec<MemoryExcerpt> = sessions
        .into_iter()
        .enumerate()
        .filter(|(_, session)| session.len() >= config.min_session_messages)
        .filter(|(_, session)| is_memorable(session))
        .filter_map(|(session_index, session)| {
            let lines: Vec<&MessageRecord> = session
                .iter()
                .filter(|m| m.sender == participant && !m.is_media)
                .collect();
            lines.get(lines.len() / 2).map(|m| MemoryExcerpt {
                content: m.content.clone(),
                session_index,
            })
        })
        .take(config.max_excerpts)
        .collect();

    debug!(
        participant,
        sessions = total,
        excerpts = excerpts.len(),
        "extracted memories"
    );
    excerpts
}

fn is_memorable(session: &[MessageRecord]) -> bool {
    let joined = session
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    MEMORY_MARKERS.iter().any(|re| re.is_match(&joined))
}

/// Memory lines for a session: the excerpts, plus every fallback when
/// fewer than `min` excerpts were found.
pub fn pad_memories(excerpts: &[MemoryExcerpt], fallbacks: &[String], min: usize) -> Vec<String> {
    let mut memories: Vec<String> = excerpts.iter().map(|e| e.content.clone()).collect();
    if memories.len() < min {
        memories.extend(fallbacks.iter().cloned());
    }
    memories
}
