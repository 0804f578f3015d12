// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice profile data model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::emoji::catalog_rank;

/// Bucket a message can be sorted into. A message may land in several.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Greetings,
    Questions,
    Exclamations,
    Laughs,
    Agreements,
    Disagreements,
}

/// Dominant end-of-message punctuation habit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PunctuationStyle {
    OmitsEndPunctuation,
    MultipleExclamations,
    MultipleQuestions,
    #[default]
    Standard,
}

/// Aggregate texting habits of one participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceProfile {
    /// Messages per bucket, in transcript order.
    pub phrase_patterns: BTreeMap<PatternKind, Vec<String>>,
    /// Number of messages containing each catalog emoji.
    pub emoji_frequency: BTreeMap<String, u32>,
    /// Normalized repeated phrases, most frequent first.
    pub common_phrases: Vec<String>,
    /// Mean message length in characters, rounded.
    pub average_message_length: u32,
    pub uses_emojis: bool,
    pub uses_abbreviations: bool,
    pub punctuation_style: PunctuationStyle,
}

impl VoiceProfile {
    /// Messages recorded under `kind`, empty if none.
    pub fn patterns(&self, kind: PatternKind) -> &[String] {
        self.phrase_patterns
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Up to `n` emojis by descending frequency. Ties keep catalog order,
    /// glyphs outside the catalog sort after it.
    pub fn top_emojis(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<(&str, u32)> = self
            .emoji_frequency
            .iter()
            .map(|(emoji, count)| (emoji.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| rank_key(a.0).cmp(&rank_key(b.0)))
        });
        ranked.into_iter().take(n).map(|(emoji, _)| emoji).collect()
    }

    /// Whether any frequent phrase contains `word` as a whole word,
    /// ignoring case.
    pub fn has_phrase_word(&self, word: &str) -> bool {
        self.common_phrases.iter().any(|phrase| {
            phrase
                .split(|c: char| !c.is_alphanumeric())
                .any(|w| w.eq_ignore_ascii_case(word))
        })
    }
}

fn rank_key(emoji: &str) -> (usize, &str) {
    (catalog_rank(emoji).unwrap_or(usize::MAX), emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_emojis_breaks_ties_by_catalog() {
        let mut profile = VoiceProfile::default();
        profile.emoji_frequency.insert("❤️".into(), 2);
        profile.emoji_frequency.insert("😂".into(), 2);
        profile.emoji_frequency.insert("👍".into(), 5);
        profile.emoji_frequency.insert("🐧".into(), 2);
        assert_eq!(profile.top_emojis(3), vec!["👍", "😂", "❤️"]);
        assert_eq!(profile.top_emojis(10).len(), 4);
        assert_eq!(profile.top_emojis(10)[3], "🐧");
    }

    #[test]
    fn has_phrase_word_is_whole_word() {
        let profile = VoiceProfile {
            common_phrases: vec!["Nd whose".into(), "andy".into()],
            ..VoiceProfile::default()
        };
        assert!(profile.has_phrase_word("nd"));
        assert!(!profile.has_phrase_word("and"));
    }

    #[test]
    fn punctuation_style_names() {
        assert_eq!(
            PunctuationStyle::OmitsEndPunctuation.to_string(),
            "omits-end-punctuation"
        );
        assert_eq!(PunctuationStyle::default(), PunctuationStyle::Standard);
    }

    #[test]
    fn profile_serializes_pattern_keys() {
        let mut profile = VoiceProfile::default();
        profile
            .phrase_patterns
            .insert(PatternKind::Greetings, vec!["Oh hii".into()]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["phrase_patterns"]["greetings"][0], "Oh hii");
        assert_eq!(json["punctuation_style"], "standard");
        assert!(profile.patterns(PatternKind::Laughs).is_empty());
    }
}
