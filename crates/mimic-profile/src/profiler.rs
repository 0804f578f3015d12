// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds a [`VoiceProfile`] from parsed messages.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use mimic_config::ProfileConfig;
use mimic_core::MessageRecord;
use regex::Regex;
use tracing::debug;

use crate::emoji::EMOJI_CATALOG;
use crate::types::{PatternKind, PunctuationStyle, VoiceProfile};

/// Bucket tests, applied independently to each message.
static PATTERN_RULES: LazyLock<Vec<(PatternKind, Regex)>> = LazyLock::new(|| {
    vec![
        (
            PatternKind::Greetings,
            Regex::new(r"(?i)^(hi|hey|hello|hii|heyy|oh\s*hi|hola|namaste)").unwrap(),
        ),
        (PatternKind::Questions, Regex::new(r"\?").unwrap()),
        (PatternKind::Exclamations, Regex::new(r"!").unwrap()),
        (
            PatternKind::Laughs,
            Regex::new(r"(?i)haha|lol|lmao|rofl|😂|🤣").unwrap(),
        ),
        (
            PatternKind::Agreements,
            Regex::new(r"(?i)^(yes|yeah|yep|sure|okay|ok|definitely|absolutely|correct|right)")
                .unwrap(),
        ),
        (
            PatternKind::Disagreements,
            Regex::new(r"(?i)^(no|nope|nah|not really|i don't think|i disagree)").unwrap(),
        ),
    ]
});

static ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(u|r|ur|y|idk|lol|lmao|omg|brb|btw|tbh|imo|rn|af|lmk|hmu|smh|ily|thx|thnx|np|ofc|bc|cuz|b4|pls|plz|tht)\b",
    )
    .unwrap()
});

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Profile the non-media messages `participant` sent.
///
/// An empty selection gives a zeroed profile with standard punctuation.
pub fn profile(
    messages: &[MessageRecord],
    participant: &str,
    config: &ProfileConfig,
) -> VoiceProfile {
    let texts: Vec<&str> = messages
        .iter()
        .filter(|m| m.sender == participant && !m.is_media)
        .map(|m| m.content.as_str())
        .collect();

    let emoji_frequency = emoji_frequency(&texts);
    let profile = VoiceProfile {
        phrase_patterns: phrase_patterns(&texts),
        uses_emojis: !emoji_frequency.is_empty(),
        emoji_frequency,
        common_phrases: common_phrases(&texts, config),
        average_message_length: average_length(&texts),
        uses_abbreviations: uses_abbreviations(&texts, config.abbreviation_threshold),
        punctuation_style: punctuation_style(&texts, config),
    };

    debug!(
        participant,
        messages = texts.len(),
        phrases = profile.common_phrases.len(),
        emojis = profile.emoji_frequency.len(),
        style = %profile.punctuation_style,
        "built voice profile"
    );
    profile
}

fn phrase_patterns(texts: &[&str]) -> BTreeMap<PatternKind, Vec<String>> {
    let mut buckets: BTreeMap<PatternKind, Vec<String>> = BTreeMap::new();
    for text in texts {
        for (kind, pattern) in PATTERN_RULES.iter() {
            if pattern.is_match(text) {
                buckets.entry(*kind).or_default().push((*text).to_string());
            }
        }
    }
    buckets
}

/// One count per message per glyph: repeats inside a message are not added.
fn emoji_frequency(texts: &[&str]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for text in texts {
        for emoji in EMOJI_CATALOG {
            if text.contains(emoji) {
                *counts.entry((*emoji).to_string()).or_insert(0) += 1;
            }
        }
    }
    counts
}

fn is_phrase_candidate(text: &str, config: &ProfileConfig) -> bool {
    let len = text.chars().count();
    let in_band = len >= config.short_message_chars && len < config.phrase_max_chars;
    let short_words = text.split_whitespace().count() <= 2 && len > 2;
    in_band || short_words
}

fn common_phrases(texts: &[&str], config: &ProfileConfig) -> Vec<String> {
    // Insertion order doubles as the first-seen tiebreak.
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for text in texts.iter().filter(|t| is_phrase_candidate(t, config)) {
        let normalized = NON_WORD.replace_all(text, "").to_lowercase().trim().to_string();
        if normalized.is_empty() {
            continue;
        }
        let count = counts.entry(normalized.clone()).or_insert(0);
        if *count == 0 {
            order.push(normalized);
        }
        *count += 1;
    }

    let mut repeated: Vec<(String, u32)> = order
        .into_iter()
        .filter_map(|phrase| {
            let count = counts.get(&phrase).copied().unwrap_or(0);
            (count > 1).then_some((phrase, count))
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    repeated.sort_by(|a, b| b.1.cmp(&a.1));
    repeated
        .into_iter()
        .take(config.max_common_phrases)
        .map(|(phrase, _)| phrase)
        .collect()
}

fn average_length(texts: &[&str]) -> u32 {
    if texts.is_empty() {
        return 0;
    }
    let total: usize = texts.iter().map(|t| t.chars().count()).sum();
    (total as f64 / texts.len() as f64).round() as u32
}

fn uses_abbreviations(texts: &[&str], threshold: f64) -> bool {
    if texts.is_empty() {
        return false;
    }
    let hits = texts.iter().filter(|t| ABBREVIATION.is_match(t)).count();
    hits as f64 > texts.len() as f64 * threshold
}

fn punctuation_style(texts: &[&str], config: &ProfileConfig) -> PunctuationStyle {
    let considered: Vec<&str> = texts
        .iter()
        .copied()
        .filter(|t| t.chars().count() >= config.short_message_chars)
        .collect();
    if considered.is_empty() {
        return PunctuationStyle::Standard;
    }

    let total = considered.len() as f64;
    let fraction = |test: fn(&str) -> bool| considered.iter().filter(|t| test(t)).count() as f64 / total;

    let omits = fraction(|t| !t.trim_end().ends_with(['.', '!', '?']));
    let multi_exclaim = fraction(|t| t.contains("!!"));
    let multi_question = fraction(|t| t.contains("??"));

    if omits > config.omit_punctuation_threshold {
        PunctuationStyle::OmitsEndPunctuation
    } else if multi_exclaim > config.multi_exclaim_threshold {
        PunctuationStyle::MultipleExclamations
    } else if multi_question > config.multi_question_threshold {
        PunctuationStyle::MultipleQuestions
    } else {
        PunctuationStyle::Standard
    }
}
