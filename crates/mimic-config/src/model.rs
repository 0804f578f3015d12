// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Mimic conversation engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Mimic configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to the values the engine was tuned with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MimicConfig {
    /// Who is who in the transcript, logging and reproducibility.
    #[serde(default)]
    pub session: SessionConfig,

    /// Transcript parsing settings.
    #[serde(default)]
    pub transcript: TranscriptConfig,

    /// Voice profiler thresholds.
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Memory extractor settings.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Response selector settings.
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Style transform probabilities.
    #[serde(default)]
    pub style: StyleConfig,

    /// Optional persona and knowledge data files.
    #[serde(default)]
    pub persona: PersonaConfig,
}

/// Session identity and runtime settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// The transcript owner (the person chatting with the bot). The first
    /// other sender becomes the profiled participant unless `participant`
    /// is set.
    #[serde(default)]
    pub user_name: Option<String>,

    /// Sender name whose voice is profiled.
    #[serde(default)]
    pub participant: Option<String>,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Fixed seed for reproducible replies. `None` uses a thread-local RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_name: None,
            participant: None,
            log_level: default_log_level(),
            seed: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Field order of the date part of a transcript timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `dd/mm/yy`, the usual export format outside the US.
    #[default]
    DayFirst,
    /// `mm/dd/yy`.
    MonthFirst,
}

/// Transcript parsing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptConfig {
    /// How to read the date part of timestamps.
    #[serde(default)]
    pub date_order: DateOrder,

    /// Substring that marks a media placeholder message.
    #[serde(default = "default_media_marker")]
    pub media_marker: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::default(),
            media_marker: default_media_marker(),
        }
    }
}

fn default_media_marker() -> String {
    "<Media omitted>".to_string()
}

/// Voice profiler thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Messages shorter than this are skipped by punctuation analysis and
    /// are not phrase candidates unless they are one or two words.
    #[serde(default = "default_short_message_chars")]
    pub short_message_chars: usize,

    /// Messages at least this long are never phrase candidates.
    #[serde(default = "default_phrase_max_chars")]
    pub phrase_max_chars: usize,

    /// How many common phrases to keep.
    #[serde(default = "default_max_common_phrases")]
    pub max_common_phrases: usize,

    /// Fraction of messages with abbreviations above which the profile
    /// counts as abbreviation-heavy.
    #[serde(default = "default_abbreviation_threshold")]
    pub abbreviation_threshold: f64,

    /// Fraction of messages without end punctuation above which the style
    /// is "omits end punctuation".
    #[serde(default = "default_omit_punctuation_threshold")]
    pub omit_punctuation_threshold: f64,

    /// Fraction of messages containing `!!` above which the style is
    /// "multiple exclamations".
    #[serde(default = "default_multi_mark_threshold")]
    pub multi_exclaim_threshold: f64,

    /// Fraction of messages containing `??` above which the style is
    /// "multiple questions".
    #[serde(default = "default_multi_mark_threshold")]
    pub multi_question_threshold: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            short_message_chars: default_short_message_chars(),
            phrase_max_chars: default_phrase_max_chars(),
            max_common_phrases: default_max_common_phrases(),
            abbreviation_threshold: default_abbreviation_threshold(),
            omit_punctuation_threshold: default_omit_punctuation_threshold(),
            multi_exclaim_threshold: default_multi_mark_threshold(),
            multi_question_threshold: default_multi_mark_threshold(),
        }
    }
}

fn default_short_message_chars() -> usize {
    5
}

fn default_phrase_max_chars() -> usize {
    50
}

fn default_max_common_phrases() -> usize {
    20
}

fn default_abbreviation_threshold() -> f64 {
    0.15
}

fn default_omit_punctuation_threshold() -> f64 {
    0.5
}

fn default_multi_mark_threshold() -> f64 {
    0.3
}

/// Memory extractor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Inactivity gap (minutes) that starts a new conversation session.
    #[serde(default = "default_session_gap_minutes")]
    pub session_gap_minutes: i64,

    /// Sessions with fewer messages are ignored.
    #[serde(default = "default_min_session_messages")]
    pub min_session_messages: usize,

    /// Maximum excerpts returned per transcript.
    #[serde(default = "default_max_excerpts")]
    pub max_excerpts: usize,

    /// Below this many excerpts the session pads with fallback memories.
    #[serde(default = "default_min_excerpts")]
    pub min_excerpts: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            session_gap_minutes: default_session_gap_minutes(),
            min_session_messages: default_min_session_messages(),
            max_excerpts: default_max_excerpts(),
            min_excerpts: default_min_excerpts(),
        }
    }
}

fn default_session_gap_minutes() -> i64 {
    30
}

fn default_min_session_messages() -> usize {
    5
}

fn default_max_excerpts() -> usize {
    10
}

fn default_min_excerpts() -> usize {
    5
}

/// Response selector configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    /// Probability of attaching a celebratory closing line to a reply.
    #[serde(default = "default_closing_probability")]
    pub closing_probability: f64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            closing_probability: default_closing_probability(),
        }
    }
}

fn default_closing_probability() -> f64 {
    0.15
}

/// Style transform probabilities. Each applies to one step.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Strip a trailing `.!?` when the profile omits end punctuation.
    #[serde(default = "default_half")]
    pub drop_punctuation_probability: f64,

    /// Turn the first `!` into `!!`.
    #[serde(default = "default_forty_percent")]
    pub double_exclaim_probability: f64,

    /// Append a palette emoji to emoji-free text.
    #[serde(default = "default_forty_percent")]
    pub emoji_probability: f64,

    /// Prepend a starter phrase.
    #[serde(default = "default_starter_probability")]
    pub starter_probability: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            drop_punctuation_probability: default_half(),
            double_exclaim_probability: default_forty_percent(),
            emoji_probability: default_forty_percent(),
            starter_probability: default_starter_probability(),
        }
    }
}

fn default_half() -> f64 {
    0.5
}

fn default_forty_percent() -> f64 {
    0.4
}

fn default_starter_probability() -> f64 {
    0.1
}

/// Data file locations. Unset paths use the built-in data.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PersonaConfig {
    /// TOML persona file overriding built-in templates and defaults.
    #[serde(default)]
    pub path: Option<String>,

    /// TOML knowledge file replacing the built-in facts.
    #[serde(default)]
    pub knowledge_path: Option<String>,
}
