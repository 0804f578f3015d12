// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Probabilities and thresholds must lie in `[0, 1]`, sizes must be positive
//! and the log level must be one `tracing` understands.

use crate::diagnostic::ConfigError;
use crate::model::MimicConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &MimicConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.session.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "session.log_level `{}` is not one of {}",
                config.session.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for (key, value) in [
        ("session.user_name", &config.session.user_name),
        ("session.participant", &config.session.participant),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty when set"),
            });
        }
    }

    if config.transcript.media_marker.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "transcript.media_marker must not be empty".to_string(),
        });
    }

    let profile = &config.profile;
    let style = &config.style;
    let unit_values = [
        ("profile.abbreviation_threshold", profile.abbreviation_threshold),
        (
            "profile.omit_punctuation_threshold",
            profile.omit_punctuation_threshold,
        ),
        ("profile.multi_exclaim_threshold", profile.multi_exclaim_threshold),
        (
            "profile.multi_question_threshold",
            profile.multi_question_threshold,
        ),
        (
            "responder.closing_probability",
            config.responder.closing_probability,
        ),
        (
            "style.drop_punctuation_probability",
            style.drop_punctuation_probability,
        ),
        (
            "style.double_exclaim_probability",
            style.double_exclaim_probability,
        ),
        ("style.emoji_probability", style.emoji_probability),
        ("style.starter_probability", style.starter_probability),
    ];
    for (key, value) in unit_values {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be between 0 and 1, got {value}"),
            });
        }
    }

    if profile.phrase_max_chars <= profile.short_message_chars {
        errors.push(ConfigError::Validation {
            message: format!(
                "profile.phrase_max_chars ({}) must exceed profile.short_message_chars ({})",
                profile.phrase_max_chars, profile.short_message_chars
            ),
        });
    }

    let memory = &config.memory;
    if memory.session_gap_minutes < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "memory.session_gap_minutes must be at least 1, got {}",
                memory.session_gap_minutes
            ),
        });
    }
    for (key, value) in [
        ("profile.max_common_phrases", profile.max_common_phrases),
        ("memory.min_session_messages", memory.min_session_messages),
        ("memory.max_excerpts", memory.max_excerpts),
    ] {
        if value == 0 {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be at least 1"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&MimicConfig::default()).is_ok());
    }

    #[test]
    fn unknown_log_level_fails() {
        let mut config = MimicConfig::default();
        config.session.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("session.log_level"));
    }

    #[test]
    fn probability_out_of_range_fails() {
        let mut config = MimicConfig::default();
        config.style.emoji_probability = 1.5;
        config.responder.closing_probability = -0.1;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.to_string().contains("style.emoji_probability")));
        assert!(
            errors
                .iter()
                .any(|e| e.to_string().contains("responder.closing_probability"))
        );
    }

    #[test]
    fn zero_sizes_fail() {
        let mut config = MimicConfig::default();
        config.memory.max_excerpts = 0;
        config.memory.session_gap_minutes = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn blank_participant_fails() {
        let mut config = MimicConfig::default();
        config.session.participant = Some("  ".to_string());
        assert!(validate_config(&config).is_err());
    }
}
