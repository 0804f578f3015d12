// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Mimic configuration system.

use std::io::Write;
use std::path::Path;

use mimic_config::diagnostic::{ConfigError, suggest_key};
use mimic_config::model::{DateOrder, MimicConfig};
use mimic_config::{
    load_and_validate_path, load_and_validate_str, load_config_from_path, load_config_from_str,
};

/// Valid TOML with every section deserializes.
#[test]
fn valid_toml_deserializes_into_mimic_config() {
    let toml = r#"
[session]
user_name = "Avii"
participant = "Divija"
log_level = "debug"
seed = 42

[transcript]
date_order = "month_first"
media_marker = "<attached>"

[profile]
max_common_phrases = 10
abbreviation_threshold = 0.2

[memory]
session_gap_minutes = 45
min_excerpts = 3

[responder]
closing_probability = 0.0

[style]
emoji_probability = 1.0
starter_probability = 0.0

[persona]
path = "persona.toml"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.session.user_name.as_deref(), Some("Avii"));
    assert_eq!(config.session.participant.as_deref(), Some("Divija"));
    assert_eq!(config.session.log_level, "debug");
    assert_eq!(config.session.seed, Some(42));
    assert_eq!(config.transcript.date_order, DateOrder::MonthFirst);
    assert_eq!(config.transcript.media_marker, "<attached>");
    assert_eq!(config.profile.max_common_phrases, 10);
    assert_eq!(config.profile.abbreviation_threshold, 0.2);
    assert_eq!(config.profile.phrase_max_chars, 50);
    assert_eq!(config.memory.session_gap_minutes, 45);
    assert_eq!(config.memory.min_excerpts, 3);
    assert_eq!(config.responder.closing_probability, 0.0);
    assert_eq!(config.style.emoji_probability, 1.0);
    assert_eq!(config.style.starter_probability, 0.0);
    assert_eq!(config.style.double_exclaim_probability, 0.4);
    assert_eq!(config.persona.path.as_deref(), Some("persona.toml"));
    assert!(config.persona.knowledge_path.is_none());
}

/// Empty TOML yields the tuned defaults.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert!(config.session.user_name.is_none());
    assert_eq!(config.session.log_level, "info");
    assert_eq!(config.transcript.date_order, DateOrder::DayFirst);
    assert_eq!(config.transcript.media_marker, "<Media omitted>");
    assert_eq!(config.profile.short_message_chars, 5);
    assert_eq!(config.profile.max_common_phrases, 20);
    assert_eq!(config.profile.abbreviation_threshold, 0.15);
    assert_eq!(config.profile.omit_punctuation_threshold, 0.5);
    assert_eq!(config.memory.session_gap_minutes, 30);
    assert_eq!(config.memory.min_session_messages, 5);
    assert_eq!(config.memory.max_excerpts, 10);
    assert_eq!(config.responder.closing_probability, 0.15);
    assert_eq!(config.style.drop_punctuation_probability, 0.5);
    assert_eq!(config.style.starter_probability, 0.1);
}

/// Unknown key in a section is rejected.
#[test]
fn unknown_field_in_memory_produces_error() {
    let toml = r#"
[memory]
sesion_gap_minutes = 10
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("sesion_gap_minutes"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    assert!(load_config_from_str(toml).is_err());
}

/// Unknown key becomes an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_diagnostic_suggests_correction() {
    let toml = r#"
[memory]
sesion_gap_minutes = 10
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "sesion_gap_minutes");
            assert_eq!(suggestion.as_deref(), Some("session_gap_minutes"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Wrong value type becomes an InvalidType diagnostic.
#[test]
fn invalid_type_diagnostic() {
    let toml = r#"
[memory]
max_excerpts = "ten"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert!(
        matches!(&errors[0], ConfigError::InvalidType { key, .. } if key.contains("max_excerpts")),
        "got {errors:?}"
    );
}

/// Date order only accepts the two known spellings.
#[test]
fn unknown_date_order_rejected() {
    let toml = r#"
[transcript]
date_order = "year_first"
"#;

    assert!(load_and_validate_str(toml).is_err());
}

/// Semantic validation runs after a successful load.
#[test]
fn validation_errors_are_collected() {
    let toml = r#"
[style]
emoji_probability = 2.0
starter_probability = -1.0
"#;

    let errors = load_and_validate_str(toml).expect_err("out-of-range values");
    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. }))
    );
}

/// Dot-notation overrides behave like the MIMIC_* env mapping.
#[test]
fn dotted_override_sets_nested_key() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: MimicConfig = Figment::new()
        .merge(Serialized::defaults(MimicConfig::default()))
        .merge(Toml::string("[session]\nuser_name = \"from-toml\"\n"))
        .merge(("session.user_name", "from-env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.session.user_name.as_deref(), Some("from-env"));
}

/// `MIMIC_*` variables override the file, including fields whose names
/// contain another section's name.
#[test]
fn env_vars_override_file_values() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("mimic.toml", "[style]\nemoji_probability = 0.2\n")?;
        jail.set_env("MIMIC_STYLE_EMOJI_PROBABILITY", "0.9");
        jail.set_env("MIMIC_MEMORY_SESSION_GAP_MINUTES", "45");
        jail.set_env("MIMIC_MEMORY_MIN_SESSION_MESSAGES", "4");
        jail.set_env("MIMIC_SESSION_USER_NAME", "Avii");

        let config = load_config_from_path(Path::new("mimic.toml"))?;
        assert_eq!(config.style.emoji_probability, 0.9);
        assert_eq!(config.memory.session_gap_minutes, 45);
        assert_eq!(config.memory.min_session_messages, 4);
        assert_eq!(config.session.user_name.as_deref(), Some("Avii"));
        Ok(())
    });
}

/// An env var naming no known field is reported like an unknown file key.
#[test]
fn unknown_env_field_is_rejected() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("mimic.toml", "")?;
        jail.set_env("MIMIC_STYLE_EMOJI_CHANCE", "0.9");

        let errors = load_and_validate_path(Path::new("mimic.toml"))
            .expect_err("unknown env field");
        assert!(
            matches!(&errors[0], ConfigError::UnknownKey { key, .. } if key == "emoji_chance"),
            "got {errors:?}"
        );
        Ok(())
    });
}

/// Missing config files are silently skipped.
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: MimicConfig = Figment::new()
        .merge(Serialized::defaults(MimicConfig::default()))
        .merge(Toml::file("/nonexistent/path/mimic.toml"))
        .extract()
        .expect("missing file should be skipped");

    assert_eq!(config.memory.max_excerpts, 10);
}

/// An explicit config path is read and validated.
#[test]
fn load_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[session]\nseed = 7\n\n[memory]\nmin_excerpts = 2").expect("write");

    let config = load_and_validate_path(file.path()).expect("valid file");
    assert_eq!(config.session.seed, Some(7));
    assert_eq!(config.memory.min_excerpts, 2);
}

#[test]
fn suggest_key_for_style_typo() {
    let valid = &[
        "drop_punctuation_probability",
        "double_exclaim_probability",
        "emoji_probability",
        "starter_probability",
    ];
    assert_eq!(
        suggest_key("emoji_probabilty", valid),
        Some("emoji_probability".to_string())
    );
}

/// Diagnostics render through miette without panicking.
#[test]
fn diagnostics_render() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let errors = load_and_validate_str("[persona]\npth = \"x\"\n").expect_err("unknown key");
    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    let diagnostic: &dyn Diagnostic = &errors[0];
    handler
        .render_report(&mut buf, diagnostic)
        .expect("render should succeed");
    assert!(buf.contains("pth"));
}
