// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns figment load failures into miette diagnostics.
//!
//! A misspelled key such as `sesion_gap_minutes` is reported against the line
//! it appears on, together with the closest accepted key.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use figment::error::Kind;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler score a candidate must beat to be offered as a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A config file name paired with its text, used to label diagnostics.
type SourceFile = (String, String);

/// Every way loading `mimic.toml` can fail.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(mimic::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        /// Closest accepted key, when one is close enough.
        suggestion: Option<String>,
        /// Accepted keys for the section, comma separated.
        valid_keys: String,
        #[label("not a recognized key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(mimic::config::invalid_type), help("this key takes {expected}"))]
    InvalidType {
        /// Dotted path, e.g. `memory.max_excerpts`.
        key: String,
        detail: String,
        expected: String,
        #[label("wrong type")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(mimic::config::missing_key),
        help("set `{key}` in mimic.toml")
    )]
    MissingKey { key: String },

    /// Parsed fine but the value is out of range.
    #[error("validation error: {message}")]
    #[diagnostic(code(mimic::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(mimic::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    let listing = format!("accepted keys: {valid_keys}");
    match suggestion {
        Some(key) => format!("did you mean `{key}`? {listing}"),
        None => listing,
    }
}

/// Map every error inside `err` to a [`ConfigError`].
///
/// `toml_sources` holds the files that fed the figment so unknown keys can
/// be pointed at.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[SourceFile],
) -> Vec<ConfigError> {
    err.into_iter()
        .map(|error| convert(&error, toml_sources))
        .collect()
}

fn convert(error: &figment::Error, toml_sources: &[SourceFile]) -> ConfigError {
    match &error.kind {
        Kind::UnknownField(field, accepted) => {
            let (span, src) = locate(error, field, toml_sources).unzip();
            ConfigError::UnknownKey {
                key: field.clone(),
                suggestion: suggest_key(field, accepted),
                valid_keys: accepted.join(", "),
                span,
                src,
            }
        }
        Kind::InvalidType(found, expected) => ConfigError::InvalidType {
            key: error.path.join("."),
            detail: format!("found {found}, expected {expected}"),
            expected: expected.clone(),
            span: None,
            src: None,
        },
        Kind::MissingField(field) => ConfigError::MissingKey {
            key: field.to_string(),
        },
        _ => ConfigError::Other(error.to_string()),
    }
}

/// Span and named source for `field`, when its file is known and the key
/// can be found in it.
fn locate(
    error: &figment::Error,
    field: &str,
    toml_sources: &[SourceFile],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let origin = error.metadata.as_ref().and_then(|m| m.source.as_ref());
    let (name, content) = match origin {
        Some(figment::Source::File(path)) => {
            let path = path.display().to_string();
            toml_sources.iter().find(|(name, _)| *name == path)?
        }
        Some(figment::Source::Custom(label)) => {
            toml_sources.iter().find(|(name, _)| name == label)?
        }
        // String providers have no file; only guess when there is one candidate.
        _ => match toml_sources {
            [only] => only,
            _ => return None,
        },
    };

    let offset = find_key_offset(content, &error.path, field)?;
    Some((
        SourceSpan::new(offset.into(), field.len()),
        NamedSource::new(name, content.clone()),
    ))
}

/// Byte offset of the line that assigns `field`, inside the table named by
/// the first element of `path` (or the top level when `path` is empty).
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let wanted = path.first().map(String::as_str);
    let mut table: Option<&str> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let body = line.trim_start();
        if let Some(header) = body.strip_prefix('[') {
            table = header.split(']').next().map(str::trim);
            continue;
        }
        if table != wanted {
            continue;
        }

        let assigns_field = body
            .strip_prefix(field)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if assigns_field {
            return Some(start + (line.len() - body.len()));
        }
    }

    None
}

/// The accepted key most similar to `unknown`, if any clears the threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Print each diagnostic to stderr with miette's graphical renderer.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut report = String::new();
        match handler.render_report(&mut report, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{report}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}
