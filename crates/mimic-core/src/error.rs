// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Mimic conversation engine.
//!
//! The per-turn pipeline (classify, select, stylize) never fails. These
//! errors only surface while loading data at startup: configuration,
//! persona files and knowledge files.

use thiserror::Error;

/// The primary error type used across Mimic crates.
#[derive(Debug, Error)]
pub enum MimicError {
    /// Configuration errors (invalid TOML, out-of-range values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A persona data file could not be parsed.
    #[error("persona error: {message}")]
    Persona {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A knowledge data file could not be parsed.
    #[error("knowledge error: {message}")]
    Knowledge {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reading an input file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MimicError {
    /// Wrap a file read failure with the offending path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        MimicError::Io {
            path: path.into(),
            source,
        }
    }
}
