// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mimic.toml` loading, validation and error reporting.
//!
//! Every section rejects unknown keys. Load failures come back as
//! [`ConfigError`] diagnostics that [`render_errors`] prints with the
//! offending line and a suggested spelling.
//!
//! ```no_run
//! use mimic_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("gap: {} minutes", config.memory.session_gap_minutes);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    DateOrder, MemoryConfig, MimicConfig, PersonaConfig, ProfileConfig, ResponderConfig,
    SessionConfig, StyleConfig, TranscriptConfig,
};

/// [`load_config`] followed by range validation.
pub fn load_and_validate() -> Result<MimicConfig, Vec<ConfigError>> {
    checked(loader::load_config(), existing_sources)
}

/// [`load_config_from_str`] followed by range validation.
pub fn load_and_validate_str(toml_content: &str) -> Result<MimicConfig, Vec<ConfigError>> {
    checked(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// [`load_config_from_path`] followed by range validation.
pub fn load_and_validate_path(path: &Path) -> Result<MimicConfig, Vec<ConfigError>> {
    checked(loader::load_config_from_path(path), || {
        read_source(path).into_iter().collect()
    })
}

/// Validate a loaded config, or convert the load error. `sources` is only
/// read on failure.
fn checked(
    loaded: Result<MimicConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<MimicConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => validation::validate_config(&config).map(|()| config),
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Text of every config file on the search path that exists.
fn existing_sources() -> Vec<(String, String)> {
    let sources: Vec<_> = loader::search_paths()
        .iter()
        .filter_map(|path| read_source(path))
        .collect();
    tracing::debug!(count = sources.len(), "read config files for diagnostics");
    sources
}

/// Named by absolute path so it matches the file figment reports.
fn read_source(path: &Path) -> Option<(String, String)> {
    let content = std::fs::read_to_string(path).ok()?;
    let name = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    Some((name.display().to_string(), content))
}
