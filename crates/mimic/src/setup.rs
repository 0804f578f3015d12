// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup: tracing, data files and the random source.

use std::path::Path;

use mimic_config::MimicConfig;
use mimic_core::{MimicError, RandomSource, RngSource};
use mimic_knowledge::KnowledgeStore;
use mimic_responder::{Engine, Persona};
use tracing::{debug, info};

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr so `ask` and `profile` output stays clean.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mimic={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the engine, loading persona and knowledge overrides named in
/// `[persona]`.
pub fn build_engine(config: MimicConfig) -> Result<Engine, MimicError> {
    let persona = match &config.persona.path {
        Some(path) => {
            info!(path = path.as_str(), "loading persona file");
            Persona::from_toml_str(&read_file(Path::new(path))?)?
        }
        None => Persona::builtin(),
    };

    let knowledge = match &config.persona.knowledge_path {
        Some(path) => {
            info!(path = path.as_str(), "loading knowledge file");
            KnowledgeStore::from_toml_str(&read_file(Path::new(path))?)?
        }
        None => KnowledgeStore::builtin(),
    };

    Ok(Engine::new(persona, knowledge, config))
}

/// Read a transcript export if one was given.
pub fn read_transcript(path: Option<&Path>) -> Result<Option<String>, MimicError> {
    path.map(read_file).transpose()
}

/// Seeded when a seed is configured, thread-local otherwise.
pub fn make_rng(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded random source");
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    }
}

fn read_file(path: &Path) -> Result<String, MimicError> {
    std::fs::read_to_string(path).map_err(|e| MimicError::io(path.display().to_string(), e))
}
