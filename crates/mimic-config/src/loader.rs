// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered figment loading for `mimic.toml`.
//!
//! A local `./mimic.toml` wins over the user's XDG config, which wins over
//! `/etc/mimic/mimic.toml`. `MIMIC_*` variables override all files.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MimicConfig;

/// Load from every standard location plus the environment.
pub fn load_config() -> Result<MimicConfig, figment::Error> {
    build_figment().extract()
}

/// Defaults overlaid with `toml_content` alone. The environment is ignored.
pub fn load_config_from_str(toml_content: &str) -> Result<MimicConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MimicConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Defaults, then the file at `path`, then the environment.
pub fn load_config_from_path(path: &Path) -> Result<MimicConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MimicConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Config files in merge order, lowest precedence first.
///
/// Missing files are skipped by figment, so every candidate is listed.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/mimic/mimic.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("mimic").join("mimic.toml"));
    }
    paths.push(PathBuf::from("mimic.toml"));
    paths
}

/// Defaults, then each file from [`search_paths`], then `MIMIC_*` variables.
pub fn build_figment() -> Figment {
    search_paths()
        .into_iter()
        .fold(
            Figment::from(Serialized::defaults(MimicConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Top-level tables a `MIMIC_*` variable can address.
const SECTIONS: &[&str] = &[
    "session",
    "transcript",
    "profile",
    "memory",
    "responder",
    "style",
    "persona",
];

/// `MIMIC_*` variables, with the section split off at the first `_`.
fn env_provider() -> Env {
    Env::prefixed("MIMIC_").map(|key| env_key(key.as_str()).into())
}

/// `MEMORY_SESSION_GAP_MINUTES` becomes `memory.session_gap_minutes`. Only a
/// leading section name is split off; field names keep their underscores.
fn env_key(raw: &str) -> String {
    let key = raw.to_ascii_lowercase();
    match key.split_once('_') {
        Some((section, field)) if SECTIONS.contains(&section) => format!("{section}.{field}"),
        _ => key,
    }
}
