// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Mimic integration tests.
//!
//! # Components
//!
//! - [`ScriptedRandom`] - random source that replays queued samples so every
//!   probabilistic branch can be forced
//! - [`fixtures`] - transcript text shared across crates

pub mod fixtures;
pub mod scripted;

pub use scripted::ScriptedRandom;
