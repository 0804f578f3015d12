// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topic routing for user input.
//!
//! Maps free text to a [`Category`](mimic_core::Category) with an ordered
//! table of keyword rules. No model, no network: the first rule that fires
//! decides.

pub mod classifier;

pub use classifier::{Predicate, Rule, TopicClassifier, classify, is_question};
