// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Mimic conversation engine.
//!
//! Holds the types that flow between components (messages, categories,
//! response candidates), the shared error type and the injectable random
//! source used by the responder.

pub mod error;
pub mod random;
pub mod types;

pub use error::MimicError;
pub use random::{RandomSource, RngSource, choose};
pub use types::{Category, ContextPair, MessageRecord, ResponseCandidate, ResponseTier};
