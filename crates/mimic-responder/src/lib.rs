// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply generation for Mimic.
//!
//! [`Engine`] builds a [`Session`] from an optional transcript, then answers
//! each turn by classifying the input, selecting a reply through the tiers in
//! [`selector`] and rewriting it in the participant's voice with [`style`].

pub mod engine;
pub mod persona;
pub mod selector;
pub mod session;
pub mod style;

pub use engine::{Engine, Reply};
pub use persona::{LAST_RESORT_LINE, Persona};
pub use selector::{ResponseSelector, SelectionContext};
pub use session::{ProfileSource, Session, TopicResponses};
pub use style::{Stylist, stylize};
