// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of exported chat transcripts.
//!
//! An export is plain text, one message per `date, time - sender: text`
//! header line. Lines that do not look like a header continue the previous
//! message. Nothing in here fails: malformed input yields fewer records.

pub mod corpus;
pub mod parser;
pub mod timestamp;

pub use corpus::context_pairs;
pub use parser::{Transcript, parse, parse_messages};
pub use timestamp::parse_timestamp;
