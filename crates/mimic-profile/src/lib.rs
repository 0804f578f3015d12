// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Statistical texting profile of one transcript participant.
//!
//! [`profile`] reduces a participant's messages to phrase buckets, emoji
//! counts, frequent phrases and punctuation habits. The responder uses the
//! result to restyle canned text.

pub mod emoji;
pub mod profiler;
pub mod types;

pub use emoji::{EMOJI_CATALOG, contains_emoji};
pub use profiler::profile;
pub use types::{PatternKind, PunctuationStyle, VoiceProfile};
