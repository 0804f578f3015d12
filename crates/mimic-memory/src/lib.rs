// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memory excerpts: lines worth bringing up again, pulled from the
//! conversations in a transcript that look nostalgic or event-related.

pub mod extractor;
pub mod session;

pub use extractor::{MemoryExcerpt, extract_memories, pad_memories};
pub use session::segment_sessions;
