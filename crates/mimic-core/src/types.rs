// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the parser, profiler, router and responder.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One message recovered from an exported chat transcript.
///
/// Continuation lines that follow a header are folded into `content`
/// joined by `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Display name of the author as written in the export.
    pub sender: String,
    /// Date and time exactly as exported, e.g. `03/11/20, 7:35 pm`.
    pub timestamp_raw: String,
    /// Message body.
    pub content: String,
    /// True when the body is a media placeholder.
    pub is_media: bool,
}

/// Topic categories an input can resolve to.
///
/// `Chat` is never produced by the classifier. Hosts use it for free chat
/// and it shares the `Default` templates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greeting,
    Birthday,
    Music,
    Food,
    Movies,
    Funny,
    Memory,
    Question,
    Emotional,
    Plans,
    Compliment,
    Default,
    Chat,
}

/// A prior exchange: what was said to the participant and how they answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPair {
    pub context: String,
    pub response: String,
}

impl ContextPair {
    pub fn new(context: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            response: response.into(),
        }
    }
}

/// Which selection strategy produced a reply.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ResponseTier {
    /// A knowledge-store fact answered a question.
    Factual,
    /// The input matched a corpus context exactly or by containment.
    ExactMatch,
    /// The input shared a significant word with a corpus context.
    KeywordMatch,
    /// A past reply to a transcript message of the same topic.
    TopicMatch,
    /// Canned per-category template.
    Template,
}

/// A selected reply before styling, with its source tier for traceability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseCandidate {
    /// The tier's own output. Never empty.
    pub text: String,
    /// Tier that produced `text`.
    pub tier: ResponseTier,
    /// Optional celebratory closing line, shown as its own paragraph.
    pub closing: Option<String>,
}

impl ResponseCandidate {
    pub fn new(text: impl Into<String>, tier: ResponseTier) -> Self {
        Self {
            text: text.into(),
            tier,
            closing: None,
        }
    }

    /// Join the reply and the closing line (if any) with a blank line.
    pub fn compose(&self) -> String {
        match &self.closing {
            Some(closing) => format!("{}\n\n{closing}", self.text),
            None => self.text.clone(),
        }
    }
}
