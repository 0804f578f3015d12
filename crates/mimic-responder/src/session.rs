// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-conversation state, fixed once built.

use std::collections::BTreeMap;

use mimic_core::{Category, ContextPair};
use mimic_profile::VoiceProfile;
use mimic_router::TopicClassifier;
use serde::Serialize;
use strum::Display;

use crate::selector::SelectionContext;

/// Where a session's voice profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProfileSource {
    /// Persona defaults; no usable transcript.
    BuiltIn,
    /// Derived from the participant's transcript messages.
    Transcript,
}

/// Corpus responses bucketed by the category of the message they answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicResponses(BTreeMap<Category, Vec<String>>);

impl TopicResponses {
    /// Classify each context and keep its response. Blank responses are
    /// dropped.
    pub fn from_corpus(corpus: &[ContextPair], classifier: &TopicClassifier) -> Self {
        let mut buckets: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        for pair in corpus.iter().filter(|p| !p.response.trim().is_empty()) {
            buckets
                .entry(classifier.classify(&pair.context))
                .or_default()
                .push(pair.response.clone());
        }
        Self(buckets)
    }

    /// Responses for `category`. `Chat` reads the `Default` bucket.
    pub fn for_category(&self, category: Category) -> &[String] {
        let category = match category {
            Category::Chat => Category::Default,
            other => other,
        };
        self.0.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    participant: Option<String>,
    profile: VoiceProfile,
    memories: Vec<String>,
    corpus: Vec<ContextPair>,
    #[serde(skip)]
    topics: TopicResponses,
    source: ProfileSource,
}

impl Session {
    pub(crate) fn new(
        participant: Option<String>,
        profile: VoiceProfile,
        memories: Vec<String>,
        corpus: Vec<ContextPair>,
        source: ProfileSource,
    ) -> Self {
        let topics = TopicResponses::from_corpus(&corpus, &TopicClassifier::new());
        Self {
            participant,
            profile,
            memories,
            corpus,
            topics,
            source,
        }
    }

    /// Replace the context/response corpus with one the host supplies.
    /// Topic buckets are rebuilt from it.
    pub fn with_corpus(mut self, corpus: Vec<ContextPair>) -> Self {
        self.topics = TopicResponses::from_corpus(&corpus, &TopicClassifier::new());
        self.corpus = corpus;
        self
    }

    /// The profiled participant, if a transcript named one.
    pub fn participant(&self) -> Option<&str> {
        self.participant.as_deref()
    }

    pub fn profile(&self) -> &VoiceProfile {
        &self.profile
    }

    pub fn memories(&self) -> &[String] {
        &self.memories
    }

    pub fn corpus(&self) -> &[ContextPair] {
        &self.corpus
    }

    pub fn topics(&self) -> &TopicResponses {
        &self.topics
    }

    pub fn source(&self) -> ProfileSource {
        self.source
    }

    pub(crate) fn selection_context(&self) -> SelectionContext<'_> {
        SelectionContext {
            profile: &self.profile,
            memories: &self.memories,
            corpus: &self.corpus,
            topics: &self.topics,
        }
    }
}
