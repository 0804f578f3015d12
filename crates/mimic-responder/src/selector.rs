// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tiered reply selection.
//!
//! Tiers are tried in priority order: factual > exact match > keyword match
//! > topic match > template. The first tier that yields a candidate wins.
//! For the memory category a session memory is offered before the topic
//! tier.

use mimic_core::{Category, ContextPair, RandomSource, ResponseCandidate, ResponseTier, choose};
use mimic_knowledge::KnowledgeStore;
use mimic_profile::VoiceProfile;
use mimic_router::is_question;
use tracing::debug;

use crate::persona::{LAST_RESORT_LINE, Persona};
use crate::session::TopicResponses;

/// Shorter side of a containment match must be longer than this.
const MIN_CONTAINED_CHARS: usize = 5;

/// Tokens at or under this length never count as keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// Per-session data the selector reads.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub profile: &'a VoiceProfile,
    pub memories: &'a [String],
    pub corpus: &'a [ContextPair],
    /// The participant's past replies grouped by the topic they answered.
    pub topics: &'a TopicResponses,
}

/// Picks the unstyled reply for one turn.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector<'a> {
    persona: &'a Persona,
    knowledge: &'a KnowledgeStore,
    closing_probability: f64,
}

impl<'a> ResponseSelector<'a> {
    pub fn new(persona: &'a Persona, knowledge: &'a KnowledgeStore, closing_probability: f64) -> Self {
        Self {
            persona,
            knowledge,
            closing_probability,
        }
    }

    /// Select a reply. Never fails and never returns empty text.
    pub fn select(
        &self,
        category: Category,
        input: &str,
        context: &SelectionContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> ResponseCandidate {
        let mut candidate = self
            .factual(category, input, rng)
            .or_else(|| exact_match(input, context.corpus, rng))
            .or_else(|| keyword_match(input, context.corpus, rng))
            .or_else(|| self.recollection(category, context.memories, rng))
            .or_else(|| topic_match(category, context.topics, rng))
            .unwrap_or_else(|| self.template(category, rng));

        if !self.persona.closing_lines.is_empty() && rng.chance(self.closing_probability) {
            candidate.closing = choose(rng, &self.persona.closing_lines).cloned();
        }

        debug!(
            %category,
            tier = %candidate.tier,
            closing = candidate.closing.is_some(),
            "selected response"
        );
        candidate
    }

    fn factual(
        &self,
        category: Category,
        input: &str,
        rng: &mut dyn RandomSource,
    ) -> Option<ResponseCandidate> {
        if category != Category::Question && !is_question(input) {
            return None;
        }
        let entry = self.knowledge.lookup_with_personal(input)?;
        let text = match choose(rng, self.persona.prefaces_for(entry.topic)) {
            Some(preface) => format!("{preface}{}", entry.fact),
            None => entry.fact.clone(),
        };
        Some(ResponseCandidate::new(text, ResponseTier::Factual))
    }

    /// A memory prompt joined with a session memory.
    fn recollection(
        &self,
        category: Category,
        memories: &[String],
        rng: &mut dyn RandomSource,
    ) -> Option<ResponseCandidate> {
        if category != Category::Memory || memories.is_empty() {
            return None;
        }
        let prompt = choose(rng, &self.persona.memory_prompts).filter(|p| !p.trim().is_empty());
        let memory = choose(rng, memories).filter(|m| !m.trim().is_empty());
        let text = match (prompt, memory) {
            (Some(prompt), Some(memory)) => format!("{prompt} {memory}"),
            (None, Some(only)) | (Some(only), None) => only.clone(),
            (None, None) => return None,
        };
        Some(ResponseCandidate::new(text, ResponseTier::Template))
    }

    fn template(&self, category: Category, rng: &mut dyn RandomSource) -> ResponseCandidate {
        let text = choose(rng, self.persona.templates_for(category))
            .filter(|line| !line.trim().is_empty())
            .map_or_else(|| LAST_RESORT_LINE.to_string(), Clone::clone);
        ResponseCandidate::new(text, ResponseTier::Template)
    }
}

fn topic_match(
    category: Category,
    topics: &TopicResponses,
    rng: &mut dyn RandomSource,
) -> Option<ResponseCandidate> {
    choose(rng, topics.for_category(category))
        .map(|response| ResponseCandidate::new(response.clone(), ResponseTier::TopicMatch))
}

fn exact_match(
    input: &str,
    corpus: &[ContextPair],
    rng: &mut dyn RandomSource,
) -> Option<ResponseCandidate> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }
    let hits: Vec<&ContextPair> = answered(corpus)
        .filter(|pair| contains_either_way(&input, &pair.context.to_lowercase()))
        .collect();
    pick(&hits, ResponseTier::ExactMatch, rng)
}

fn contains_either_way(input: &str, context: &str) -> bool {
    if input == context {
        return true;
    }
    let (shorter, longer) = if input.len() <= context.len() {
        (input, context)
    } else {
        (context, input)
    };
    shorter.chars().count() > MIN_CONTAINED_CHARS && longer.contains(shorter)
}

fn keyword_match(
    input: &str,
    corpus: &[ContextPair],
    rng: &mut dyn RandomSource,
) -> Option<ResponseCandidate> {
    let input = input.to_lowercase();
    let words = keywords(&input);
    if words.is_empty() {
        return None;
    }
    let hits: Vec<&ContextPair> = answered(corpus)
        .filter(|pair| {
            let context = pair.context.to_lowercase();
            keywords(&context)
                .iter()
                .any(|c| words.iter().any(|w| w.contains(c) || c.contains(w)))
        })
        .collect();
    pick(&hits, ResponseTier::KeywordMatch, rng)
}

fn keywords(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
        .collect()
}

/// Pairs whose response has something to say.
fn answered(corpus: &[ContextPair]) -> impl Iterator<Item = &ContextPair> {
    corpus.iter().filter(|pair| !pair.response.trim().is_empty())
}

fn pick(
    hits: &[&ContextPair],
    tier: ResponseTier,
    rng: &mut dyn RandomSource,
) -> Option<ResponseCandidate> {
    choose(rng, hits).map(|pair| ResponseCandidate::new(pair.response.clone(), tier))
}
