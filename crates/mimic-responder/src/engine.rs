// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session construction and the per-turn reply pipeline.
//!
//! A turn runs classify > select > stylize. The engine is immutable once
//! built, so one instance can serve any number of sessions and threads.

use mimic_config::MimicConfig;
use mimic_core::{Category, RandomSource, ResponseTier, choose};
use mimic_knowledge::KnowledgeStore;
use mimic_memory::{extract_memories, pad_memories};
use mimic_router::TopicClassifier;
use mimic_transcript::{context_pairs, parse};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::persona::{LAST_RESORT_LINE, Persona};
use crate::selector::ResponseSelector;
use crate::session::{ProfileSource, Session};
use crate::style::Stylist;

/// One styled reply and how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub category: Category,
    pub tier: ResponseTier,
}

#[derive(Debug, Clone)]
pub struct Engine {
    persona: Persona,
    knowledge: KnowledgeStore,
    config: MimicConfig,
    classifier: TopicClassifier,
    stylist: Stylist,
}

impl Engine {
    pub fn new(persona: Persona, knowledge: KnowledgeStore, config: MimicConfig) -> Self {
        let stylist = Stylist::new(config.style.clone(), &persona);
        Self {
            persona,
            knowledge,
            config,
            classifier: TopicClassifier::new(),
            stylist,
        }
    }

    /// Built-in persona and facts with default settings.
    pub fn builtin() -> Self {
        Self::new(
            Persona::builtin(),
            KnowledgeStore::builtin(),
            MimicConfig::default(),
        )
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn knowledge(&self) -> &KnowledgeStore {
        &self.knowledge
    }

    pub fn config(&self) -> &MimicConfig {
        &self.config
    }

    /// Build a session from an optional transcript export.
    ///
    /// The profiled participant is `participant`, else
    /// `session.participant` from config, else the first sender who is not
    /// `session.user_name`. Without a usable transcript the persona's
    /// default profile and memories are used.
    pub fn new_session(&self, transcript: Option<&str>, participant: Option<&str>) -> Session {
        let configured = participant
            .map(str::to_string)
            .or_else(|| self.config.session.participant.clone());

        let Some(raw) = transcript.filter(|raw| !raw.trim().is_empty()) else {
            info!("no transcript supplied, using persona defaults");
            return self.builtin_session(configured);
        };

        let parsed = parse(
            raw,
            self.config.session.user_name.as_deref(),
            &self.config.transcript,
        );
        let Some(name) = configured.or_else(|| parsed.counterpart.clone()) else {
            warn!("transcript has no messages, using persona defaults");
            return self.builtin_session(None);
        };

        let messages = &parsed.messages;
        let usable = messages
            .iter()
            .any(|m| m.sender == name && !m.is_media);
        if !usable {
            warn!(
                participant = name.as_str(),
                senders = ?parsed.senders(),
                "participant has no text messages, using persona defaults"
            );
            return self.builtin_session(Some(name));
        }

        let profile = mimic_profile::profile(messages, &name, &self.config.profile);
        let excerpts = extract_memories(
            messages,
            &name,
            &self.config.memory,
            self.config.transcript.date_order,
        );
        let memories = pad_memories(
            &excerpts,
            &self.persona.fallback_memories,
            self.config.memory.min_excerpts,
        );
        let corpus = context_pairs(messages, &name);

        info!(
            participant = name.as_str(),
            messages = messages.len(),
            excerpts = excerpts.len(),
            pairs = corpus.len(),
            "built session from transcript"
        );
        Session::new(
            Some(name),
            profile,
            memories,
            corpus,
            ProfileSource::Transcript,
        )
    }

    /// Classify `input` and answer it in the session's voice.
    pub fn reply(&self, session: &Session, input: &str, rng: &mut dyn RandomSource) -> Reply {
        let category = self.classifier.classify(input);
        self.reply_to(session, category, input, rng)
    }

    /// Answer under a caller-chosen category, skipping classification.
    pub fn reply_to(
        &self,
        session: &Session,
        category: Category,
        input: &str,
        rng: &mut dyn RandomSource,
    ) -> Reply {
        let selector = ResponseSelector::new(
            &self.persona,
            &self.knowledge,
            self.config.responder.closing_probability,
        );
        let candidate = selector.select(category, input, &session.selection_context(), rng);

        let mut text = self.stylist.stylize(&candidate.text, session.profile(), rng);
        if let Some(closing) = &candidate.closing {
            let closing = self.stylist.stylize(closing, session.profile(), rng);
            text = format!("{text}\n\n{closing}");
        }

        Reply {
            text,
            category,
            tier: candidate.tier,
        }
    }

    /// A stylized persona special message.
    pub fn special_message(&self, session: &Session, rng: &mut dyn RandomSource) -> String {
        let message = choose(rng, &self.persona.special_messages)
            .map_or(LAST_RESORT_LINE, String::as_str);
        debug!("sending special message");
        self.stylist.stylize(message, session.profile(), rng)
    }

    fn builtin_session(&self, participant: Option<String>) -> Session {
        Session::new(
            participant,
            self.persona.default_profile.clone(),
            self.persona.default_memories.clone(),
            Vec::new(),
            ProfileSource::BuiltIn,
        )
    }
}
