// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-addressed fact store.
//!
//! Facts live in three ordered topic lists. A query matches an entry when
//! the lowercased query contains the entry key; the first match wins.

mod builtin;

use mimic_core::MimicError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

/// Which list a fact belongs to. Search order follows declaration order.
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
pub enum KnowledgeTopic {
    /// Birthday trivia.
    Birthday,
    /// General trivia.
    General,
    /// Facts about the person chatting with the bot.
    Personal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub topic: KnowledgeTopic,
    pub key: String,
    pub fact: String,
}

/// On-disk form: one list of `{ key, fact }` tables per topic.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct KnowledgeFile {
    #[serde(default)]
    birthday: Vec<FactRow>,
    #[serde(default)]
    general: Vec<FactRow>,
    #[serde(default)]
    personal: Vec<FactRow>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FactRow {
    key: String,
    fact: String,
}

/// Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    birthday: Vec<KnowledgeEntry>,
    general: Vec<KnowledgeEntry>,
    personal: Vec<KnowledgeEntry>,
}

impl KnowledgeStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The facts shipped with the engine.
    pub fn builtin() -> Self {
        let mut store = Self::empty();
        for (topic, rows) in [
            (KnowledgeTopic::Birthday, builtin::BIRTHDAY),
            (KnowledgeTopic::General, builtin::GENERAL),
            (KnowledgeTopic::Personal, builtin::PERSONAL),
        ] {
            for (key, fact) in rows {
                store.insert(topic, *key, *fact);
            }
        }
        store
    }

    /// Parse a knowledge file.
    ///
    /// ```toml
    /// [[birthday]]
    /// key = "cake"
    /// fact = "Birthday cakes started in ancient Greece!"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, MimicError> {
        let file: KnowledgeFile = toml::from_str(content).map_err(|e| MimicError::Knowledge {
            message: "invalid knowledge file".to_string(),
            source: Some(Box::new(e)),
        })?;

        let mut store = Self::empty();
        for (topic, rows) in [
            (KnowledgeTopic::Birthday, file.birthday),
            (KnowledgeTopic::General, file.general),
            (KnowledgeTopic::Personal, file.personal),
        ] {
            for row in rows {
                if row.key.trim().is_empty() {
                    return Err(MimicError::Knowledge {
                        message: format!("empty key in {topic} facts"),
                        source: None,
                    });
                }
                store.insert(topic, row.key, row.fact);
            }
        }
        debug!(entries = store.len(), "loaded knowledge file");
        Ok(store)
    }

    /// Append a fact. Keys are stored lowercased so matching is
    /// case-insensitive on both sides.
    pub fn insert(&mut self, topic: KnowledgeTopic, key: impl Into<String>, fact: impl Into<String>) {
        let entry = KnowledgeEntry {
            topic,
            key: key.into().to_lowercase(),
            fact: fact.into(),
        };
        self.list_mut(topic).push(entry);
    }

    /// Birthday then general facts.
    pub fn lookup(&self, query: &str) -> Option<&KnowledgeEntry> {
        self.search(query, &[KnowledgeTopic::Birthday, KnowledgeTopic::General])
    }

    /// Birthday, general, then personal facts.
    pub fn lookup_with_personal(&self, query: &str) -> Option<&KnowledgeEntry> {
        self.search(
            query,
            &[
                KnowledgeTopic::Birthday,
                KnowledgeTopic::General,
                KnowledgeTopic::Personal,
            ],
        )
    }

    pub fn entries(&self, topic: KnowledgeTopic) -> &[KnowledgeEntry] {
        match topic {
            KnowledgeTopic::Birthday => &self.birthday,
            KnowledgeTopic::General => &self.general,
            KnowledgeTopic::Personal => &self.personal,
        }
    }

    pub fn len(&self) -> usize {
        self.birthday.len() + self.general.len() + self.personal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn search(&self, query: &str, topics: &[KnowledgeTopic]) -> Option<&KnowledgeEntry> {
        let query = query.to_lowercase();
        topics
            .iter()
            .flat_map(|topic| self.entries(*topic))
            .find(|entry| query.contains(entry.key.as_str()))
    }

    fn list_mut(&mut self, topic: KnowledgeTopic) -> &mut Vec<KnowledgeEntry> {
        match topic {
            KnowledgeTopic::Birthday => &mut self.birthday,
            KnowledgeTopic::General => &mut self.general,
            KnowledgeTopic::Personal => &mut self.personal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_wins_over_general() {
        let store = KnowledgeStore::builtin();
        // "cake" is birthday trivia; "food" would be general.
        let entry = store.lookup("what about food and cake").unwrap();
        assert_eq!(entry.topic, KnowledgeTopic::Birthday);
        assert_eq!(entry.key, "cake");
    }

    #[test]
    fn first_key_in_list_order_wins() {
        let store = KnowledgeStore::builtin();
        // Both "song" and "candles" appear; "song" is listed first.
        assert_eq!(store.lookup("candles song").unwrap().key, "song");
    }

    #[test]
    fn personal_only_on_extended_lookup() {
        let store = KnowledgeStore::builtin();
        assert!(store.lookup("tell me your traits").is_none());
        let entry = store.lookup_with_personal("tell me your traits").unwrap();
        assert_eq!(entry.topic, KnowledgeTopic::Personal);
    }

    #[test]
    fn general_friendship_shadows_personal_friendship() {
        let store = KnowledgeStore::builtin();
        let entry = store.lookup_with_personal("what is friendship").unwrap();
        assert_eq!(entry.topic, KnowledgeTopic::General);
    }

    #[test]
    fn matching_ignores_case_and_is_substring() {
        let store = KnowledgeStore::builtin();
        assert_eq!(store.lookup("SPACEship rides").unwrap().key, "space");
        assert!(store.lookup("nothing relevant here").is_none());
        assert!(store.lookup("").is_none());
    }

    #[test]
    fn empty_store_never_matches() {
        let store = KnowledgeStore::empty();
        assert!(store.is_empty());
        assert!(store.lookup_with_personal("cake").is_none());
    }

    #[test]
    fn builtin_has_all_topics() {
        let store = KnowledgeStore::builtin();
        assert_eq!(store.entries(KnowledgeTopic::Birthday).len(), 6);
        assert_eq!(store.entries(KnowledgeTopic::General).len(), 7);
        assert_eq!(store.entries(KnowledgeTopic::Personal).len(), 3);
        assert_eq!(store.len(), 16);
    }

    #[test]
    fn parses_knowledge_file() {
        let toml = r#"
[[birthday]]
key = "Cake"
fact = "Cakes are old."

[[personal]]
key = "dog"
fact = "You have a dog named Max."
"#;
        let store = KnowledgeStore::from_toml_str(toml).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("the cake tradition").unwrap().fact, "Cakes are old.");
        assert!(store.lookup("my dog").is_none());
        assert_eq!(
            store.lookup_with_personal("my dog").unwrap().topic,
            KnowledgeTopic::Personal
        );
    }

    #[test]
    fn rejects_malformed_file() {
        let err = KnowledgeStore::from_toml_str("[[birthday]]\nkey = 3\n").unwrap_err();
        assert!(matches!(err, MimicError::Knowledge { .. }));

        let err = KnowledgeStore::from_toml_str("[[trivia]]\nkey = \"a\"\nfact = \"b\"\n")
            .unwrap_err();
        assert!(err.to_string().contains("knowledge"));

        let err = KnowledgeStore::from_toml_str("[[general]]\nkey = \" \"\nfact = \"b\"\n")
            .unwrap_err();
        assert!(err.to_string().contains("empty key"));
    }
}
