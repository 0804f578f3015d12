// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered keyword rules from input text to topic category.

use std::sync::LazyLock;

use mimic_core::Category;
use regex::Regex;
use tracing::debug;

/// Words that open a question when they are the whole first token.
const QUESTION_STARTERS: &[&str] = &[
    "what", "who", "where", "when", "why", "how", "is", "are", "do", "does", "did", "can",
    "could", "would", "will", "should",
];

/// How a rule decides whether it fires.
#[derive(Debug)]
pub enum Predicate {
    /// Regex tested against the lowercased input.
    Matches(Regex),
    /// See [`is_question`].
    Question,
}

impl Predicate {
    fn fires(&self, lower: &str) -> bool {
        match self {
            Predicate::Matches(re) => re.is_match(lower),
            Predicate::Question => is_question(lower),
        }
    }
}

/// One row of the routing table.
#[derive(Debug)]
pub struct Rule {
    pub category: Category,
    pub predicate: Predicate,
}

fn words(category: Category, alternatives: &str) -> Rule {
    Rule {
        category,
        predicate: Predicate::Matches(Regex::new(&format!(r"\b({alternatives})\b")).unwrap()),
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            category: Category::Greeting,
            predicate: Predicate::Matches(
                Regex::new(
                    r"^\s*(oh\s*)?(hi+|hey+|hello+|hola|howdy|namaste|greetings|good (morning|afternoon|evening))\b",
                )
                .unwrap(),
            ),
        },
        words(
            Category::Birthday,
            "birthday|bday|hbd|happy birthday|born|birth|age|celebrate|party|gift|present|wish|surprise",
        ),
        words(
            Category::Music,
            "music|song|album|artist|band|playlist|spotify|concert|melody|tune|singing|lyrics|genre|pop|rock|rap|classical|dj|beat|rhythm",
        ),
        words(
            Category::Food,
            "food|eat|lunch|dinner|breakfast|hungry|restaurant|meal|cook|cooking|chef|recipe|dish|cuisine|pizza|burger|cake|chocolate|ice cream|delicious|tasty|yummy",
        ),
        words(
            Category::Movies,
            "movie|film|watch|cinema|theater|show|series|episode|netflix|amazon|disney|hbo|actor|actress|director|scene|plot|character|tv|television|stream|streaming",
        ),
        words(
            Category::Funny,
            "lol|lmao|rofl|haha|hehe|funny|joke|humor|hilarious|laughing|laugh|comedy",
        ),
        words(
            Category::Memory,
            "remember|memory|memories|recall|past|time when|time that|back when|years ago|that day|that time|reminds me|reminded me|throwback|used to",
        ),
        Rule {
            category: Category::Question,
            predicate: Predicate::Question,
        },
        words(
            Category::Emotional,
            "happy|sad|angry|upset|excited|thrilled|love|hate|feel|feeling|emotion|mood|miss|regret|sorry|grateful|thankful|appreciate",
        ),
        words(
            Category::Plans,
            "plan|future|tomorrow|next|soon|later|upcoming|schedule|event|meeting",
        ),
        words(
            Category::Compliment,
            "nice|great|awesome|amazing|wonderful|beautiful|pretty|handsome|smart|intelligent|cool|fantastic|excellent|brilliant|talented",
        ),
    ]
});

/// True when the input contains `?` or its first token, with trailing
/// punctuation dropped, is exactly a question word.
pub fn is_question(input: &str) -> bool {
    if input.contains('?') {
        return true;
    }
    input
        .split_whitespace()
        .next()
        .map(|token| token.trim_end_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .is_some_and(|token| QUESTION_STARTERS.contains(&token.as_str()))
}

/// Classify with the shared rule table.
pub fn classify(input: &str) -> Category {
    TopicClassifier::new().classify(input)
}

/// Evaluates [`TopicClassifier::rules`] top to bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicClassifier;

impl TopicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// The routing table in evaluation order. `Default` is implied when no
    /// rule fires and `Chat` is never produced.
    pub fn rules(&self) -> &'static [Rule] {
        &RULES
    }

    pub fn classify(&self, input: &str) -> Category {
        let lower = input.to_lowercase();
        let category = self
            .rules()
            .iter()
            .find(|rule| rule.predicate.fires(&lower))
            .map_or(Category::Default, |rule| rule.category);
        debug!(%category, "classified input");
        category
    }
}
