// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned text and defaults the responder draws from.
//!
//! The built-in persona is a cheerful friend sending birthday wishes. A TOML
//! persona file may replace any section; template and preface tables are
//! merged per key.

use std::collections::BTreeMap;

use mimic_core::{Category, MimicError};
use mimic_knowledge::KnowledgeTopic;
use mimic_profile::{PatternKind, PunctuationStyle, VoiceProfile};
use serde::Deserialize;
use tracing::debug;

/// Used only if a persona leaves both the category and the default
/// template lists empty.
pub const LAST_RESORT_LINE: &str = "Hmm, tell me more!";

#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    /// Template replies per category. `Chat` shares `Default`.
    pub templates: BTreeMap<Category, Vec<String>>,
    /// Lead-ins combined with a memory for the `Memory` category.
    pub memory_prompts: Vec<String>,
    /// Preface choices per fact topic. A missing or empty list means no
    /// preface.
    pub prefaces: BTreeMap<KnowledgeTopic, Vec<String>>,
    /// Occasional celebratory sign-offs.
    pub closing_lines: Vec<String>,
    /// Openers the style transform may prepend.
    pub starters: Vec<String>,
    /// Emojis the style transform may append.
    pub emoji_palette: Vec<String>,
    pub special_messages: Vec<String>,
    /// Voice used when no transcript profile is available.
    pub default_profile: VoiceProfile,
    /// Memories used when no transcript profile is available.
    pub default_memories: Vec<String>,
    /// Appended to extracted memories when too few were found.
    pub fallback_memories: Vec<String>,
}

/// Persona file layout. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PersonaFile {
    #[serde(default)]
    templates: BTreeMap<Category, Vec<String>>,
    memory_prompts: Option<Vec<String>>,
    #[serde(default)]
    prefaces: BTreeMap<KnowledgeTopic, Vec<String>>,
    closing_lines: Option<Vec<String>>,
    starters: Option<Vec<String>>,
    emoji_palette: Option<Vec<String>>,
    special_messages: Option<Vec<String>>,
    default_profile: Option<VoiceProfile>,
    default_memories: Option<Vec<String>>,
    fallback_memories: Option<Vec<String>>,
}

impl Default for Persona {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Persona {
    pub fn builtin() -> Self {
        let templates = [
            (Category::Greeting, GREETING),
            (Category::Birthday, BIRTHDAY),
            (Category::Music, MUSIC),
            (Category::Food, FOOD),
            (Category::Movies, MOVIES),
            (Category::Funny, FUNNY),
            (Category::Memory, MEMORY),
            (Category::Question, QUESTION),
            (Category::Emotional, EMOTIONAL),
            (Category::Plans, PLANS),
            (Category::Compliment, COMPLIMENT),
            (Category::Default, DEFAULT),
        ]
        .into_iter()
        .map(|(category, lines)| (category, owned(lines)))
        .collect();

        let prefaces = [
            (KnowledgeTopic::Birthday, owned(BIRTHDAY_PREFACES)),
            (KnowledgeTopic::General, owned(GENERAL_PREFACES)),
        ]
        .into_iter()
        .collect();

        Self {
            templates,
            memory_prompts: owned(MEMORY_PROMPTS),
            prefaces,
            closing_lines: owned(CLOSING_LINES),
            starters: owned(&["Oh hii ", "Achhha ", "Hmm ", "Woah ", "Wait "]),
            emoji_palette: owned(&["😂", "❤️", "👍", "✨", "🎉", "💕", "🫶"]),
            special_messages: owned(SPECIAL_MESSAGES),
            default_profile: builtin_profile(),
            default_memories: owned(DEFAULT_MEMORIES),
            fallback_memories: owned(FALLBACK_MEMORIES),
        }
    }

    /// Built-in persona with the sections present in `content` replaced.
    pub fn from_toml_str(content: &str) -> Result<Self, MimicError> {
        let file: PersonaFile = toml::from_str(content).map_err(|e| MimicError::Persona {
            message: "invalid persona file".to_string(),
            source: Some(Box::new(e)),
        })?;

        if file.templates.contains_key(&Category::Chat) {
            return Err(MimicError::Persona {
                message: "`chat` shares the `default` templates and cannot be set".to_string(),
                source: None,
            });
        }

        let mut persona = Self::builtin();
        persona.templates.extend(file.templates);
        persona.prefaces.extend(file.prefaces);
        let replace = |target: &mut Vec<String>, value: Option<Vec<String>>| {
            if let Some(value) = value {
                *target = value;
            }
        };
        replace(&mut persona.memory_prompts, file.memory_prompts);
        replace(&mut persona.closing_lines, file.closing_lines);
        replace(&mut persona.starters, file.starters);
        replace(&mut persona.emoji_palette, file.emoji_palette);
        replace(&mut persona.special_messages, file.special_messages);
        replace(&mut persona.default_memories, file.default_memories);
        replace(&mut persona.fallback_memories, file.fallback_memories);
        if let Some(profile) = file.default_profile {
            persona.default_profile = profile;
        }

        debug!(
            categories = persona.templates.len(),
            "loaded persona overrides"
        );
        Ok(persona)
    }

    /// Templates for `category`: `Chat` reads `Default`, and an empty list
    /// falls back to `Default` too. May still be empty for a bare persona.
    pub fn templates_for(&self, category: Category) -> &[String] {
        let lookup = |c: Category| {
            self.templates
                .get(&c)
                .filter(|lines| !lines.is_empty())
                .map(Vec::as_slice)
        };
        let own = match category {
            Category::Chat => None,
            other => lookup(other),
        };
        own.or_else(|| lookup(Category::Default)).unwrap_or_default()
    }

    pub fn prefaces_for(&self, topic: KnowledgeTopic) -> &[String] {
        self.prefaces
            .get(&topic)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| (*s).to_string()).collect()
}

fn builtin_profile() -> VoiceProfile {
    let phrase_patterns = [
        (
            PatternKind::Greetings,
            owned(&["Oh hii", "Heyyy", "Hii", "Hello there", "Achhha"]),
        ),
        (
            PatternKind::Questions,
            owned(&[
                "What are you doing?",
                "How's it going?",
                "What's up?",
                "Did you like it?",
            ]),
        ),
        (
            PatternKind::Exclamations,
            owned(&["Woah", "That's so cooool!", "This is amazing", "That's great"]),
        ),
        (PatternKind::Laughs, owned(&["😂", "Lolll", "Hahaha"])),
        (
            PatternKind::Agreements,
            owned(&["Yesss", "Yeah", "Okay", "Sure", "Absolutely"]),
        ),
        (
            PatternKind::Disagreements,
            owned(&["Nooo", "Nope", "I don't think so", "Not really"]),
        ),
    ]
    .into_iter()
    .collect();

    let emoji_frequency = [("😂", 10), ("❤️", 5), ("👍", 3), ("😊", 2), ("🙌", 1)]
        .into_iter()
        .map(|(emoji, count)| (emoji.to_string(), count))
        .collect();

    VoiceProfile {
        phrase_patterns,
        emoji_frequency,
        common_phrases: owned(&[
            "Oh hii",
            "I was just gonna",
            "Achhha",
            "Ohh",
            "Woah",
            "Nd whose",
            "I didnt recognize",
        ]),
        average_message_length: 15,
        uses_emojis: true,
        uses_abbreviations: true,
        punctuation_style: PunctuationStyle::OmitsEndPunctuation,
    }
}

const GREETING: &[&str] = &[
    "Oh hii! How are you doing?",
    "Heyyy! What's up?",
    "Hi! How's your day going?",
    "Helloooo birthday person!",
    "Oh hii! Happy birthdayyy!",
];

const BIRTHDAY: &[&str] = &[
    "It's your birthdayyyy! How does it feel to be a year older?",
    "Hope you're having the best birthday ever!",
    "Birthday celebrations going well?",
    "What's your favorite birthday gift so far?",
    "Are you doing anything special for your birthday?",
];

const MUSIC: &[&str] = &[
    "Ohhh I love that song!",
    "Have you heard the new album?",
    "We should make you a birthday playlist!",
    "What kind of music are you into lately?",
    "That's a bop!",
];

const FOOD: &[&str] = &[
    "Omg that sounds delicious!",
    "I'm hungry now just thinking about it",
    "We should get food together sometime",
    "Have you tried that new place?",
    "Birthday cake is the best kind of food!",
];

const MOVIES: &[&str] = &[
    "I've been wanting to watch that!",
    "Was it good? Worth watching?",
    "We should have a movie night!",
    "What's your favorite part?",
    "I haven't seen that one yet",
];

const FUNNY: &[&str] = &[
    "Lolll that's hilarious",
    "Hahahaha stop",
    "You're too funny",
    "I can't even 😂",
    "Lmao you always make me laugh",
];

const MEMORY: &[&str] = &[
    "We have way too many memories to pick just one",
    "Omg I still think about our old chats",
    "So many inside jokes, so little time",
    "Remember all our late night talks? Best times",
    "Every time we hang out it becomes a story",
];

const QUESTION: &[&str] = &[
    "Hmm let me think... Not totally sure about that one!",
    "That's a good question! I'd have to research that",
    "You know what, I'm not 100% sure about that",
    "I think... wait no actually I'm not sure. Let me know if you find out!",
    "Woah that's a good question. I wish I knew!",
];

const EMOTIONAL: &[&str] = &[
    "Aww I know what you mean",
    "I feel the same way sometimes",
    "That's totally understandable",
    "I'm here for you!",
    "Sending you good vibes",
];

const PLANS: &[&str] = &[
    "Sounds like fun!",
    "Let me know how it goes",
    "Wish I could join!",
    "That sounds exciting",
    "Make sure to take pictures!",
];

const COMPLIMENT: &[&str] = &[
    "Aww thank you!",
    "You're too sweet",
    "No u!",
    "That means a lot coming from you",
    "You're the best!",
];

const DEFAULT: &[&str] = &[
    "Hmm, interesting thought! Also, did I mention it's your BIRTHDAY?? 🎉",
    "Achhha that's so you! Hope your birthday is amazing! 🎂",
    "Hmm, let me think about that... while I remind you it's your BIRTHDAY! 🥳",
    "That's a good question! Speaking of good things, HAPPY BIRTHDAY! 🎈",
    "Hahaha, you always say the funniest things! Hope your birthday is just as fun! 🎁",
];

const MEMORY_PROMPTS: &[&str] = &[
    "Remember that time we...",
    "Remember when we almost...",
    "That trip we took where...",
    "That inside joke about...",
    "The time we couldn't stop laughing about...",
    "When we stayed up all night talking about...",
];

const BIRTHDAY_PREFACES: &[&str] = &[
    "Oh! I actually know this one! ",
    "I just read about this recently! ",
    "Achhha, so I learned that ",
    "That's interesting you ask - ",
    "Hmm, so the thing is, ",
];

const GENERAL_PREFACES: &[&str] = &[
    "Oh! I know this cool fact - ",
    "I was just reading that ",
    "So apparently, ",
    "Did you know that ",
    "I learned this recently: ",
];

const CLOSING_LINES: &[&str] = &[
    "HAPPY BIRTHDAYYYY! 🎂😂",
    "Have I mentioned it's your birthday today?? HAPPY BIRTHDAY!",
    "Another minute, another birthday wish! Happy Birthday! 🎁",
    "SURPRISE! It's still your birthday! Hope it's amazing! 🎈",
    "HBD! Hope your day is as awesome as you are! 💯",
    "Randommmm birthday wish because you deserve it! Happy Birthday! 🌟",
    "Did someone say birthday? Oh right, it's YOURS! Happy Birthday!",
    "Happy happy happy birthday to the best person in the world! 🎊",
    "Birthday bot activated to wish you the happiest day ever! 🤖🎂",
    "Sending virtual cake and real wishes! Happy Birthday!",
];

const SPECIAL_MESSAGES: &[&str] = &[
    "You pretending not to care while secretly caring is your cutest toxic trait.",
    "You're not allowed to leave. We've trauma bonded and now I legally own you.",
    "You're my emotional support penguin, whether you like it or not. Cry about it. 🐧",
];

const DEFAULT_MEMORIES: &[&str] = &[
    "Remember that time we laughed for hours about that inside joke?",
    "That time we tried cooking something fancy and almost burned down the kitchen!",
    "Our movie marathon with all that junk food... we were so sick after but totally worth it",
    "Remember our spontaneous adventure when we got completely lost? Best detour ever!",
    "That late night when we stayed up talking about life dreams... I knew then our friendship was special",
];

const FALLBACK_MEMORIES: &[&str] = &[
    "Remember that time we laughed for hours about that inside joke? Those are the moments I cherish! 🎭",
    "That late night when we stayed up talking about life dreams... I knew then our friendship was special ✨",
    "Remember our spontaneous adventure when we got completely lost? Best detour ever! 🚗",
    "Our movie marathon with all that junk food... we were so sick after but totally worth it 🎬",
    "That time we tried cooking something fancy and almost burned down the kitchen! Fire extinguisher to the rescue! 🔥",
];
