// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rewrites text so it reads like the profiled participant typed it.

use std::sync::LazyLock;

use mimic_config::StyleConfig;
use mimic_core::{RandomSource, choose};
use mimic_profile::{PunctuationStyle, VoiceProfile, contains_emoji};
use regex::{Captures, Regex};

use crate::persona::Persona;

static AND_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\band\b").unwrap());

/// Only the exact short forms match, so `hii` or `okk` are left alone.
static DOUBLING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(hi|hey|ok|oh)\b").unwrap());

/// Style transform with its probabilities and word lists.
#[derive(Debug, Clone)]
pub struct Stylist {
    config: StyleConfig,
    starters: Vec<String>,
    palette: Vec<String>,
}

impl Default for Stylist {
    fn default() -> Self {
        Self::new(StyleConfig::default(), &Persona::builtin())
    }
}

impl Stylist {
    pub fn new(config: StyleConfig, persona: &Persona) -> Self {
        Self {
            config,
            starters: persona.starters.clone(),
            palette: persona.emoji_palette.clone(),
        }
    }

    /// Apply the six steps in order. Random draws happen only for steps
    /// whose precondition holds.
    pub fn stylize(&self, text: &str, profile: &VoiceProfile, rng: &mut dyn RandomSource) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut out = if profile.has_phrase_word("nd") {
            AND_WORD.replace_all(text, "nd").into_owned()
        } else {
            text.to_string()
        };

        out = DOUBLING.replace_all(&out, double_letters).into_owned();

        // A reply that is only the mark keeps it.
        if profile.punctuation_style == PunctuationStyle::OmitsEndPunctuation
            && out.ends_with(['.', '!', '?'])
            && !out[..out.len() - 1].trim().is_empty()
            && rng.chance(self.config.drop_punctuation_probability)
        {
            out.pop();
        }

        if out.contains('!') && rng.chance(self.config.double_exclaim_probability) {
            out = out.replacen('!', "!!", 1);
        }

        if profile.uses_emojis
            && !contains_emoji(&out)
            && !self.palette.is_empty()
            && rng.chance(self.config.emoji_probability)
        {
            if let Some(emoji) = choose(rng, &self.palette) {
                out.push(' ');
                out.push_str(emoji);
            }
        }

        if !self.starters.is_empty() && rng.chance(self.config.starter_probability) {
            if let Some(starter) = choose(rng, &self.starters) {
                out = format!("{starter}{}", lowercase_first(&out));
            }
        }

        out
    }
}

/// Stylize with the built-in persona's palettes and default probabilities.
pub fn stylize(text: &str, profile: &VoiceProfile, rng: &mut dyn RandomSource) -> String {
    Stylist::default().stylize(text, profile, rng)
}

fn double_letters(caps: &Captures<'_>) -> String {
    let word = &caps[0];
    let doubled = match word.to_ascii_lowercase().as_str() {
        "hi" => "hii",
        "hey" => "heyy",
        "ok" => "okk",
        "oh" => "ohh",
        _ => return word.to_string(),
    };
    if word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
        doubled.to_ascii_uppercase()
    } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        let mut s = doubled.to_string();
        s[..1].make_ascii_uppercase();
        s
    } else {
        doubled.to_string()
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use mimic_test_utils::ScriptedRandom;

    use super::*;

    fn plain_profile() -> VoiceProfile {
        VoiceProfile::default()
    }

    fn run(text: &str, profile: &VoiceProfile, rng: &mut ScriptedRandom) -> String {
        stylize(text, profile, rng)
    }

    #[test]
    fn empty_text_is_untouched() {
        let mut rng = ScriptedRandom::eager();
        assert_eq!(run("", &Persona::builtin().default_profile, &mut rng), "");
    }

    #[test]
    fn doubling_is_unconditional_and_idempotent() {
        let mut rng = ScriptedRandom::quiet();
        let profile = plain_profile();
        assert_eq!(run("hi there, ok? Oh HEY", &profile, &mut rng), "hii there, okk? Ohh HEYY");
        assert_eq!(run("hii okk heyy ohh", &profile, &mut rng), "hii okk heyy ohh");
        // Whole words only.
        assert_eq!(run("this hike, okay", &profile, &mut rng), "this hike, okay");
    }

    #[test]
    fn and_becomes_nd_only_for_nd_speakers() {
        let mut rng = ScriptedRandom::quiet();
        let nd = VoiceProfile {
            common_phrases: vec!["nd whose".into()],
            ..VoiceProfile::default()
        };
        assert_eq!(run("cake And candles and band", &nd, &mut rng), "cake nd candles nd band");
        assert_eq!(
            run("cake and candles", &plain_profile(), &mut rng),
            "cake and candles"
        );
    }

    #[test]
    fn drops_end_punctuation_when_profile_omits_it() {
        let profile = VoiceProfile {
            punctuation_style: PunctuationStyle::OmitsEndPunctuation,
            ..VoiceProfile::default()
        };
        let mut drop = ScriptedRandom::quiet().with_rolls([0.1]);
        assert_eq!(run("See you.", &profile, &mut drop), "See you");

        let mut keep = ScriptedRandom::quiet().with_rolls([0.9]);
        assert_eq!(run("See you.", &profile, &mut keep), "See you.");
    }

    #[test]
    fn doubles_first_exclamation() {
        let mut rng = ScriptedRandom::quiet().with_rolls([0.2]);
        assert_eq!(run("Yay! Cake!", &plain_profile(), &mut rng), "Yay!! Cake!");
    }

    #[test]
    fn appends_palette_emoji_only_without_existing_emoji() {
        let profile = VoiceProfile {
            uses_emojis: true,
            ..VoiceProfile::default()
        };
        let mut rng = ScriptedRandom::quiet().with_rolls([0.1]).with_indices([3]);
        assert_eq!(run("Nice", &profile, &mut rng), "Nice ✨");

        let mut rng = ScriptedRandom::eager();
        let out = run("Nice 🎉", &profile, &mut rng);
        assert!(!out.ends_with('✨'));
        assert_eq!(out.matches('🎉').count(), 1);
    }

    #[test]
    fn starter_lowercases_previous_first_letter() {
        let mut rng = ScriptedRandom::quiet().with_rolls([0.05]).with_indices([3]);
        assert_eq!(run("That works", &plain_profile(), &mut rng), "Woah that works");
    }

    #[test]
    fn all_steps_together() {
        let profile = Persona::builtin().default_profile;
        // The dropped "!" leaves nothing to double.
        let mut rng = ScriptedRandom::eager().with_indices([0, 1]);
        let out = run("Hi and welcome!", &profile, &mut rng);
        assert_eq!(out, "Achhha hii nd welcome 😂");
    }

    #[test]
    fn zero_probabilities_leave_only_deterministic_steps() {
        let config = StyleConfig {
            drop_punctuation_probability: 0.0,
            double_exclaim_probability: 0.0,
            emoji_probability: 0.0,
            starter_probability: 0.0,
        };
        let stylist = Stylist::new(config, &Persona::builtin());
        let mut rng = ScriptedRandom::eager().with_rolls([0.0]);
        let profile = Persona::builtin().default_profile;
        assert_eq!(stylist.stylize("Oh and yes!", &profile, &mut rng), "Ohh nd yes!");
        assert_eq!(rng.remaining(), (1, 0));
    }

    #[test]
    fn lone_mark_survives_punctuation_drop() {
        let profile = VoiceProfile {
            punctuation_style: PunctuationStyle::OmitsEndPunctuation,
            ..VoiceProfile::default()
        };
        for mark in ["?", "!", ".", "  ?"] {
            let mut rng = ScriptedRandom::eager();
            assert!(!run(mark, &profile, &mut rng).is_empty());
        }
        let mut rng = ScriptedRandom::quiet().with_rolls([0.0]);
        assert_eq!(run("?!", &profile, &mut rng), "?");
    }

    #[test]
    fn case_folded_lookalikes_are_left_alone() {
        let mut rng = ScriptedRandom::quiet();
        // U+212A KELVIN SIGN folds to "k" under Unicode case-insensitivity.
        let kelvin = "o\u{212A} then";
        assert_eq!(run(kelvin, &plain_profile(), &mut rng), kelvin);
    }
}
