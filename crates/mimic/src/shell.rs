// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mimic chat` command implementation.
//!
//! Interactive REPL with a colored prompt and readline history. Lines that
//! start with `/` are shell commands; everything else is a chat turn.

use std::str::FromStr;

use colored::Colorize;
use mimic_core::{Category, MimicError, RandomSource};
use mimic_responder::{Engine, Reply, Session};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Help,
    Profile,
    Memories,
    Special,
    /// A message answered under a fixed category.
    Topic(Category, &'a str),
    Message(&'a str),
    Invalid(String),
}

fn parse_input(line: &str) -> Input<'_> {
    let Some(command) = line.strip_prefix('/') else {
        return Input::Message(line);
    };
    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, rest)| (name, rest.trim()));

    match name {
        "quit" | "exit" => Input::Quit,
        "help" => Input::Help,
        "profile" => Input::Profile,
        "memories" => Input::Memories,
        "special" => Input::Special,
        "topic" => {
            let (category, message) = rest
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(c, m)| (c, m.trim()));
            match Category::from_str(category) {
                Ok(category) => Input::Topic(category, message),
                Err(_) => Input::Invalid(format!("unknown topic `{category}`")),
            }
        }
        other => Input::Invalid(format!("unknown command `/{other}`")),
    }
}

/// Runs the `mimic chat` interactive REPL.
pub fn run_shell(
    engine: &Engine,
    session: &Session,
    rng: &mut dyn RandomSource,
) -> Result<(), MimicError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| MimicError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "mimic chat".bold().green());
    if let Some(participant) = session.participant() {
        println!("Talking as {} ({}).", participant.cyan(), session.source());
    }
    println!("Type {} to exit, {} for commands.\n", "/quit".yellow(), "/help".yellow());

    let prompt = format!("{}> ", "you".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match parse_input(trimmed) {
                    Input::Quit => break,
                    Input::Help => print_help(),
                    Input::Profile => print_profile(session),
                    Input::Memories => {
                        for (i, memory) in session.memories().iter().enumerate() {
                            println!("{} {memory}", format!("{:>2}.", i + 1).dimmed());
                        }
                    }
                    Input::Special => print_bot(&engine.special_message(session, rng)),
                    Input::Topic(category, message) => {
                        print_reply(&engine.reply_to(session, category, message, rng));
                    }
                    Input::Message(message) => print_reply(&engine.reply(session, message, rng)),
                    Input::Invalid(reason) => eprintln!("{}: {reason}", "error".red()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "bye".dimmed());
    Ok(())
}

fn print_reply(reply: &Reply) {
    debug!(category = %reply.category, tier = %reply.tier, "shell reply");
    print_bot(&reply.text);
}

fn print_bot(text: &str) {
    println!("{} {text}\n", "mimic>".magenta());
}

fn print_profile(session: &Session) {
    let profile = session.profile();
    println!("{} {}", "source:".bold(), session.source());
    println!("{} {}", "average length:".bold(), profile.average_message_length);
    println!("{} {}", "punctuation:".bold(), profile.punctuation_style);
    println!("{} {}", "abbreviations:".bold(), profile.uses_abbreviations);
    println!("{} {}", "top emojis:".bold(), profile.top_emojis(5).join(" "));
    println!("{} {}", "phrases:".bold(), profile.common_phrases.join(", "));
}

fn print_help() {
    println!("  /profile           show the voice profile");
    println!("  /memories          list session memories");
    println!("  /special           send a special message");
    println!("  /topic <name> ...  answer under a topic (greeting, birthday, memory, ...)");
    println!("  /quit              leave");
}
