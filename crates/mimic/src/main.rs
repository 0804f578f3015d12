// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mimic - chat with a persona that writes in a friend's voice.
//!
//! This is the binary entry point. All file access happens here; the engine
//! crates only ever see strings.

mod setup;
mod shell;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mimic_config::MimicConfig;
use mimic_core::MimicError;
use mimic_profile::VoiceProfile;
use mimic_responder::{ProfileSource, Session};
use serde::Serialize;

use crate::setup::{build_engine, init_tracing, make_rng, read_transcript};

/// Mimic - chat with a persona that writes in a friend's voice.
#[derive(Parser, Debug)]
#[command(name = "mimic", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the standard search path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Transcript and participant selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
struct SourceArgs {
    /// Exported chat transcript to learn the voice from.
    #[arg(long)]
    transcript: Option<PathBuf>,
    /// Sender to imitate. Defaults to the other side of the conversation.
    #[arg(long)]
    participant: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat.
    Chat {
        #[command(flatten)]
        source: SourceArgs,
        /// Seed for reproducible replies.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a single reply and exit.
    Ask {
        /// Message to answer.
        text: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Seed for reproducible replies.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the learned voice profile and memories as JSON.
    Profile {
        /// Exported chat transcript to learn the voice from.
        #[arg(long)]
        transcript: PathBuf,
        /// Sender to imitate. Defaults to the other side of the conversation.
        #[arg(long)]
        participant: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => mimic_config::load_and_validate_path(path),
        None => mimic_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            mimic_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.session.log_level);

    if let Err(e) = run(cli.command, config) {
        eprintln!("mimic: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, config: MimicConfig) -> Result<(), MimicError> {
    match command {
        Commands::Chat { source, seed } => {
            let seed = seed.or(config.session.seed);
            let engine = build_engine(config)?;
            let transcript = read_transcript(source.transcript.as_deref())?;
            let session =
                engine.new_session(transcript.as_deref(), source.participant.as_deref());
            shell::run_shell(&engine, &session, make_rng(seed).as_mut())
        }
        Commands::Ask { text, source, seed } => {
            let seed = seed.or(config.session.seed);
            let engine = build_engine(config)?;
            let transcript = read_transcript(source.transcript.as_deref())?;
            let session =
                engine.new_session(transcript.as_deref(), source.participant.as_deref());
            let reply = engine.reply(&session, &text, make_rng(seed).as_mut());
            println!("{}", reply.text);
            Ok(())
        }
        Commands::Profile {
            transcript,
            participant,
        } => {
            let engine = build_engine(config)?;
            let transcript = read_transcript(Some(&transcript))?;
            let session = engine.new_session(transcript.as_deref(), participant.as_deref());
            println!("{}", profile_json(&session)?);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct ProfileReport<'a> {
    participant: Option<&'a str>,
    source: ProfileSource,
    profile: &'a VoiceProfile,
    memories: &'a [String],
}

/// Pretty JSON with the participant, profile source, profile and memories.
fn profile_json(session: &Session) -> Result<String, MimicError> {
    let report = ProfileReport {
        participant: session.participant(),
        source: session.source(),
        profile: session.profile(),
        memories: session.memories(),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| MimicError::Internal(format!("failed to encode profile: {e}")))
}
