//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::llm::SummaryStyle;

/// recap - transcribe meeting recordings and write AI-generated summaries
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe a recording and generate a meeting summary
    Summarize {
        /// Path to the audio file (wav, mp3, m4a, flac, ogg, ...)
        audio: PathBuf,

        /// Free-text context about the meeting (e.g. "Weekly team standup")
        #[arg(short, long, default_value = "")]
        context: String,

        /// Summary style to generate
        #[arg(short, long, value_enum, default_value_t)]
        style: SummaryStyle,

        /// Audio language code (e.g. en, es, fr); "auto" or omitted means auto-detect
        #[arg(short, long)]
        language: Option<String>,

        /// Directory for the transcript and report files (defaults to config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
