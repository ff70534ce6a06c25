//! CLI command implementations

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::SummaryStyle;
use crate::openai::ClientCell;
use crate::pipeline::{MeetingRequest, Pipeline};

/// Transcribe a recording and generate a summary plus report files.
pub async fn summarize_meeting(
    settings: &Settings,
    audio: PathBuf,
    context: String,
    style: SummaryStyle,
    language: Option<String>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(dir) = output_dir {
        settings.general.output_dir = dir;
    }

    let clients = ClientCell::new();
    let pipeline = Pipeline::from_settings(&settings, &clients)?;

    // "auto" mirrors the language dropdown default and means no hint.
    let language = language.filter(|l| !l.eq_ignore_ascii_case("auto"));

    let request = MeetingRequest {
        audio_path: audio,
        context,
        style,
        language,
    };

    let outcome = pipeline.run(&request).await;

    if !outcome.is_success() {
        anyhow::bail!("{}", outcome.summary);
    }

    println!("{}", outcome.summary);
    println!();
    if let Some(path) = outcome.transcript_file {
        println!("Transcript saved to: {}", path.display());
    }
    if let Some(path) = outcome.report_file {
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
