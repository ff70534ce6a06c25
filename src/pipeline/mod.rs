//! Meeting processing pipeline orchestration
//!
//! Sequencing is strict: transcribe, summarize, write transcript file, write
//! full report. The first failing step aborts the run; no file is written
//! unless both remote steps succeeded.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::{ChatSummarizer, Summarizer, SummaryRequest, SummaryStyle};
use crate::openai::ClientCell;
use crate::report::ReportWriter;
use crate::transcription::{SpeechToText, WhisperTranscriber};
use crate::Result;

/// One meeting processing request.
pub struct MeetingRequest {
    /// Path to the local audio recording
    pub audio_path: PathBuf,

    /// Free-text context about the meeting; may be empty
    pub context: String,

    /// Summary style to generate
    pub style: SummaryStyle,

    /// Optional ISO-639-1 language hint; None means auto-detect
    pub language: Option<String>,
}

/// Successful pipeline result.
#[derive(Debug)]
pub struct MeetingOutput {
    pub summary: String,
    pub transcript_file: PathBuf,
    pub report_file: PathBuf,
}

/// Presentation-facing result: either a summary plus two files, or an error
/// message in the summary slot with both file slots absent. Never a mix.
#[derive(Debug)]
pub struct MeetingOutcome {
    pub summary: String,
    pub transcript_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
}

impl MeetingOutcome {
    fn failure(message: String) -> Self {
        Self {
            summary: message,
            transcript_file: None,
            report_file: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.transcript_file.is_some() && self.report_file.is_some()
    }
}

impl From<MeetingOutput> for MeetingOutcome {
    fn from(output: MeetingOutput) -> Self {
        Self {
            summary: output.summary,
            transcript_file: Some(output.transcript_file),
            report_file: Some(output.report_file),
        }
    }
}

/// The transcribe -> summarize -> persist pipeline.
pub struct Pipeline {
    transcriber: Box<dyn SpeechToText>,
    summarizer: Box<dyn Summarizer>,
    writer: ReportWriter,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Build the OpenAI-backed pipeline, constructing the shared API client
    /// through `clients` on first use.
    pub fn from_settings(settings: &Settings, clients: &ClientCell) -> Result<Self> {
        let client = clients.ensure(settings)?;

        Ok(Self::new(
            Box::new(WhisperTranscriber::new(Arc::clone(&client), settings)),
            Box::new(ChatSummarizer::new(client, settings)),
            ReportWriter::new(settings.general.output_dir.clone()),
        ))
    }

    /// Assemble a pipeline from explicit step implementations.
    pub fn new(
        transcriber: Box<dyn SpeechToText>,
        summarizer: Box<dyn Summarizer>,
        writer: ReportWriter,
    ) -> Self {
        Self {
            transcriber,
            summarizer,
            writer,
        }
    }

    /// Presentation-facing entry point.
    ///
    /// Validates the audio reference before touching any remote service and
    /// converts pipeline failures into a single descriptive message.
    pub async fn run(&self, request: &MeetingRequest) -> MeetingOutcome {
        if !request.audio_path.exists() {
            return MeetingOutcome::failure(format!(
                "Please provide an audio file. Not found: {}",
                request.audio_path.display()
            ));
        }

        match self.process_meeting(request).await {
            Ok(output) => output.into(),
            Err(err) => {
                tracing::error!("Meeting processing failed: {err}");
                MeetingOutcome::failure(format!("Error processing meeting: {err}"))
            }
        }
    }

    /// Run the full pipeline, returning typed errors for each step.
    pub async fn process_meeting(&self, request: &MeetingRequest) -> Result<MeetingOutput> {
        let transcript = self
            .transcriber
            .transcribe(&request.audio_path, request.language.as_deref())
            .await?;

        let summary = self
            .summarizer
            .summarize(SummaryRequest {
                transcript: &transcript.text,
                context: &request.context,
                style: request.style,
            })
            .await?;

        let transcript_file = self.writer.write_transcript(&transcript)?;
        let report_file = self
            .writer
            .write_full_report(&transcript, &summary, &request.context)?;

        tracing::info!(
            "Meeting processed: transcript={}, report={}",
            transcript_file.display(),
            report_file.display()
        );

        Ok(MeetingOutput {
            summary,
            transcript_file,
            report_file,
        })
    }
}
