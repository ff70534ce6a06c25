//! Transcription module for recap
//!
//! Handles speech-to-text via the OpenAI audio transcription API.

mod openai;

pub use openai::WhisperTranscriber;

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::Result;

/// A transcribed recording plus whatever metadata the service returned.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Full transcript text; always populated on success
    pub text: String,

    /// Detected or requested language, when reported
    pub language: Option<String>,

    /// Audio duration in seconds, when reported
    pub duration_secs: Option<f64>,

    /// Timed segments, when the service returns them
    pub segments: Vec<TranscriptSegment>,
}

/// One timed segment of a verbose transcription response.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

/// Speech-to-text provider seam.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe a local audio file.
    ///
    /// `language` is an optional ISO-639-1 hint; when absent the service
    /// auto-detects.
    async fn transcribe(&self, audio_path: &Path, language: Option<&str>) -> Result<Transcript>;
}
