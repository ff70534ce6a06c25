//! OpenAI Whisper API client for speech-to-text transcription

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use crate::config::Settings;
use crate::openai::OpenAiClient;
use crate::transcription::{SpeechToText, Transcript, TranscriptSegment};
use crate::{RecapError, Result};

/// Remote transcription step backed by the OpenAI audio API.
pub struct WhisperTranscriber {
    client: Arc<OpenAiClient>,
    model: String,
}

impl WhisperTranscriber {
    pub fn new(client: Arc<OpenAiClient>, settings: &Settings) -> Self {
        Self {
            client,
            model: settings.openai.transcription_model.clone(),
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperTranscriber {
    async fn transcribe(&self, audio_path: &Path, language: Option<&str>) -> Result<Transcript> {
        let file_bytes = tokio::fs::read(audio_path).await.map_err(|e| {
            RecapError::Transcription(format!(
                "Failed to read audio file {}: {e}",
                audio_path.display()
            ))
        })?;

        let filename = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        tracing::info!(
            "Transcribing audio file: {} ({} bytes)",
            filename,
            file_bytes.len()
        );

        let file_part = Part::bytes(file_bytes)
            .file_name(filename)
            .mime_str(guess_mime(audio_path))
            .map_err(|e| RecapError::Transcription(format!("Invalid audio mime type: {e}")))?;

        // verbose_json so language/duration/segments come back alongside text
        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("response_format", "verbose_json");

        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }

        let response = self
            .client
            .post("audio/transcriptions")
            .multipart(form)
            .send()
            .await
            .map_err(|e| RecapError::Transcription(format!("Transcription request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecapError::Transcription(format!(
                "Transcription API returned status {}: {}",
                status.as_u16(),
                api_error_message(&body)
            )));
        }

        let payload: VerboseTranscriptionResponse = response
            .json()
            .await
            .map_err(|e| RecapError::Transcription(format!("Failed to parse response: {e}")))?;

        tracing::info!(
            "Transcription complete: {} chars, {} segments",
            payload.text.len(),
            payload.segments.len()
        );

        Ok(Transcript {
            text: payload.text,
            language: payload.language,
            duration_secs: payload.duration,
            segments: payload.segments,
        })
    }
}

/// Map common audio extensions to mime types for the multipart upload.
fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("flac") => "audio/flac",
        Some("ogg" | "oga" | "opus") => "audio/ogg",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

/// Pull the human-readable message out of an OpenAI error body when possible.
fn api_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiErrorResponse {
        error: ApiErrorDetail,
    }

    #[derive(Deserialize)]
    struct ApiErrorDetail {
        message: String,
    }

    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct VerboseTranscriptionResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    segments: Vec<TranscriptSegment>,
}
