//! Report writer for recap
//!
//! Serializes transcripts and full meeting reports into timestamp-named text
//! files with a fixed banner layout.
//!
//! Known limitation: filenames have second resolution, so two runs finishing
//! within the same wall-clock second produce the same name and the later
//! write silently overwrites the earlier one.

use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::transcription::Transcript;
use crate::{RecapError, Result};

const BANNER_WIDTH: usize = 80;

/// Writes report artifacts into a configured output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write the transcript (with metadata) to `transcript_<timestamp>.txt`.
    ///
    /// Returns the path of the written file.
    pub fn write_transcript(&self, transcript: &Transcript) -> Result<PathBuf> {
        let path = self
            .output_dir
            .join(format!("transcript_{}.txt", file_timestamp()));

        let mut content = String::new();
        push_banner(&mut content, "MEETING TRANSCRIPT");
        let _ = writeln!(
            content,
            "Generated: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        push_metadata(&mut content, transcript);
        content.push('\n');

        content.push_str("TRANSCRIPT:\n");
        content.push_str(&"-".repeat(BANNER_WIDTH));
        content.push_str("\n\n");
        content.push_str(&transcript.text);
        content.push_str("\n\n");
        content.push_str(&"=".repeat(BANNER_WIDTH));
        content.push('\n');

        self.write_file(&path, &content)?;
        Ok(path)
    }

    /// Write transcript plus summary to `meeting_report_<timestamp>.txt`.
    ///
    /// Returns the path of the written file.
    pub fn write_full_report(
        &self,
        transcript: &Transcript,
        summary: &str,
        context: &str,
    ) -> Result<PathBuf> {
        let path = self
            .output_dir
            .join(format!("meeting_report_{}.txt", file_timestamp()));

        let mut content = String::new();
        push_banner(&mut content, "MEETING REPORT");
        let _ = writeln!(
            content,
            "Generated: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        if !context.trim().is_empty() {
            let _ = writeln!(content, "Context: {context}\n");
        }

        push_metadata(&mut content, transcript);
        content.push('\n');

        push_banner(&mut content, "SUMMARY");
        content.push_str(summary);
        content.push_str("\n\n");

        push_banner(&mut content, "FULL TRANSCRIPT");
        content.push_str(&transcript.text);
        content.push_str("\n\n");
        content.push_str(&"=".repeat(BANNER_WIDTH));
        content.push('\n');

        self.write_file(&path, &content)?;
        Ok(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| {
            RecapError::Persistence(format!("Failed to write {}: {e}", path.display()))
        })
    }
}

/// Second-resolution timestamp used in report filenames.
fn file_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

fn push_banner(content: &mut String, title: &str) {
    content.push_str(&"=".repeat(BANNER_WIDTH));
    content.push('\n');
    content.push_str(title);
    content.push('\n');
    content.push_str(&"=".repeat(BANNER_WIDTH));
    content.push_str("\n\n");
}

fn push_metadata(content: &mut String, transcript: &Transcript) {
    let _ = writeln!(
        content,
        "Language: {}",
        transcript.language.as_deref().unwrap_or("unknown")
    );
    if let Some(duration) = transcript.duration_secs {
        let _ = writeln!(content, "Duration: {duration:.2} seconds");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transcript() -> Transcript {
        Transcript {
            text: "Alice proposed shipping on Friday. Bob agreed.".to_string(),
            language: Some("en".to_string()),
            duration_secs: Some(93.5),
            segments: Vec::new(),
        }
    }

    #[test]
    fn transcript_file_contains_text_and_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let path = writer.write_transcript(&sample_transcript()).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("MEETING TRANSCRIPT"));
        assert!(content.contains("Language: en"));
        assert!(content.contains("Duration: 93.50 seconds"));
        assert!(content.contains("Alice proposed shipping on Friday. Bob agreed."));
    }

    #[test]
    fn transcript_filename_embeds_kind_and_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let path = writer.write_transcript(&sample_transcript()).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();

        assert!(name.starts_with("transcript_"));
        assert!(name.ends_with(".txt"));
        // transcript_YYYYMMDD_HHMMSS.txt
        assert_eq!(name.len(), "transcript_".len() + 15 + ".txt".len());
    }

    #[test]
    fn full_report_contains_summary_transcript_and_context_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());
        let transcript = sample_transcript();
        let summary = "Ship on Friday; Bob owns the release.";

        let path = writer
            .write_full_report(&transcript, summary, "Weekly release sync")
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("MEETING REPORT"));
        assert!(content.contains("SUMMARY"));
        assert!(content.contains("FULL TRANSCRIPT"));
        assert!(content.contains(summary));
        assert!(content.contains(&transcript.text));
        assert!(content.contains("Context: Weekly release sync"));
    }

    #[test]
    fn empty_context_is_omitted_from_report() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let path = writer
            .write_full_report(&sample_transcript(), "summary", "")
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(!content.contains("Context:"));
    }

    #[test]
    fn unknown_language_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());
        let transcript = Transcript {
            text: "hello".to_string(),
            ..Transcript::default()
        };

        let path = writer.write_transcript(&transcript).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("Language: unknown"));
        assert!(!content.contains("Duration:"));
    }

    #[test]
    fn unwritable_directory_is_a_persistence_error() {
        let writer = ReportWriter::new("/definitely/not/a/real/dir");

        let err = writer.write_transcript(&sample_transcript()).unwrap_err();
        assert!(matches!(err, RecapError::Persistence(_)));
    }
}
