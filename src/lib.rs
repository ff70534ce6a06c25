//! recap - transcribe meeting recordings and write AI-generated summaries
//!
//! The pipeline is deliberately simple: one transcription call, one
//! summarization call, two report files on disk.

pub mod cli;
pub mod config;
pub mod llm;
pub mod openai;
pub mod pipeline;
pub mod report;
pub mod transcription;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Summarization error: {0}")]
    Summarization(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
