//! LLM module for recap
//!
//! Handles AI-powered meeting summaries via a chat-completion API.

mod client;
mod openai;
mod prompts;

pub use client::{Summarizer, SummaryRequest};
pub use openai::ChatSummarizer;
pub use prompts::SummaryStyle;
