use async_trait::async_trait;

use crate::llm::prompts::SummaryStyle;
use crate::Result;

/// Summary generation request payload.
pub struct SummaryRequest<'a> {
    pub transcript: &'a str,
    pub context: &'a str,
    pub style: SummaryStyle,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String>;
}
