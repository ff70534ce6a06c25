use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::client::{Summarizer, SummaryRequest};
use crate::llm::prompts::{build_summary_prompt, SYSTEM_PROMPT};
use crate::openai::OpenAiClient;
use crate::{RecapError, Result};

/// Summarization step backed by the OpenAI chat-completion API.
pub struct ChatSummarizer {
    client: Arc<OpenAiClient>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatSummarizer {
    pub fn new(client: Arc<OpenAiClient>, settings: &Settings) -> Self {
        Self {
            client,
            model: settings.openai.summary_model.clone(),
            temperature: settings.openai.temperature,
            max_tokens: settings.openai.max_tokens,
        }
    }
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String> {
        tracing::info!("Generating {} summary", request.style);

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_summary_prompt(request.transcript, request.context, request.style),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post("chat/completions")
            .json(&body)
            .send()
            .await
            .map_err(|e| RecapError::Summarization(format!("Summary request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecapError::Summarization(format!(
                "Summary API returned status {}: {body}",
                status.as_u16()
            )));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| RecapError::Summarization(format!("Failed to parse response: {e}")))?;

        let summary = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                RecapError::Summarization("Response did not contain summary text".to_string())
            })?;

        tracing::info!("Summary generated: {} chars", summary.len());

        Ok(summary)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
