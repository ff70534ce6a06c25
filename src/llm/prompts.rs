//! Prompt templates for summary generation.

use clap::ValueEnum;
use std::fmt;

/// Summary style selected by the caller.
///
/// Each style maps to one fixed instruction template; adding a style means
/// adding a variant and its template here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryStyle {
    /// Brief, high-level recap in a few sentences
    Brief,
    /// Comprehensive coverage of topics, decisions, and questions
    #[default]
    Detailed,
    /// Bulleted decisions, owners, deadlines, and next steps
    ActionItems,
}

impl SummaryStyle {
    /// The fixed instruction block forwarded to the model.
    pub fn instruction(self) -> &'static str {
        match self {
            SummaryStyle::Brief => "Provide a brief, high-level summary in 3-5 sentences.",
            SummaryStyle::Detailed => {
                "Provide a comprehensive summary including:\n\
                 - Main topics discussed\n\
                 - Key points and arguments\n\
                 - Decisions made\n\
                 - Action items\n\
                 - Important questions raised"
            }
            SummaryStyle::ActionItems => {
                "Focus on extracting:\n\
                 - Key decisions made\n\
                 - Action items and their owners\n\
                 - Deadlines mentioned\n\
                 - Next steps\n\
                 Format as a bulleted list."
            }
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryStyle::Brief => write!(f, "brief"),
            SummaryStyle::Detailed => write!(f, "detailed"),
            SummaryStyle::ActionItems => write!(f, "action-items"),
        }
    }
}

/// Fixed system role message for the summarization request.
pub const SYSTEM_PROMPT: &str = "You are an expert meeting assistant that creates clear, \
well-structured summaries of meeting transcripts. Focus on extracting the most \
important information and presenting it in an organized manner.";

/// Build the user role message embedding context, style instruction, and
/// the full transcript.
pub fn build_summary_prompt(transcript: &str, context: &str, style: SummaryStyle) -> String {
    let context = if context.trim().is_empty() {
        "No additional context provided."
    } else {
        context
    };

    format!(
        "Please analyze this meeting transcript and create a summary.\n\
         \n\
         Context: {context}\n\
         \n\
         Summary Style: {style_instruction}\n\
         \n\
         Transcript:\n\
         {transcript}\n\
         \n\
         Please provide the summary:",
        style_instruction = style.instruction(),
    )
}
