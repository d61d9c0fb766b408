//! Advice/classification service boundary.
//!
//! All "intelligence" (mood detection, advice generation, expense
//! summarization) lives behind the [`AdviceService`] trait. The server
//! supplies prompts and typed request/response shapes; the reasoning
//! happens remotely. Each operation is a single atomic request with no
//! retry and no streaming.

pub mod gemini;
pub mod prompts;
pub mod scripted;

use async_trait::async_trait;
use shared::{ChatMessage, ExpenseSummary, Mood, Transaction};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("Text input cannot be empty.")]
    EmptyText,
    #[error("Image data cannot be empty.")]
    EmptyImage,
    /// The remote service replied with a mood outside the closed
    /// vocabulary.
    #[error("Invalid mood detected.")]
    InvalidMood { value: String },
    #[error("Failed to generate advice.")]
    EmptyAdvice,
    #[error("advice service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("advice service error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("could not decode advice service reply: {0}")]
    Decode(String),
}

/// The five operations the core depends on.
#[async_trait]
pub trait AdviceService: Send + Sync {
    /// Classify the writer's mood from free text.
    async fn detect_mood_from_text(&self, text: &str) -> Result<Mood, AdviceError>;

    /// Classify the subject's mood from a base64 data-URI photo.
    async fn detect_mood_from_image(&self, photo_data_uri: &str) -> Result<Mood, AdviceError>;

    /// One-shot financial advice for the given mood.
    async fn advice_for_mood(&self, mood: Mood) -> Result<String, AdviceError>;

    /// Conversational advice over the chat history; the reply addresses
    /// the last user message.
    async fn expense_advice(&self, history: &[ChatMessage]) -> Result<String, AdviceError>;

    /// Narrative summary plus computed totals for the transaction list.
    /// Callers short-circuit the empty list before reaching here.
    async fn summarize_expenses(
        &self,
        transactions: &[Transaction],
    ) -> Result<ExpenseSummary, AdviceError>;
}
