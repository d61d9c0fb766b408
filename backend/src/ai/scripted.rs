//! Scripted advice service for tests.
//!
//! Compiled unconditionally so the whole server can be wired together
//! and exercised without a remote model.

use super::{AdviceError, AdviceService};
use async_trait::async_trait;
use shared::{ChatMessage, ExpenseSummary, Mood, Transaction};
use std::sync::Mutex;

/// Returns canned results and records which operations were invoked.
pub struct ScriptedAdviceService {
    pub mood: Mood,
    pub advice: String,
    pub summary: ExpenseSummary,
    calls: Mutex<Vec<&'static str>>,
    /// When true, every operation fails with an API error.
    pub fail: bool,
}

impl Default for ScriptedAdviceService {
    fn default() -> Self {
        Self {
            mood: Mood::Neutral,
            advice: "Spend less than you earn.".to_string(),
            summary: ExpenseSummary {
                summary: "Steady spending this week.".to_string(),
                total_spent: 300.0,
                transaction_count: 2,
                top_category: "Food".to_string(),
            },
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }
}

impl ScriptedAdviceService {
    pub fn with_mood(mood: Mood) -> Self {
        Self {
            mood,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Names of the operations invoked so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    fn record(&self, op: &'static str) -> Result<(), AdviceError> {
        self.calls.lock().expect("calls lock poisoned").push(op);
        if self.fail {
            return Err(AdviceError::Api {
                status: 500,
                body: "scripted failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AdviceService for ScriptedAdviceService {
    async fn detect_mood_from_text(&self, text: &str) -> Result<Mood, AdviceError> {
        if text.trim().is_empty() {
            return Err(AdviceError::EmptyText);
        }
        self.record("detect_mood_from_text")?;
        Ok(self.mood)
    }

    async fn detect_mood_from_image(&self, photo_data_uri: &str) -> Result<Mood, AdviceError> {
        if photo_data_uri.trim().is_empty() {
            return Err(AdviceError::EmptyImage);
        }
        self.record("detect_mood_from_image")?;
        Ok(self.mood)
    }

    async fn advice_for_mood(&self, _mood: Mood) -> Result<String, AdviceError> {
        self.record("advice_for_mood")?;
        Ok(self.advice.clone())
    }

    async fn expense_advice(&self, _history: &[ChatMessage]) -> Result<String, AdviceError> {
        self.record("expense_advice")?;
        Ok(self.advice.clone())
    }

    async fn summarize_expenses(
        &self,
        _transactions: &[Transaction],
    ) -> Result<ExpenseSummary, AdviceError> {
        self.record("summarize_expenses")?;
        Ok(self.summary.clone())
    }
}
