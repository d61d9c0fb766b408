//! Data model and request/response types shared between the MoodWise
//! Wallet server and its clients.
//!
//! Field names serialize in camelCase so the JSON shapes match what the
//! web UI already exchanges (`timeOfDay`, `totalSpending`, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Closed mood vocabulary. Every mood attached to a transaction or a
/// state-of-mind snapshot is one of these six values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Stressed,
    Anxious,
    Tired,
}

impl Mood {
    /// All moods, in the fixed display order used by the spending chart.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Anxious,
        Mood::Tired,
    ];

    /// The lower-case token stored on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
            Mood::Tired => "tired",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    /// Case-insensitive, whitespace-trimming parse. Unknown values are
    /// an error; they are never coerced to a default mood.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "neutral" => Ok(Mood::Neutral),
            "stressed" => Ok(Mood::Stressed),
            "anxious" => Ok(Mood::Anxious),
            "tired" => Ok(Mood::Tired),
            other => Err(format!("unknown mood '{}'", other)),
        }
    }
}

/// Coarse time-of-day label attached to each transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Bucket an hour (0-23) into a time-of-day label: before noon is
    /// Morning, noon until 18:00 is Afternoon, 18:00 onward is Evening.
    pub fn from_hour(hour: u32) -> TimeOfDay {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 18 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded expense event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique opaque identifier.
    pub id: String,
    /// Calendar date, stored as `MM/DD/YYYY`.
    pub date: String,
    pub time_of_day: TimeOfDay,
    pub mood: Mood,
    /// Free-text category label.
    pub category: String,
    /// Non-negative amount in the application's currency unit.
    pub amount: f64,
    /// Free-text annotation: user-entered default, LLM-derived, or
    /// import-derived.
    pub recommendation: String,
}

/// One chart row: aggregate spending for a single mood. Derived from
/// the transaction list, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSpendingEntry {
    pub mood: Mood,
    pub total_spending: f64,
}

/// Structured expense summary produced by the advice service (or the
/// local empty-store fallback). Replaced wholesale on recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub summary: String,
    pub total_spent: f64,
    pub transaction_count: u32,
    pub top_category: String,
}

impl ExpenseSummary {
    /// The fixed zero-value summary returned without any external call
    /// when there are no transactions to analyze.
    pub fn empty() -> Self {
        Self {
            summary: "No transactions available to analyze.".to_string(),
            total_spent: 0.0,
            transaction_count: 0,
            top_category: "N/A".to_string(),
        }
    }
}

/// Speaker role in the expense-advice chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of the expense-advice conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Manual transaction entry, as submitted by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub mood: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
}

/// Raw CSV text to import as a batch of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportCsvRequest {
    pub csv: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
}

/// Per-field validation failure map, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectMoodFromTextRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectMoodFromImageRequest {
    /// Base64 data URI: `data:<mimetype>;base64,<encoded_data>`.
    pub photo_data_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResponse {
    pub mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceForMoodRequest {
    pub mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseAdviceRequest {
    pub history: Vec<ChatMessage>,
}
