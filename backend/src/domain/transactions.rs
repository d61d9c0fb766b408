//! Manual transaction entry and store access.

use crate::domain::import::{self, ImportError};
use crate::domain::store::TransactionStore;
use chrono::{Local, Timelike};
use shared::{CreateTransactionRequest, Mood, TimeOfDay, Transaction};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Recommendation attached to manually entered transactions until the
/// advice service has something better to say about them.
const PLACEHOLDER_RECOMMENDATION: &str = "Track this expense against your budget.";

/// Field-scoped validation failure. Each offending form field gets its
/// own message; the map is surfaced to the client as-is.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid transaction: {} field(s) failed validation", .errors.len())]
pub struct ValidationError {
    pub errors: BTreeMap<String, String>,
}

/// Service owning all mutation of the transaction store.
#[derive(Clone)]
pub struct TransactionService {
    store: Arc<RwLock<TransactionStore>>,
}

impl TransactionService {
    pub fn new(store: Arc<RwLock<TransactionStore>>) -> Self {
        Self { store }
    }

    /// Validate a manual entry and prepend it to the store.
    pub async fn create(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, ValidationError> {
        let (mood, date) = validate(&request)?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            date,
            time_of_day: TimeOfDay::from_hour(Local::now().hour()),
            mood,
            category: request.category.trim().to_string(),
            amount: request.amount,
            recommendation: PLACEHOLDER_RECOMMENDATION.to_string(),
        };

        info!("Recording transaction {} ({})", transaction.id, transaction.category);
        self.store.write().await.insert(transaction.clone());
        Ok(transaction)
    }

    /// Parse a CSV blob and, only if the whole file is valid, prepend
    /// the batch to the store. Returns the number of imported records.
    pub async fn import_csv(&self, csv_text: &str) -> Result<usize, ImportError> {
        let batch = import::parse_transactions(csv_text)?;
        let imported = batch.len();
        info!("Importing {} transactions from CSV", imported);
        self.store.write().await.insert_batch(batch);
        Ok(imported)
    }

    /// Delete by id. Unknown ids are a no-op returning false.
    pub async fn delete(&self, id: &str) -> bool {
        let deleted = self.store.write().await.delete(id);
        if deleted {
            info!("Deleted transaction {}", id);
        }
        deleted
    }

    /// Snapshot of the current list, newest first.
    pub async fn list(&self) -> Vec<Transaction> {
        self.store.read().await.transactions().to_vec()
    }
}

/// Check every field and report all failures at once, keyed by field.
fn validate(request: &CreateTransactionRequest) -> Result<(Mood, String), ValidationError> {
    let mut errors = BTreeMap::new();

    if request.category.trim().is_empty() {
        errors.insert("category".to_string(), "Category is required.".to_string());
    }

    if !request.amount.is_finite() || request.amount <= 0.0 {
        errors.insert(
            "amount".to_string(),
            "Amount must be greater than zero.".to_string(),
        );
    }

    let mood = match request.mood.parse::<Mood>() {
        Ok(mood) => Some(mood),
        Err(_) => {
            errors.insert(
                "mood".to_string(),
                "Mood must be one of: happy, sad, neutral, stressed, anxious, tired."
                    .to_string(),
            );
            None
        }
    };

    let date = request.date.trim();
    if date.is_empty() {
        errors.insert("date".to_string(), "Date is required.".to_string());
    } else if chrono::NaiveDate::parse_from_str(date, "%m/%d/%Y").is_err() {
        errors.insert("date".to_string(), "Date must be MM/DD/YYYY.".to_string());
    }

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    // mood is Some whenever errors is empty
    Ok((mood.unwrap_or(Mood::Neutral), date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TransactionService {
        TransactionService::new(Arc::new(RwLock::new(TransactionStore::new())))
    }

    fn request() -> CreateTransactionRequest {
        CreateTransactionRequest {
            date: "01/05/2025".to_string(),
            category: "Coffee".to_string(),
            amount: 120.0,
            mood: "happy".to_string(),
        }
    }

    #[tokio::test]
    async fn create_prepends_a_validated_transaction() {
        let service = service();
        let first = service.create(request()).await.unwrap();
        let second = service
            .create(CreateTransactionRequest {
                category: "Lunch".to_string(),
                ..request()
            })
            .await
            .unwrap();

        let transactions = service.list().await;
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, second.id);
        assert_eq!(transactions[1].id, first.id);
        assert_eq!(transactions[0].recommendation, PLACEHOLDER_RECOMMENDATION);
    }

    #[tokio::test]
    async fn zero_amount_fails_and_one_cent_passes() {
        let service = service();

        let err = service
            .create(CreateTransactionRequest {
                amount: 0.0,
                ..request()
            })
            .await
            .unwrap_err();
        assert!(err.errors.contains_key("amount"));

        let ok = service
            .create(CreateTransactionRequest {
                amount: 0.01,
                ..request()
            })
            .await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn mood_is_normalized_from_messy_input() {
        let service = service();
        let tx = service
            .create(CreateTransactionRequest {
                mood: "HAPPY ".to_string(),
                ..request()
            })
            .await
            .unwrap();
        assert_eq!(tx.mood, Mood::Happy);
    }

    #[tokio::test]
    async fn validation_reports_every_bad_field() {
        let service = service();
        let err = service
            .create(CreateTransactionRequest {
                date: String::new(),
                category: "  ".to_string(),
                amount: -3.0,
                mood: "meh".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.errors.len(), 4);
        assert!(err.errors.contains_key("date"));
        assert!(err.errors.contains_key("category"));
        assert!(err.errors.contains_key("amount"));
        assert!(err.errors.contains_key("mood"));
        assert_eq!(service.list().await.len(), 0);
    }

    #[tokio::test]
    async fn failed_import_leaves_the_store_untouched() {
        let service = service();
        service.create(request()).await.unwrap();
        let before = service.list().await;

        let csv = "date,category,amount,mood\n\
                   01/01/2025,Coffee,100,happy\n\
                   01/02/2025,Food,200,furious\n";
        let err = service.import_csv(csv).await.unwrap_err();
        assert!(matches!(err, ImportError::InvalidMood { row: 3, .. }));

        assert_eq!(service.list().await, before);
    }

    #[tokio::test]
    async fn successful_import_prepends_in_file_order() {
        let service = service();
        let existing = service.create(request()).await.unwrap();

        let csv = "date,category,amount,mood\n\
                   01/01/2025,Coffee,100,happy\n\
                   01/02/2025,Food,200,sad\n";
        assert_eq!(service.import_csv(csv).await.unwrap(), 2);

        let transactions = service.list().await;
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].category, "Coffee");
        assert_eq!(transactions[1].category, "Food");
        assert_eq!(transactions[2].id, existing.id);
        assert_ne!(transactions[0].id, transactions[1].id);
        assert_ne!(transactions[0].id, existing.id);
    }

    #[tokio::test]
    async fn delete_is_a_noop_for_unknown_ids() {
        let service = service();
        let tx = service.create(request()).await.unwrap();
        assert!(!service.delete("nope").await);
        assert_eq!(service.list().await.len(), 1);
        assert!(service.delete(&tx.id).await);
        assert!(service.list().await.is_empty());
    }
}
