//! In-memory transaction store.
//!
//! An explicit owned store with defined mutation operations, so that
//! only the service layer mutates the transaction list and everything
//! else reads snapshots.

use shared::Transaction;

/// Ordered collection of transactions, newest first.
#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given transactions, in the
    /// order given (index 0 is newest).
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Prepend a single transaction.
    pub fn insert(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    /// Prepend a batch, preserving its internal order: after the call,
    /// `batch[0]` is the newest record in the store.
    pub fn insert_batch(&mut self, batch: Vec<Transaction>) {
        let mut merged = batch;
        merged.append(&mut self.transactions);
        self.transactions = merged;
    }

    /// Remove the transaction with the given id, leaving the order of
    /// the remainder unchanged. Returns false if no such id exists, in
    /// which case the store is untouched.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(index) => {
                self.transactions.remove(index);
                true
            }
            None => false,
        }
    }

    /// Wholesale replacement of the stored list.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Read-only snapshot of the stored transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.transactions.iter().any(|t| t.id == id)
    }
}
