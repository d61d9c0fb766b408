//! Summary requestor: forwards the transaction list to the advice
//! service and keeps the latest completed summary.

use crate::ai::{AdviceError, AdviceService};
use shared::{ExpenseSummary, Transaction};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Requests summaries and caches the newest completed one.
///
/// Every request takes a generation number at entry; a completion only
/// overwrites the cache when no newer request has started since. A
/// superseded request still returns its own result to its caller, it
/// just cannot clobber fresher state.
#[derive(Clone)]
pub struct SummaryService {
    advice: Arc<dyn AdviceService>,
    started: Arc<AtomicU64>,
    latest: Arc<RwLock<(u64, Option<ExpenseSummary>)>>,
}

impl SummaryService {
    pub fn new(advice: Arc<dyn AdviceService>) -> Self {
        Self {
            advice,
            started: Arc::new(AtomicU64::new(0)),
            latest: Arc::new(RwLock::new((0, None))),
        }
    }

    /// Summarize the given transactions. The empty list short-circuits
    /// to the fixed zero-value summary without any external call.
    pub async fn summarize(
        &self,
        transactions: &[Transaction],
    ) -> Result<ExpenseSummary, AdviceError> {
        let generation = self.started.fetch_add(1, Ordering::SeqCst) + 1;

        let summary = if transactions.is_empty() {
            ExpenseSummary::empty()
        } else {
            info!("Requesting summary of {} transactions", transactions.len());
            self.advice.summarize_expenses(transactions).await?
        };

        let mut latest = self.latest.write().await;
        if generation > latest.0 {
            *latest = (generation, Some(summary.clone()));
        }
        Ok(summary)
    }

    /// The newest completed summary, if any request has finished yet.
    pub async fn latest(&self) -> Option<ExpenseSummary> {
        self.latest.read().await.1.clone()
    }
}
