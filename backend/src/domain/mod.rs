//! Domain logic: the transaction store and the services that operate
//! on it.

pub mod aggregate;
pub mod import;
pub mod seed;
pub mod store;
pub mod summary;
pub mod transactions;

pub use import::ImportError;
pub use store::TransactionStore;
pub use summary::SummaryService;
pub use transactions::{TransactionService, ValidationError};
