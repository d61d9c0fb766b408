//! Remote persistence bindings. Nothing in the core depends on these
//! succeeding; they exist so the UI can read the advice catalog and
//! mood-log history from the managed service.

pub mod remote;

pub use remote::CatalogClient;
