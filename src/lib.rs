//! bankcore - Transactional funds-transfer ledger core
//!
//! Moves money between two accounts as one atomic PostgreSQL transaction:
//! a transfer record, two signed ledger entries, and two balance deltas
//! commit together or not at all. Deadlock freedom under concurrent
//! opposite-direction transfers comes from a single rule: the balance
//! update for the numerically lower account ID is always issued first.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration (yaml)
//! - [`logging`] - Rolling-file tracing subscriber
//! - [`db`] - PostgreSQL connection pool management
//! - [`store`] - Repositories, transaction scope and the transfer engine

pub mod config;
pub mod db;
pub mod logging;
pub mod store;

// Convenient re-exports at crate root
pub use config::{AppConfig, DatabaseConfig};
pub use db::Database;
pub use store::{
    Account, Entry, LedgerStore, Queries, Repositories, StoreError, Transfer, TransferParams,
    TransferResult, User,
};
