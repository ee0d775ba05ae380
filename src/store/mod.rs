//! Ledger store
//!
//! PostgreSQL-backed storage for users, accounts, entries and transfers,
//! plus the transactional transfer engine that composes them.
//!
//! Single-row operations live on [`Queries`], which binds to any
//! `PgConnection` - either acquired from the pool (plain reads/writes) or
//! borrowed from an open transaction (the transfer engine). [`LedgerStore`]
//! owns the pool and is the public entry point.

pub mod error;
pub mod models;
pub mod queries;
pub mod schema;
pub mod transfer_tx;
mod tx;

pub use error::StoreError;
pub use models::{Account, Entry, Transfer, User};
pub use queries::{Queries, Repositories};
pub use schema::ensure_schema;
pub use transfer_tx::{TransferParams, TransferResult};

use sqlx::PgPool;

/// Public entry point to the ledger store.
///
/// Holds an injected connection pool and no other state; every operation is
/// safe under arbitrary concurrent invocation.
#[derive(Clone)]
pub struct LedgerStore {
    pool: PgPool,
}

impl LedgerStore {
    /// Create a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create a user
    pub async fn create_user(
        &self,
        username: &str,
        full_name: &str,
        email: &str,
    ) -> Result<User, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).create_user(username, full_name, email).await
    }

    /// Get a user by username
    pub async fn get_user(&self, username: &str) -> Result<User, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).get_user(username).await
    }

    /// Create an account with an initial balance
    pub async fn create_account(
        &self,
        owner: &str,
        balance: i64,
        currency: &str,
    ) -> Result<Account, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).create_account(owner, balance, currency).await
    }

    /// Get an account by ID
    pub async fn get_account(&self, id: i64) -> Result<Account, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).get_account(id).await
    }

    /// List accounts ordered by ID with limit/offset paging
    pub async fn list_accounts(&self, limit: i64, offset: i64) -> Result<Vec<Account>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).list_accounts(limit, offset).await
    }

    /// Administrative balance overwrite. Not part of the transfer path.
    pub async fn update_account(&self, id: i64, balance: i64) -> Result<Account, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).update_account(id, balance).await
    }

    /// Delete an account
    pub async fn delete_account(&self, id: i64) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).delete_account(id).await
    }

    /// Atomically add a (possibly negative) delta to an account balance
    pub async fn add_account_balance(&self, id: i64, delta: i64) -> Result<Account, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).add_account_balance(id, delta).await
    }

    /// Get a ledger entry by ID
    pub async fn get_entry(&self, id: i64) -> Result<Entry, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).get_entry(id).await
    }

    /// List entries for one account
    pub async fn list_entries(
        &self,
        account_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Entry>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).list_entries(account_id, limit, offset).await
    }

    /// Get a transfer record by ID
    pub async fn get_transfer(&self, id: i64) -> Result<Transfer, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).get_transfer(id).await
    }

    /// List transfers where the account is either side
    pub async fn list_transfers(
        &self,
        account_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transfer>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Queries::new(&mut conn).list_transfers(account_id, limit, offset).await
    }
}
