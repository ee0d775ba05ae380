//! Row types for the ledger store

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered user. Accounts reference users through `owner`.
///
/// Credentials and tokens are handled by the surrounding service, not here.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// One account in one currency.
///
/// `balance` is in minor units (cents, satoshi, ...) and is the running sum
/// of all entries referencing this account. `currency` is immutable after
/// creation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// An append-only signed ledger line.
///
/// Negative amount is a debit, positive a credit. Entries are never mutated
/// or deleted; a successful transfer writes exactly two of them.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Entry {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// A record of one funds movement between two accounts.
///
/// `amount` is strictly positive and in the source account's currency;
/// validation of both happens in the caller-facing layer.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Transfer {
    pub id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}
