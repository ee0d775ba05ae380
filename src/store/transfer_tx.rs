//! Transactional funds transfer
//!
//! One public operation: move `amount` from one account to another. Inside a
//! single transaction it writes the transfer record, a debit entry, a credit
//! entry, and applies both balance deltas. Deadlock freedom under concurrent
//! opposite-direction transfers rests entirely on [`apply_deltas`] touching
//! the lower account ID first; the engine holds no locks of its own.

use serde::Serialize;

use super::LedgerStore;
use super::error::StoreError;
use super::models::{Account, Entry, Transfer};
use super::queries::{Queries, Repositories};

/// Arguments of one funds movement.
///
/// Preconditions (`amount > 0`, existing accounts, matching currencies) are
/// enforced by the caller-facing validation layer and not re-checked here.
/// Overdraft and self-transfer are permitted by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferParams {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
}

/// Everything written by one committed transfer
#[derive(Debug, Clone, Serialize)]
pub struct TransferResult {
    pub transfer: Transfer,
    pub from_entry: Entry,
    pub to_entry: Entry,
    pub from_account: Account,
    pub to_account: Account,
}

impl LedgerStore {
    /// Move `params.amount` from one account to another atomically.
    ///
    /// Any failure at any step aborts the whole sequence; no partial rows
    /// are visible outside the transaction.
    pub async fn transfer(&self, params: TransferParams) -> Result<TransferResult, StoreError> {
        let result = self
            .run_in_transaction(move |tx| {
                Box::pin(async move {
                    let mut repos = Queries::new(&mut **tx);
                    execute_transfer(&mut repos, params).await
                })
            })
            .await?;

        tracing::debug!(
            transfer_id = result.transfer.id,
            from_account_id = params.from_account_id,
            to_account_id = params.to_account_id,
            amount = params.amount,
            "transfer committed"
        );

        Ok(result)
    }
}

/// The linear transfer protocol, run against transaction-bound repositories
pub(crate) async fn execute_transfer<R: Repositories>(
    repos: &mut R,
    params: TransferParams,
) -> Result<TransferResult, StoreError> {
    let transfer = repos
        .create_transfer(params.from_account_id, params.to_account_id, params.amount)
        .await?;

    let from_entry = repos
        .create_entry(params.from_account_id, -params.amount)
        .await?;

    let to_entry = repos.create_entry(params.to_account_id, params.amount).await?;

    let (from_account, to_account) = apply_deltas(
        repos,
        params.from_account_id,
        -params.amount,
        params.to_account_id,
        params.amount,
    )
    .await?;

    Ok(TransferResult {
        transfer,
        from_entry,
        to_entry,
        from_account,
        to_account,
    })
}

/// Apply two balance deltas, always updating the lower account ID first.
///
/// Two concurrent transfers between the same pair in opposite directions
/// would otherwise take the two row locks in opposite orders and deadlock;
/// funnelling every transaction through the same acquisition order makes a
/// circular wait impossible. The observable result is independent of the
/// caller's argument order.
pub(crate) async fn apply_deltas<R: Repositories>(
    repos: &mut R,
    account_id1: i64,
    delta1: i64,
    account_id2: i64,
    delta2: i64,
) -> Result<(Account, Account), StoreError> {
    if account_id1 < account_id2 {
        let account1 = repos.add_account_balance(account_id1, delta1).await?;
        let account2 = repos.add_account_balance(account_id2, delta2).await?;
        Ok((account1, account2))
    } else {
        let account2 = repos.add_account_balance(account_id2, delta2).await?;
        let account1 = repos.add_account_balance(account_id1, delta1).await?;
        Ok((account1, account2))
    }
}
