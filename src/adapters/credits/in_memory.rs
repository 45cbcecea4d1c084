//! In-memory credit ledger implementation.
//!
//! This adapter provides an in-memory implementation of the
//! `CreditLedger` port. Useful for:
//! - Development and testing environments
//! - Demonstration and prototyping
//!
//! Production deployments use a persistent implementation owned by the
//! billing service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::ports::{CreditBalance, CreditLedger, CreditLedgerError};

/// In-memory implementation of the CreditLedger port.
///
/// Thread-safe via internal `Mutex`. Does not persist balances across
/// restarts. Users without a granted balance read as zero credits.
#[derive(Default)]
pub struct InMemoryCreditLedger {
    balances: Mutex<HashMap<UserId, u32>>,
}

impl InMemoryCreditLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a user's balance, replacing any existing grant.
    pub fn grant(&self, user_id: UserId, credits: u32) {
        self.balances.lock().unwrap().insert(user_id, credits);
    }

    /// Clears all balances.
    ///
    /// Useful for testing scenarios that need a clean slate.
    pub fn clear(&self) {
        self.balances.lock().unwrap().clear();
    }
}

#[async_trait]
impl CreditLedger for InMemoryCreditLedger {
    async fn balance(&self, user_id: &UserId) -> Result<CreditBalance, CreditLedgerError> {
        let balances = self.balances.lock().unwrap();
        Ok(CreditBalance::new(balances.get(user_id).copied().unwrap_or(0)))
    }

    async fn debit(&self, user_id: &UserId) -> Result<CreditBalance, CreditLedgerError> {
        let mut balances = self.balances.lock().unwrap();
        let current = balances.get(user_id).copied().unwrap_or(0);
        if current == 0 {
            return Err(CreditLedgerError::insufficient(*user_id));
        }
        let remaining = current - 1;
        balances.insert(*user_id, remaining);
        Ok(CreditBalance::new(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_user_reads_as_zero() {
        let ledger = InMemoryCreditLedger::new();
        let balance = ledger.balance(&UserId::new()).await.unwrap();
        assert!(balance.is_exhausted());
    }

    #[tokio::test]
    async fn debit_decrements_granted_balance() {
        let ledger = InMemoryCreditLedger::new();
        let user_id = UserId::new();
        ledger.grant(user_id, 2);

        assert_eq!(ledger.debit(&user_id).await.unwrap().remaining(), 1);
        assert_eq!(ledger.debit(&user_id).await.unwrap().remaining(), 0);
    }

    #[tokio::test]
    async fn debit_at_zero_fails_and_preserves_balance() {
        let ledger = InMemoryCreditLedger::new();
        let user_id = UserId::new();

        let err = ledger.debit(&user_id).await.unwrap_err();
        assert!(matches!(err, CreditLedgerError::InsufficientCredits { .. }));
        assert!(ledger.balance(&user_id).await.unwrap().is_exhausted());
    }

    #[tokio::test]
    async fn grant_replaces_existing_balance() {
        let ledger = InMemoryCreditLedger::new();
        let user_id = UserId::new();
        ledger.grant(user_id, 1);
        ledger.grant(user_id, 5);
        assert_eq!(ledger.balance(&user_id).await.unwrap().remaining(), 5);
    }
}
