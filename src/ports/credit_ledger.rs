//! CreditLedger port - interface for the practice-credit quota.
//!
//! Each coached utterance costs one credit. The ledger decides whether
//! a user may be coached again; top-ups and billing live entirely
//! outside this crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::UserId;

/// A user's remaining practice credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditBalance(u32);

impl CreditBalance {
    /// Creates a balance.
    pub fn new(credits: u32) -> Self {
        Self(credits)
    }

    /// Remaining credits.
    pub fn remaining(&self) -> u32 {
        self.0
    }

    /// True when no credits remain.
    pub fn is_exhausted(&self) -> bool {
        self.0 == 0
    }
}

/// Errors from the credit ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreditLedgerError {
    /// The user has no credits left to spend.
    #[error("User {user_id} has no practice credits remaining")]
    InsufficientCredits { user_id: UserId },

    /// The backing store failed.
    #[error("Credit ledger infrastructure error: {0}")]
    Infrastructure(String),
}

impl CreditLedgerError {
    pub fn insufficient(user_id: UserId) -> Self {
        CreditLedgerError::InsufficientCredits { user_id }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CreditLedgerError::Infrastructure(message.into())
    }
}

/// Port for checking and spending practice credits.
///
/// Implementations may store balances in PostgreSQL, Redis, or memory.
#[async_trait]
pub trait CreditLedger: Send + Sync {
    /// Returns the user's current balance.
    ///
    /// Unknown users have a zero balance rather than an error.
    async fn balance(&self, user_id: &UserId) -> Result<CreditBalance, CreditLedgerError>;

    /// Spends one credit, returning the balance after the debit.
    ///
    /// # Errors
    ///
    /// - `InsufficientCredits` when the balance is already exhausted;
    ///   the balance is left untouched.
    async fn debit(&self, user_id: &UserId) -> Result<CreditBalance, CreditLedgerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_reports_exhaustion() {
        assert!(CreditBalance::new(0).is_exhausted());
        assert!(!CreditBalance::new(1).is_exhausted());
    }

    #[test]
    fn insufficient_credits_displays_user() {
        let user_id = UserId::new();
        let message = format!("{}", CreditLedgerError::insufficient(user_id));
        assert!(message.contains(&user_id.to_string()));
    }

    #[test]
    fn balance_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&CreditBalance::new(5)).unwrap(), "5");
    }
}
