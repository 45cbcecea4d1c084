//! Ports - interfaces between the domain/application layers and the
//! outside world, implemented by adapters.

mod credit_ledger;
mod selection_strategy;

pub use credit_ledger::{CreditBalance, CreditLedger, CreditLedgerError};
pub use selection_strategy::SelectionStrategy;
