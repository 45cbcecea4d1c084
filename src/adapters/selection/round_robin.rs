//! Deterministic round-robin selection strategy.

use crate::ports::SelectionStrategy;

/// Cycles through candidates in order.
///
/// Fully deterministic; useful in tests and demos where rotating
/// through every configured response is preferable to randomness.
#[derive(Debug, Default)]
pub struct RoundRobinSelection {
    next: usize,
}

impl RoundRobinSelection {
    /// Creates a strategy starting at the first candidate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStrategy for RoundRobinSelection {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let index = self.next % n;
        self.next = self.next.wrapping_add(1);
        index
    }
}
