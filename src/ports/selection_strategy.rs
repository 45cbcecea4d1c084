//! SelectionStrategy port - random-choice seam for response selection.

/// Chooses an index among `n` response candidates.
///
/// Implementations must return a value in `[0, n)` for `n > 0`; the
/// value for `n == 0` is unspecified and callers must not index with it.
/// The seam exists so production can use an entropy-seeded random source
/// while tests inject a fixed seed or a deterministic cycle and assert
/// exact outputs.
pub trait SelectionStrategy: Send {
    /// Picks an index in `[0, n)`.
    fn pick(&mut self, n: usize) -> usize;
}
