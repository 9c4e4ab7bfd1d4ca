/// Source of uniformly distributed indices.
///
/// Injected wherever a random choice is made so tests can pin the outcome.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `0..upper`. Callers guarantee `upper > 0`.
    fn next_index(&self, upper: usize) -> usize;
}
