//! Random source abstraction

/// Source of uniformly distributed indices.
///
/// Implementations live in the infrastructure layer; tests supply scripted
/// sources to make draws deterministic.
pub trait RandomSource: Send + Sync {
    /// Return an index in `[0, upper)`. Only called with `upper > 0`.
    fn next_index(&self, upper: usize) -> usize;
}
