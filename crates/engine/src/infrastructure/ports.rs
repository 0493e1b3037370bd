//! Port traits for collaborators outside the dice core.

/// Source of uniformly distributed integers.
///
/// Injected into every simulated roll so tests can replace it.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Pseudo-random value in `[0, bound)`. `bound` is always positive.
    fn next_below(&self, bound: i32) -> i32;
}
