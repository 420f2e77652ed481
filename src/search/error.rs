use thiserror::Error;

/// Raised at the entry of a search call once the clock drops below the
/// configured margin. Carried back up the stack with `?`; only the boundary
/// of a search attempt turns it into a fallback move.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("search timed out")]
pub struct SearchTimeout;

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("timeout margin must be a non-negative number of milliseconds, got {0}")]
    InvalidMargin(f64),
}
