use thiserror::Error;

/// Errors raised while building slabs
///
/// Everything past construction follows the "ignore and continue" rule:
/// stale ids and unexpected events are dropped silently.
#[derive(Debug, Error)]
pub enum SlabError {
    #[error("delay line needs at least one period")]
    InvalidDelay,
    #[error("ticker period must be non-zero")]
    InvalidPeriod,
    #[error("led region holds {available} bytes, {needed} needed")]
    RegionTooSmall { needed: usize, available: usize },
    #[error("ticker worker unavailable: {0}")]
    WorkerUnavailable(String),
}
