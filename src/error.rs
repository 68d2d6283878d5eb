use thiserror::Error;

/// Invalid flush-interval configuration, returned by
/// [`FlushCache::set_flush_interval`](crate::FlushCache::set_flush_interval).
///
/// A rejected call leaves the previously configured interval and its timer
/// completely untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlushIntervalError {
    /// The requested interval is not a usable number (NaN or infinite).
    #[error("flush interval must be a number, found: {0}")]
    NotANumber(f64),
    /// The requested interval is zero or negative.
    #[error("flush interval must be greater than zero, found: {0}")]
    NotPositive(f64),
    /// The requested interval exceeds what a timer duration can represent.
    #[error("flush interval is too large, found: {0}")]
    TooLarge(f64),
}
