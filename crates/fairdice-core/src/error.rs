//! Error taxonomy for replay random sources.

use thiserror::Error;

/// Top-level error type for replay random sources.
///
/// Every variant is a logic error at the call site. This component performs
/// no I/O, so nothing here is transient or retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RngError {
    /// The seed sequence was empty; cycling over zero words is undefined.
    #[error("seed sequence must contain at least one value")]
    EmptySequence,

    /// A float seed fell outside the unit interval (NaN included).
    #[error("float seed {0} is outside [0.0, 1.0)")]
    SeedOutOfRange(f64),

    /// Bulk byte-filling was requested. The number of sequence words one
    /// call would consume is ambiguous to the caller, so it always fails.
    #[error("fill_bytes is not supported: the number of sequence words it would consume is ambiguous")]
    FillBytesUnsupported,

    /// A shuffle was requested. Callers cannot predict how many sequence
    /// words a Fisher-Yates pass consumes, so it always fails.
    #[error("shuffle is not supported: callers cannot predict how many sequence words it would consume")]
    ShuffleUnsupported,
}
