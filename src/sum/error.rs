use thiserror::Error;

/// Errors surfaced by the reciprocal sum engine.
///
/// Both variants are programming errors on the caller's side. They are
/// reported before any work executes and are never retried. Division by
/// zero or by non-finite values is NOT an error: IEEE-754 semantics
/// propagate through the summation instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    /// Index bounds do not describe a valid half-open range over the input.
    #[error("invalid range: [{start}, {end}) does not fit an input of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// A control parameter is outside its documented domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}
