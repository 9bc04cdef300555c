use thiserror::Error;

/// Reasons an aggregation refuses to produce a value.
///
/// Capability violations never show up here: they are rejected by the type
/// checker. These variants cover the inputs that are well-typed but still
/// have no defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The operation needs at least one element.
    #[error("{operation} is undefined for an empty input")]
    EmptyInput {
        /// Name of the rejecting operation.
        operation: &'static str,
    },

    /// The element count cannot be represented in the element type,
    /// so the integral division by count is impossible.
    #[error("element count {count} does not fit in the element type")]
    CountOverflow {
        /// Number of elements in the input.
        count: usize,
    },

    /// `ddof` removes every degree of freedom from the input.
    #[error("{count} elements leave no degrees of freedom for ddof = {ddof}")]
    DegreesOfFreedom {
        /// Number of elements in the input.
        count: usize,
        /// Requested delta degrees of freedom.
        ddof: usize,
    },
}

/// Crate-wide result type.
pub type Result<T, E = NumericError> = std::result::Result<T, E>;

/// Logs and builds the empty-input rejection for `operation`.
pub(crate) fn empty(operation: &'static str) -> NumericError {
    tracing::trace!(operation, "rejected empty input");
    NumericError::EmptyInput { operation }
}
