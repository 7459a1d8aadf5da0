//! Error types for the kairos-arma crate.

/// Broad classification of a [`ForecastError`].
///
/// Every failure in this crate is a caller contract violation, so there is a
/// single kind. It exists so that callers bridging into other error systems
/// can classify without matching on individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument did not satisfy the documented precondition.
    InvalidArgument,
}

/// Error type for all fallible operations in the kairos-arma crate.
///
/// None of these are transient: retrying with the same arguments fails again.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Returned when the history passed to a forecast does not match the model order.
    #[error("data length mismatch: model order is {expected}, got {got} values")]
    DataLength {
        /// Model order.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when the output buffer cannot hold the requested horizon.
    #[error("output buffer too short: horizon is {horizon}, buffer holds {len}")]
    OutputTooShort {
        /// Requested number of forecast steps.
        horizon: usize,
        /// Length of the caller's output buffer.
        len: usize,
    },

    /// Returned when replacement weights do not match the model order.
    #[error("weights length mismatch: model order is {expected}, got {got} weights")]
    WeightsLength {
        /// Model order.
        expected: usize,
        /// Number of weights supplied.
        got: usize,
    },

    /// Returned when the innovation variance is negative or non-finite.
    #[error("invalid innovation variance: {variance}")]
    InvalidVariance {
        /// The offending variance.
        variance: f64,
    },

    /// Returned when a sampler is asked for a non-finite mean.
    #[error("invalid innovation mean: {mean}")]
    InvalidMean {
        /// The offending mean.
        mean: f64,
    },

    /// Returned when the history contains NaN or infinite values.
    #[error("input data contains non-finite values")]
    NonFiniteData,
}

impl ForecastError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DataLength { .. }
            | Self::OutputTooShort { .. }
            | Self::WeightsLength { .. }
            | Self::InvalidVariance { .. }
            | Self::InvalidMean { .. }
            | Self::NonFiniteData => ErrorKind::InvalidArgument,
        }
    }
}
