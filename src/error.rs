//! Error types for the Quine-McCluskey minimizer
//!
//! Every variant is a deterministic rejection of malformed input, raised at the
//! boundary before any minimization work begins. None of them are retryable.

use std::io;

use crate::MintermId;

/// The error type returned by [`minimize`](crate::minimize) and friends
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MinimizationError {
    /// A minterm or don't-care does not fit in the variable count
    ///
    /// Valid ids satisfy `0 <= value < 2^num_vars`.
    #[error(
        "Value {value} is out of range for {num_vars} variable(s): \
         expected a value below 2^{num_vars}"
    )]
    InvalidDomain {
        /// The offending id
        value: MintermId,
        /// The number of variables the id was checked against
        num_vars: usize,
    },

    /// An id appears both as a minterm and as a don't-care
    #[error("Value {value} is listed both as a minterm and as a don't-care")]
    ConflictingInput {
        /// The id present in both lists
        value: MintermId,
    },

    /// An id appears more than once in the same list
    #[error("Value {value} is listed more than once")]
    DuplicateValue {
        /// The repeated id
        value: MintermId,
    },

    /// More variables than a term can encode
    #[error("Cannot minimize over {requested} variables (at most {max} are supported)")]
    TooManyVariables {
        /// Number of variables supplied
        requested: usize,
        /// Supported maximum
        max: usize,
    },

    /// A term handed to the elimination engine has the wrong number of positions
    #[error("Term has {found} position(s) but {expected} variable(s) were declared")]
    WidthMismatch {
        /// The declared variable count
        expected: usize,
        /// Positions in the offending term
        found: usize,
    },

    /// Inconsistent [`MinimizerConfig`](crate::MinimizerConfig) values
    #[error("Invalid minimizer configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration
        message: String,
    },
}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
