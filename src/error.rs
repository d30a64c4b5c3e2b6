use polars::error::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesignError {
    #[error("Invalid base '{base}' at position {position}")]
    InvalidBase { position: usize, base: String },

    #[error("Dimension mismatch: sequence encodes to {found} positions, PWM has {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Empty sequence")]
    EmptySequence,

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Type alias for Result with DesignError
pub type Result<T> = std::result::Result<T, DesignError>;

impl DesignError {
    /// Create a new InvalidBase error
    pub fn invalid_base(position: usize, base: impl ToString) -> Self {
        DesignError::InvalidBase {
            position,
            base: base.to_string(),
        }
    }
}
