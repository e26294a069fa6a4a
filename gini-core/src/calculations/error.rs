use thiserror::Error;

/// Errors returned by the population, Gini and tax calculations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// A count, span, range, income or bracket table was out of bounds.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Gini is undefined for a population whose incomes sum to zero.
    #[error("division by zero: total income is zero")]
    DivideByZero,
}

impl CalculationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
