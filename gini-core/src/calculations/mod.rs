//! Income inequality calculations.
//!
//! The pipeline runs one way:
//!
//! ```text
//! IncomeGenerator -> GiniCalculator (pre-tax)
//!                 -> TaxBracketEngine (per individual)
//!                 -> GiniCalculator (post-tax, via TaxReport)
//! ```
//!
//! The free functions in this module are the entry points used by front ends;
//! the component types are public for callers that need the intermediate
//! sequences.

pub mod common;
mod error;
pub mod gini;
pub mod income_generator;
pub mod tax_brackets;
pub mod tax_report;

pub use error::CalculationError;
pub use gini::GiniCalculator;
pub use income_generator::IncomeGenerator;
pub use tax_brackets::TaxBracketEngine;
pub use tax_report::TaxReport;

use rand::Rng;

use crate::{BracketTable, GenerationMode, Population};

/// Validates `mode` and draws one population from `rng`.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidParameter`] for invalid generation
/// parameters.
pub fn generate_population<R: Rng + ?Sized>(
    mode: GenerationMode,
    rng: &mut R,
) -> Result<Population, CalculationError> {
    Ok(IncomeGenerator::new(mode)?.generate(rng))
}

/// Gini coefficient of an ascending income sequence.
///
/// # Errors
///
/// Returns [`CalculationError::DivideByZero`] for an empty or zero-sum
/// population.
pub fn compute_gini(incomes: &[i64]) -> Result<f64, CalculationError> {
    GiniCalculator::gini_coefficient(incomes)
}

/// Taxes every income with `brackets` and reports Gini before and after.
///
/// # Errors
///
/// See [`TaxReport::build`].
pub fn apply_tax_schedule(
    incomes: &[i64],
    brackets: &BracketTable,
) -> Result<TaxReport, CalculationError> {
    TaxReport::build(incomes, brackets)
}
