//! Progressive tax for a single individual.
//!
//! A bracket table is a list of `(width, rate)` pairs. Widths are consumed
//! cumulatively: the engine keeps a running `bracket_floor` and, for each
//! bracket in order,
//!
//! 1. checks whether income remains above `bracket_floor + width`;
//! 2. if so, raises the floor by `width` and taxes everything at or above
//!    the new floor at the bracket's rate;
//! 3. otherwise stops. Income inside the first bracket that is not fully
//!    crossed is never taxed at that bracket's rate.
//!
//! Each taxed amount is truncated toward zero before it is added.
//!
//! # Example
//!
//! ```
//! use gini_core::BracketTable;
//! use gini_core::calculations::TaxBracketEngine;
//!
//! let table = BracketTable::from_pairs(&[(50000, 30), (350000, 20), (300000, 15)]);
//! let engine = TaxBracketEngine::new(&table).unwrap();
//!
//! let taxed = engine.calculate(500000).unwrap();
//!
//! assert_eq!(taxed.tax, 155000);
//! assert_eq!(taxed.income_after_tax, 345000);
//! ```

use rust_decimal::Decimal;
use tracing::{trace, warn};

use super::CalculationError;
use super::common::percent_of;
use crate::{BracketTable, TaxedIndividual};

/// Calculator for one bracket table.
///
/// The table is borrowed for the engine's lifetime and never modified.
#[derive(Debug, Clone)]
pub struct TaxBracketEngine<'a> {
    brackets: &'a BracketTable,
}

impl<'a> TaxBracketEngine<'a> {
    /// Validates `brackets` and wraps them in an engine.
    ///
    /// Rates outside `[0, 100]` are accepted and logged; they scale the tax
    /// linearly.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidParameter`] if any bracket has a
    /// negative width.
    pub fn new(brackets: &'a BracketTable) -> Result<Self, CalculationError> {
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.width < 0 {
                return Err(CalculationError::invalid(format!(
                    "bracket {index} has negative width {}",
                    bracket.width
                )));
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE_HUNDRED {
                warn!(
                    bracket = index,
                    rate = %bracket.rate,
                    "tax rate outside 0-100 percent; applying as given"
                );
            }
        }

        Ok(Self { brackets })
    }

    /// Taxes one income.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidParameter`] if `income` is negative
    /// or a taxed amount overflows.
    pub fn calculate(
        &self,
        income: i64,
    ) -> Result<TaxedIndividual, CalculationError> {
        if income < 0 {
            return Err(CalculationError::invalid(format!(
                "income must be non-negative, got {income}"
            )));
        }

        let tax = self.total_tax(income)?;

        Ok(TaxedIndividual {
            income,
            tax,
            income_after_tax: income - tax,
        })
    }

    /// Walks the table until the first bracket that is not fully crossed.
    fn total_tax(
        &self,
        income: i64,
    ) -> Result<i64, CalculationError> {
        let mut bracket_floor = 0i64;
        let mut tax = 0i64;

        for bracket in self.brackets {
            // income >= bracket_floor and width >= 0, so neither side overflows.
            if income - bracket_floor - bracket.width <= 0 {
                break;
            }
            bracket_floor += bracket.width;

            let bracket_tax = percent_of(income - bracket_floor, bracket.rate)?;
            trace!(income, bracket_floor, bracket_tax, "crossed bracket");

            tax = tax.checked_add(bracket_tax).ok_or_else(|| {
                CalculationError::invalid(format!("total tax on {income} overflows"))
            })?;
        }

        Ok(tax)
    }
}
