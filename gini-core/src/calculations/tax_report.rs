//! Population-wide tax application and before/after inequality.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::common::percentage;
use super::{CalculationError, GiniCalculator, TaxBracketEngine};
use crate::{BracketTable, TaxedIndividual};

/// Result of taxing every individual in a population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxReport {
    /// One record per input income, in input order.
    pub individuals: Vec<TaxedIndividual>,

    /// Gini coefficient of the incomes as given.
    pub gini_before: f64,

    /// Gini coefficient of the post-tax incomes, re-sorted ascending.
    pub gini_after: f64,

    /// Sum of all pre-tax incomes.
    pub total_income: i64,

    /// Sum of all tax collected.
    pub total_tax: i64,
}

impl TaxReport {
    /// Taxes each income independently, then measures inequality before and
    /// after.
    ///
    /// Both coefficients are measured on ascending copies: the input may be
    /// unsorted, and tax can reorder incomes (an individual just past a
    /// threshold may end up below one just short of it). `individuals` keeps
    /// input order.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::InvalidParameter`] for a malformed table, a
    ///   negative income, or totals that overflow `i64`
    /// - [`CalculationError::DivideByZero`] if either the pre-tax or post-tax
    ///   incomes sum to zero
    pub fn build(
        incomes: &[i64],
        brackets: &BracketTable,
    ) -> Result<Self, CalculationError> {
        let engine = TaxBracketEngine::new(brackets)?;

        let individuals = incomes
            .iter()
            .map(|&income| engine.calculate(income))
            .collect::<Result<Vec<_>, _>>()?;

        let total_income = checked_total(incomes.iter().copied(), "income")?;
        let total_tax = checked_total(individuals.iter().map(|individual| individual.tax), "tax")?;

        let mut before_tax = incomes.to_vec();
        before_tax.sort_unstable();
        let gini_before = GiniCalculator::gini_coefficient(&before_tax)?;

        let mut after_tax: Vec<i64> = individuals
            .iter()
            .map(|individual| individual.income_after_tax)
            .collect();
        after_tax.sort_unstable();
        let gini_after = GiniCalculator::gini_coefficient(&after_tax)?;

        if total_tax > total_income {
            warn!(
                total_income,
                total_tax, "tax exceeds total income; post-tax incomes are negative"
            );
        }

        debug!(
            individuals = individuals.len(),
            gini_before, gini_after, total_tax, "applied tax schedule"
        );

        Ok(Self {
            individuals,
            gini_before,
            gini_after,
            total_income,
            total_tax,
        })
    }

    /// Reduction in the Gini coefficient achieved by the tax.
    pub fn gini_change(&self) -> f64 {
        self.gini_before - self.gini_after
    }

    /// [`TaxReport::gini_change`] relative to the pre-tax coefficient.
    ///
    /// `None` when the pre-tax population was perfectly equal.
    pub fn gini_change_percent(&self) -> Option<f64> {
        percentage(self.gini_change(), self.gini_before)
    }

    /// Tax collected as a percentage of total pre-tax income.
    pub fn tax_share_percent(&self) -> Option<f64> {
        percentage(self.total_tax as f64, self.total_income as f64)
    }

    /// Post-tax incomes in input order.
    pub fn incomes_after_tax(&self) -> Vec<i64> {
        self.individuals
            .iter()
            .map(|individual| individual.income_after_tax)
            .collect()
    }
}

fn checked_total(
    mut values: impl Iterator<Item = i64>,
    what: &str,
) -> Result<i64, CalculationError> {
    values
        .try_fold(0i64, i64::checked_add)
        .ok_or_else(|| CalculationError::invalid(format!("total {what} overflows i64")))
}
