//! Plain-text tables printed by the `gini-sim` subcommands.
//!
//! Long populations are sampled: every `n / 9`-th row (at least every row)
//! and always the last one. Shares and coefficients use 3 decimals.

use std::fmt;

use gini_core::presets::Scenario;
use gini_core::{LorenzCurve, TaxReport};

/// Indices of the rows shown for a population of `n`.
pub fn sample_rows(n: usize) -> Vec<usize> {
    let step = (n / 9).max(1);
    let mut rows: Vec<usize> = (0..n).step_by(step).collect();
    if n > 0 && rows.last() != Some(&(n - 1)) {
        rows.push(n - 1);
    }
    rows
}

/// Lorenz table for a generated population, followed by its coefficient.
pub struct LorenzTable<'a> {
    pub incomes: &'a [i64],
    pub curve: &'a LorenzCurve,
    pub gini: f64,
}

impl fmt::Display for LorenzTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:>6}  {:>12}  {:>10}  {:>10}",
            "#", "income", "cum. share", "equality"
        )?;
        for i in sample_rows(self.incomes.len()) {
            // Curve series carry a leading origin point.
            writeln!(
                f,
                "{:>6}  {:>12}  {:>10.3}  {:>10.3}",
                i + 1,
                self.incomes[i],
                self.curve.y[i + 1],
                self.curve.equality[i + 1]
            )?;
        }
        writeln!(
            f,
            "{} individuals, Gini coefficient {:.3}",
            self.incomes.len(),
            self.gini
        )
    }
}

/// Sampled per-individual tax rows and the before/after summary.
pub struct TaxSummary<'a> {
    pub report: &'a TaxReport,
}

impl fmt::Display for TaxSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let report = self.report;

        writeln!(
            f,
            "{:>6}  {:>12}  {:>12}  {:>12}",
            "#", "income", "tax", "after tax"
        )?;
        for i in sample_rows(report.individuals.len()) {
            let individual = &report.individuals[i];
            writeln!(
                f,
                "{:>6}  {:>12}  {:>12}  {:>12}",
                i + 1,
                individual.income,
                individual.tax,
                individual.income_after_tax
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Gini before tax  {:.3}", report.gini_before)?;
        writeln!(f, "Gini after tax   {:.3}", report.gini_after)?;
        match report.gini_change_percent() {
            Some(pct) => writeln!(f, "Change           {:.3} ({pct:.2} %)", report.gini_change())?,
            None => writeln!(f, "Change           {:.3}", report.gini_change())?,
        }
        match report.tax_share_percent() {
            Some(pct) => writeln!(
                f,
                "Total tax        {} of {} ({pct:.2} %)",
                report.total_tax, report.total_income
            ),
            None => writeln!(
                f,
                "Total tax        {} of {}",
                report.total_tax, report.total_income
            ),
        }
    }
}

/// The built-in scenario catalogue.
pub struct ScenarioList<'a> {
    pub scenarios: &'a [Scenario],
}

impl fmt::Display for ScenarioList<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<10}  {:<18}  {:>6}  {:>6}  {:>8}  {:<8}  {:>5}",
            "key", "name", "people", "groups", "span", "shape", "gini"
        )?;
        for scenario in self.scenarios {
            writeln!(
                f,
                "{:<10}  {:<18}  {:>6}  {:>6}  {:>8}  {:<8}  {:>5.2}",
                scenario.key,
                scenario.name,
                scenario.population,
                scenario.groups,
                scenario.group_span,
                scenario.shape.as_str(),
                scenario.expected_gini
            )?;
            writeln!(f, "{:<10}  {}", "", scenario.description)?;
        }
        Ok(())
    }
}
