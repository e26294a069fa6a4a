//! Gini coefficient and Lorenz curve calculations.
//!
//! The coefficient is computed from two equally long sequences over an
//! ascending income population:
//!
//! | Sequence            | Entry `i`                                  |
//! |---------------------|--------------------------------------------|
//! | Cumulative shares   | `sum(incomes[0..=i]) / sum(incomes)`       |
//! | Equality line       | `(i + 1) / n`                              |
//! | Gap                 | `equality[i] - cumulative[i]`              |
//!
//! and then `gini = sum(gap) / (sum(cumulative) + sum(gap))`.
//!
//! This is a discrete Riemann-sum estimate of twice the area between the
//! equality line and the Lorenz curve, not the trapezoidal formula.
//!
//! # Example
//!
//! ```
//! use gini_core::calculations::GiniCalculator;
//!
//! let gini = GiniCalculator::gini_coefficient(&[10, 20, 30, 40]).unwrap();
//!
//! assert!((gini - 0.2).abs() < 1e-12);
//! ```

use tracing::{debug, warn};

use super::CalculationError;
use crate::LorenzCurve;

/// Stateless Gini coefficient calculator.
///
/// Every function expects incomes sorted ascending. Unsorted input is
/// accepted, logged, and may produce a coefficient outside `[0, 1]`.
pub struct GiniCalculator;

impl GiniCalculator {
    /// Cumulative income share at each rank, from a single running prefix sum.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::DivideByZero`] if the incomes sum to zero,
    /// which includes the empty slice.
    pub fn cumulative_shares(incomes: &[i64]) -> Result<Vec<f64>, CalculationError> {
        let exact_total: i128 = incomes.iter().map(|&income| i128::from(income)).sum();
        if exact_total == 0 {
            return Err(CalculationError::DivideByZero);
        }

        let total: f64 = incomes.iter().map(|&income| income as f64).sum();
        let mut running = 0.0;

        Ok(incomes
            .iter()
            .map(|&income| {
                running += income as f64;
                running / total
            })
            .collect())
    }

    /// The perfect-equality share at each rank of an `n`-person population.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidParameter`] if `n` is zero.
    pub fn equality_line(n: usize) -> Result<Vec<f64>, CalculationError> {
        if n == 0 {
            return Err(CalculationError::invalid(
                "equality line needs at least one individual",
            ));
        }

        let count = n as f64;
        Ok((1..=n).map(|rank| rank as f64 / count).collect())
    }

    /// The Gini coefficient of an ascending income population.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::DivideByZero`] for an empty or zero-sum
    /// population.
    pub fn gini_coefficient(incomes: &[i64]) -> Result<f64, CalculationError> {
        Self::warn_if_unsorted(incomes);

        let cumulative = Self::cumulative_shares(incomes)?;
        let equality = Self::equality_line(incomes.len())?;

        let gap_sum: f64 = equality
            .iter()
            .zip(&cumulative)
            .map(|(equal_share, share)| equal_share - share)
            .sum();
        let cumulative_sum: f64 = cumulative.iter().sum();

        let gini = gap_sum / (cumulative_sum + gap_sum);
        debug!(individuals = incomes.len(), gini, "computed gini coefficient");

        Ok(gini)
    }

    /// Lorenz curve points for charting, each series prefixed with the origin.
    ///
    /// # Errors
    ///
    /// Same as [`GiniCalculator::cumulative_shares`].
    pub fn lorenz_curve(incomes: &[i64]) -> Result<LorenzCurve, CalculationError> {
        Self::warn_if_unsorted(incomes);

        let cumulative = Self::cumulative_shares(incomes)?;
        let equality = Self::equality_line(incomes.len())?;

        let with_origin = |values: &[f64]| {
            std::iter::once(0.0)
                .chain(values.iter().copied())
                .collect::<Vec<_>>()
        };

        Ok(LorenzCurve {
            x: with_origin(&equality),
            y: with_origin(&cumulative),
            equality: with_origin(&equality),
        })
    }

    fn warn_if_unsorted(incomes: &[i64]) {
        if !incomes.is_sorted() {
            warn!(
                individuals = incomes.len(),
                "incomes are not sorted ascending; gini may fall outside [0, 1]"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::{prop_assert, prop_assume, proptest};

    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(
        actual: f64,
        expected: f64,
    ) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_all_approx(
        actual: &[f64],
        expected: &[f64],
    ) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_approx(*a, *e);
        }
    }

    // =========================================================================
    // cumulative_shares tests
    // =========================================================================

    #[test]
    fn cumulative_shares_of_worked_example() {
        let shares = GiniCalculator::cumulative_shares(&[10, 20, 30, 40]).unwrap();

        assert_all_approx(&shares, &[0.10, 0.30, 0.60, 1.00]);
    }

    #[test]
    fn cumulative_shares_rejects_zero_total() {
        let result = GiniCalculator::cumulative_shares(&[0, 0, 0]);

        assert_eq!(result, Err(CalculationError::DivideByZero));
    }

    #[test]
    fn cumulative_shares_rejects_empty_population() {
        let result = GiniCalculator::cumulative_shares(&[]);

        assert_eq!(result, Err(CalculationError::DivideByZero));
    }

    #[test]
    fn cumulative_shares_keeps_leading_zeros() {
        let shares = GiniCalculator::cumulative_shares(&[0, 0, 5, 15]).unwrap();

        assert_all_approx(&shares, &[0.0, 0.0, 0.25, 1.0]);
    }

    // =========================================================================
    // equality_line tests
    // =========================================================================

    #[test]
    fn equality_line_of_four() {
        let line = GiniCalculator::equality_line(4).unwrap();

        assert_eq!(line, vec![0.25, 0.50, 0.75, 1.00]);
    }

    #[test]
    fn equality_line_rejects_zero_individuals() {
        let result = GiniCalculator::equality_line(0);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn equality_line_ends_exactly_at_one() {
        for n in [1, 3, 7, 10, 999, 12345] {
            let line = GiniCalculator::equality_line(n).unwrap();

            assert_eq!(line.last().copied(), Some(1.0), "n = {n}");
        }
    }

    #[test]
    fn equality_line_is_strictly_increasing() {
        let line = GiniCalculator::equality_line(500).unwrap();

        assert!(line.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // =========================================================================
    // gini_coefficient tests
    // =========================================================================

    #[test]
    fn gini_of_worked_example_is_one_fifth() {
        let gini = GiniCalculator::gini_coefficient(&[10, 20, 30, 40]).unwrap();

        assert_approx(gini, 0.2);
    }

    #[test]
    fn gini_of_equal_incomes_is_zero() {
        let gini = GiniCalculator::gini_coefficient(&[5000; 50]).unwrap();

        assert_approx(gini, 0.0);
    }

    #[test]
    fn gini_of_single_positive_income_is_zero() {
        let gini = GiniCalculator::gini_coefficient(&[42]).unwrap();

        assert_approx(gini, 0.0);
    }

    #[test]
    fn gini_of_single_zero_income_is_divide_by_zero() {
        let result = GiniCalculator::gini_coefficient(&[0]);

        assert_eq!(result, Err(CalculationError::DivideByZero));
    }

    #[test]
    fn gini_of_empty_population_is_divide_by_zero() {
        let result = GiniCalculator::gini_coefficient(&[]);

        assert_eq!(result, Err(CalculationError::DivideByZero));
    }

    #[test]
    fn gini_of_concentrated_income_grows_with_population() {
        let mut previous = 0.0;
        for n in [2usize, 10, 100, 1000] {
            let mut incomes = vec![0; n - 1];
            incomes.push(1_000_000);

            let gini = GiniCalculator::gini_coefficient(&incomes).unwrap();

            assert!(gini > previous, "n = {n}: {gini} <= {previous}");
            previous = gini;
        }
        assert!(previous > 0.99);
    }

    #[test]
    fn gini_is_invariant_under_scaling() {
        let incomes = [12, 250, 3100, 47000, 47001, 500000];
        let scaled: Vec<i64> = incomes.iter().map(|income| income * 10).collect();

        let gini = GiniCalculator::gini_coefficient(&incomes).unwrap();
        let scaled_gini = GiniCalculator::gini_coefficient(&scaled).unwrap();

        assert_approx(gini, scaled_gini);
    }

    // =========================================================================
    // lorenz_curve tests
    // =========================================================================

    #[test]
    fn lorenz_curve_starts_at_origin() {
        let curve = GiniCalculator::lorenz_curve(&[10, 20, 30, 40]).unwrap();

        assert_eq!(curve.x.len(), 5);
        assert_eq!(curve.x[0], 0.0);
        assert_eq!(curve.y[0], 0.0);
        assert_eq!(curve.equality[0], 0.0);
    }

    #[test]
    fn lorenz_curve_tracks_shares() {
        let curve = GiniCalculator::lorenz_curve(&[10, 20, 30, 40]).unwrap();

        assert_all_approx(&curve.y, &[0.0, 0.10, 0.30, 0.60, 1.00]);
        assert_eq!(curve.x, curve.equality);
    }

    // =========================================================================
    // properties
    // =========================================================================

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_last_cumulative_share_is_one(
            mut incomes in proptest::collection::vec(0i64..10_000_000, 1..300)
        ) {
            prop_assume!(incomes.iter().any(|&income| income > 0));
            incomes.sort_unstable();

            let shares = GiniCalculator::cumulative_shares(&incomes).unwrap();

            prop_assert!((shares[shares.len() - 1] - 1.0).abs() <= EPS);
        }

        #[test]
        fn prop_sorted_gini_stays_in_unit_interval(
            mut incomes in proptest::collection::vec(0i64..10_000_000, 1..300)
        ) {
            prop_assume!(incomes.iter().any(|&income| income > 0));
            incomes.sort_unstable();

            let gini = GiniCalculator::gini_coefficient(&incomes).unwrap();

            prop_assert!(gini > -EPS && gini < 1.0 + EPS, "gini {}", gini);
        }

        #[test]
        fn prop_gini_scale_invariant(
            mut incomes in proptest::collection::vec(0i64..1_000_000, 1..200),
            factor in 2i64..50
        ) {
            prop_assume!(incomes.iter().any(|&income| income > 0));
            incomes.sort_unstable();
            let scaled: Vec<i64> = incomes.iter().map(|income| income * factor).collect();

            let gini = GiniCalculator::gini_coefficient(&incomes).unwrap();
            let scaled_gini = GiniCalculator::gini_coefficient(&scaled).unwrap();

            prop_assert!((gini - scaled_gini).abs() <= 1e-9);
        }
    }
}
