//! Synthetic income population generation.
//!
//! An [`IncomeGenerator`] is built from a validated [`GenerationMode`] and
//! draws a fresh population from any caller-supplied random source each time
//! [`IncomeGenerator::generate`] is called. Seeding that source makes the
//! output reproducible.
//!
//! # Example
//!
//! ```
//! use gini_core::calculations::IncomeGenerator;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Deciles of 100,000 with 20 people in each.
//! let generator = IncomeGenerator::banded(10, 100_000, vec![20; 10]).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! let population = generator.generate(&mut rng);
//!
//! assert_eq!(population.len(), 200);
//! assert!(population.incomes().is_sorted());
//! ```

use rand::Rng;
use tracing::debug;

use super::CalculationError;
use crate::{GenerationMode, IncomeBand, Population};

/// A validated population generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeGenerator {
    bands: Vec<IncomeBand>,
}

impl IncomeGenerator {
    /// Validates `mode` and prepares the concrete ranges to draw from.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidParameter`] if:
    /// - `groups` or `group_span` is not positive
    /// - `group_sizes` does not hold exactly `groups` entries, or any is negative
    /// - a flat `count` is not positive
    /// - any range has `min_income > max_income` or a negative size
    pub fn new(mode: GenerationMode) -> Result<Self, CalculationError> {
        match mode {
            GenerationMode::Banded {
                groups,
                group_span,
                group_sizes,
            } => Self::banded(groups, group_span, group_sizes),
            GenerationMode::Flat {
                count,
                min_income,
                max_income,
            } => Self::flat(count, min_income, max_income),
            GenerationMode::Ranges { bands } => Self::ranges(bands),
        }
    }

    /// Contiguous bands: band `k` covers `[k * group_span, (k + 1) * group_span]`.
    pub fn banded(
        groups: i64,
        group_span: i64,
        group_sizes: Vec<i64>,
    ) -> Result<Self, CalculationError> {
        if groups <= 0 {
            return Err(CalculationError::invalid(format!(
                "groups must be positive, got {groups}"
            )));
        }
        if group_span <= 0 {
            return Err(CalculationError::invalid(format!(
                "group span must be positive, got {group_span}"
            )));
        }
        if group_sizes.len() as i64 != groups {
            return Err(CalculationError::invalid(format!(
                "expected {groups} group sizes, got {}",
                group_sizes.len()
            )));
        }

        let bands = group_sizes
            .into_iter()
            .enumerate()
            .map(|(k, size)| {
                if size < 0 {
                    return Err(CalculationError::invalid(format!(
                        "group {k} has negative size {size}"
                    )));
                }
                let min_income = (k as i64).checked_mul(group_span);
                let max_income = min_income.and_then(|min| min.checked_add(group_span));
                match (min_income, max_income) {
                    (Some(min_income), Some(max_income)) => Ok(IncomeBand {
                        min_income,
                        max_income,
                        size,
                    }),
                    _ => Err(CalculationError::invalid(format!(
                        "group {k} with span {group_span} overflows the income range"
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bands })
    }

    /// A single `[min_income, max_income]` range holding `count` individuals.
    pub fn flat(
        count: i64,
        min_income: i64,
        max_income: i64,
    ) -> Result<Self, CalculationError> {
        if count <= 0 {
            return Err(CalculationError::invalid(format!(
                "count must be positive, got {count}"
            )));
        }

        Self::ranges(vec![IncomeBand {
            min_income,
            max_income,
            size: count,
        }])
    }

    /// Arbitrary ranges, each with its own head count.
    pub fn ranges(bands: Vec<IncomeBand>) -> Result<Self, CalculationError> {
        for (index, band) in bands.iter().enumerate() {
            if band.min_income > band.max_income {
                return Err(CalculationError::invalid(format!(
                    "band {index}: min income {} exceeds max income {}",
                    band.min_income, band.max_income
                )));
            }
            if band.size < 0 {
                return Err(CalculationError::invalid(format!(
                    "band {index} has negative size {}",
                    band.size
                )));
            }
        }

        Ok(Self { bands })
    }

    /// The concrete ranges this generator draws from.
    pub fn bands(&self) -> &[IncomeBand] {
        &self.bands
    }

    /// Number of individuals every generated population holds.
    pub fn population_size(&self) -> usize {
        self.bands.iter().map(|band| band.size as usize).sum()
    }

    /// Draws a new population, sorted ascending.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Population {
        let mut incomes = Vec::with_capacity(self.population_size());

        for band in &self.bands {
            incomes.extend(
                (0..band.size).map(|_| rng.gen_range(band.min_income..=band.max_income)),
            );
        }

        debug!(
            bands = self.bands.len(),
            individuals = incomes.len(),
            "generated income population"
        );

        Population::from_incomes(incomes)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn banded_rejects_zero_groups() {
        let result = IncomeGenerator::banded(0, 100, vec![]);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn banded_rejects_negative_groups() {
        let result = IncomeGenerator::banded(-3, 100, vec![1, 1, 1]);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn banded_rejects_non_positive_span() {
        let result = IncomeGenerator::banded(2, 0, vec![1, 1]);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn banded_rejects_negative_group_size() {
        let result = IncomeGenerator::banded(3, 100, vec![5, -1, 5]);

        assert_eq!(
            result,
            Err(CalculationError::InvalidParameter(
                "group 1 has negative size -1".to_string()
            ))
        );
    }

    #[test]
    fn banded_rejects_size_count_mismatch() {
        let result = IncomeGenerator::banded(3, 100, vec![5, 5]);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn banded_rejects_overflowing_span() {
        let result = IncomeGenerator::banded(3, i64::MAX / 2, vec![1, 1, 1]);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn flat_rejects_inverted_range() {
        let result = IncomeGenerator::flat(10, 500, 100);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn flat_rejects_zero_count() {
        let result = IncomeGenerator::flat(0, 100, 500);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn ranges_rejects_negative_size() {
        let result = IncomeGenerator::ranges(vec![IncomeBand {
            min_income: 0,
            max_income: 10,
            size: -2,
        }]);

        assert!(matches!(result, Err(CalculationError::InvalidParameter(_))));
    }

    #[test]
    fn new_dispatches_on_mode() {
        let generator = IncomeGenerator::new(GenerationMode::Banded {
            groups: 2,
            group_span: 1000,
            group_sizes: vec![3, 4],
        })
        .unwrap();

        assert_eq!(
            generator.bands(),
            &[
                IncomeBand {
                    min_income: 0,
                    max_income: 1000,
                    size: 3
                },
                IncomeBand {
                    min_income: 1000,
                    max_income: 2000,
                    size: 4
                },
            ]
        );
    }

    // =========================================================================
    // Generation tests
    // =========================================================================

    #[test]
    fn banded_population_size_is_sum_of_group_sizes() {
        let generator =
            IncomeGenerator::banded(10, 100_000, vec![40, 50, 60, 20, 30, 40, 30, 50, 40, 20])
                .unwrap();

        let population = generator.generate(&mut rng());

        assert_eq!(population.len(), 380);
    }

    #[test]
    fn banded_incomes_stay_within_bands() {
        let generator = IncomeGenerator::banded(3, 100, vec![0, 0, 25]).unwrap();

        let population = generator.generate(&mut rng());

        assert!(population.incomes().iter().all(|&income| (200..=300).contains(&income)));
    }

    #[test]
    fn banded_with_all_zero_sizes_is_empty() {
        let generator = IncomeGenerator::banded(4, 100, vec![0; 4]).unwrap();

        let population = generator.generate(&mut rng());

        assert!(population.is_empty());
    }

    #[test]
    fn flat_incomes_stay_within_range_and_sorted() {
        let generator = IncomeGenerator::flat(500, 50_000, 2_000_000).unwrap();

        let population = generator.generate(&mut rng());

        assert_eq!(population.len(), 500);
        assert!(population.incomes().is_sorted());
        assert!(
            population
                .incomes()
                .iter()
                .all(|&income| (50_000..=2_000_000).contains(&income))
        );
    }

    #[test]
    fn flat_with_degenerate_range_repeats_value() {
        let generator = IncomeGenerator::flat(5, 777, 777).unwrap();

        let population = generator.generate(&mut rng());

        assert_eq!(population.incomes(), &[777; 5]);
    }

    #[test]
    fn same_seed_gives_same_population() {
        let generator = IncomeGenerator::flat(100, 0, 1_000_000).unwrap();

        let first = generator.generate(&mut ChaCha8Rng::seed_from_u64(9));
        let second = generator.generate(&mut ChaCha8Rng::seed_from_u64(9));

        assert_eq!(first, second);
    }

    #[test]
    fn ranges_are_merged_and_sorted() {
        let generator = IncomeGenerator::ranges(vec![
            IncomeBand {
                min_income: 500,
                max_income: 600,
                size: 10,
            },
            IncomeBand {
                min_income: 0,
                max_income: 100,
                size: 10,
            },
        ])
        .unwrap();

        let population = generator.generate(&mut rng());

        assert_eq!(population.len(), 20);
        assert!(population.incomes().is_sorted());
        assert!(population.incomes()[..10].iter().all(|&income| income <= 100));
    }
}
