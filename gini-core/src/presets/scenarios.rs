//! Built-in country scenarios.
//!
//! Each scenario bundles a synthetic population (size, groups, span, shape)
//! with a bracket table and the real-world Gini coefficient it is meant to
//! resemble.

use serde::Serialize;

use super::DistributionShape;
use crate::calculations::CalculationError;
use crate::{BracketTable, GenerationMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    /// Lookup key, e.g. `denmark`.
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub population: i64,
    pub groups: i64,
    pub group_span: i64,
    pub shape: DistributionShape,
    /// `(width, whole-percent rate)` pairs.
    pub brackets: &'static [(i64, i64)],
    /// Reference Gini coefficient for the real country.
    pub expected_gini: f64,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "denmark",
        name: "Denmark",
        description: "Danish income distribution with progressive tax",
        population: 200,
        groups: 10,
        group_span: 100_000,
        shape: DistributionShape::Normal,
        brackets: &[(50_000, 8), (200_000, 12), (300_000, 15), (999_999, 15)],
        expected_gini: 0.28,
    },
    Scenario {
        key: "usa",
        name: "USA",
        description: "American income distribution with moderate tax",
        population: 200,
        groups: 10,
        group_span: 120_000,
        shape: DistributionShape::Skewed,
        brackets: &[(80_000, 10), (150_000, 12), (250_000, 22), (999_999, 24)],
        expected_gini: 0.41,
    },
    Scenario {
        key: "sweden",
        name: "Sweden",
        description: "Swedish income distribution with high progressive tax",
        population: 200,
        groups: 10,
        group_span: 95_000,
        shape: DistributionShape::Normal,
        brackets: &[(45_000, 7), (180_000, 13), (320_000, 20), (999_999, 25)],
        expected_gini: 0.27,
    },
    Scenario {
        key: "equal",
        name: "Perfect equality",
        description: "Theoretical, perfectly even distribution",
        population: 200,
        groups: 10,
        group_span: 10_000,
        shape: DistributionShape::Equal,
        brackets: &[(999_999, 0)],
        expected_gini: 0.0,
    },
];

impl Scenario {
    /// Every built-in scenario, in display order.
    pub fn all() -> &'static [Scenario] {
        SCENARIOS
    }

    /// Case-insensitive lookup by key.
    pub fn find(key: &str) -> Option<&'static Scenario> {
        SCENARIOS
            .iter()
            .find(|scenario| scenario.key.eq_ignore_ascii_case(key.trim()))
    }

    /// Banded generation parameters with group sizes from [`Scenario::shape`].
    pub fn generation_mode(&self) -> Result<GenerationMode, CalculationError> {
        Ok(GenerationMode::Banded {
            groups: self.groups,
            group_span: self.group_span,
            group_sizes: self.shape.group_sizes(self.population, self.groups)?,
        })
    }

    pub fn bracket_table(&self) -> BracketTable {
        BracketTable::from_pairs(self.brackets)
    }
}
