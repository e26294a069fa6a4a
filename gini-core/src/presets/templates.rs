//! Group-size templates for banded generation.
//!
//! A [`DistributionShape`] spreads a head count over income groups. Weighted
//! shapes are normalised to the requested total:
//!
//! | Shape   | Weight of group `i`                           |
//! |---------|-----------------------------------------------|
//! | Equal   | same count everywhere, remainder to the top   |
//! | Normal  | `exp(-(i - g/2)^2 / (2 * (g/4)^2))`           |
//! | Skewed  | `exp(-i / (g/3))`                             |
//! | Extreme | `exp(-i / (g/5))`                             |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionShape {
    Equal,
    Normal,
    Skewed,
    Extreme,
}

impl DistributionShape {
    pub fn all() -> &'static [DistributionShape] {
        &[
            DistributionShape::Equal,
            DistributionShape::Normal,
            DistributionShape::Skewed,
            DistributionShape::Extreme,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Normal => "normal",
            Self::Skewed => "skewed",
            Self::Extreme => "extreme",
        }
    }

    /// Splits `total_people` over `groups` income groups.
    ///
    /// The result always has `groups` entries summing to `total_people`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidParameter`] if `groups` is not
    /// positive or `total_people` is negative.
    pub fn group_sizes(
        &self,
        total_people: i64,
        groups: i64,
    ) -> Result<Vec<i64>, CalculationError> {
        if groups <= 0 {
            return Err(CalculationError::InvalidParameter(format!(
                "groups must be positive, got {groups}"
            )));
        }
        if total_people < 0 {
            return Err(CalculationError::InvalidParameter(format!(
                "total people must be non-negative, got {total_people}"
            )));
        }

        let count = groups as f64;
        let sizes = match self {
            Self::Equal => equal_sizes(total_people, groups),
            Self::Normal => {
                let mid = count / 2.0;
                let spread = 2.0 * (count / 4.0).powi(2);
                normalize_to_total(
                    (0..groups).map(|i| {
                        let distance = (i as f64 - mid).abs();
                        (-(distance * distance) / spread).exp()
                    }),
                    total_people,
                )
            }
            Self::Skewed => normalize_to_total(
                (0..groups).map(|i| (-(i as f64) / (count / 3.0)).exp()),
                total_people,
            ),
            Self::Extreme => normalize_to_total(
                (0..groups).map(|i| (-(i as f64) / (count / 5.0)).exp()),
                total_people,
            ),
        };

        Ok(sizes)
    }
}

impl fmt::Display for DistributionShape {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionShape {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CalculationError::InvalidParameter(format!("unknown distribution shape '{s}'"))
            })
    }
}

fn equal_sizes(
    total_people: i64,
    groups: i64,
) -> Vec<i64> {
    let per_group = total_people / groups;
    let remainder = (total_people % groups) as usize;
    let mut sizes = vec![per_group; groups as usize];

    for size in sizes.iter_mut().rev().take(remainder) {
        *size += 1;
    }
    sizes
}

/// Largest-remainder apportionment of `total` by `weights`.
///
/// Each group gets the floor of its share; the people left over go one at a
/// time to the groups with the largest fractional parts. Sizes never go
/// negative and always sum to `total`.
fn normalize_to_total(
    weights: impl Iterator<Item = f64>,
    total: i64,
) -> Vec<i64> {
    let shares: Vec<f64> = {
        let weights: Vec<f64> = weights.collect();
        let weight_sum: f64 = weights.iter().sum();
        weights
            .iter()
            .map(|weight| weight / weight_sum * total as f64)
            .collect()
    };

    let mut sizes: Vec<i64> = shares.iter().map(|share| share.floor() as i64).collect();

    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| {
        let frac_a = shares[a] - shares[a].floor();
        let frac_b = shares[b] - shares[b].floor();
        frac_b.total_cmp(&frac_a).then(a.cmp(&b))
    });

    // Float error can leave the floors one unit off in either direction.
    let mut shortfall = total - sizes.iter().sum::<i64>();
    while shortfall > 0 {
        for &i in order.iter().take(shortfall as usize) {
            sizes[i] += 1;
            shortfall -= 1;
        }
    }
    while shortfall < 0 {
        for &i in order.iter().rev() {
            if shortfall == 0 {
                break;
            }
            if sizes[i] > 0 {
                sizes[i] -= 1;
                shortfall += 1;
            }
        }
    }
    sizes
}
