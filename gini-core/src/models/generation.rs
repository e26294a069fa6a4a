use serde::{Deserialize, Serialize};

/// An explicit income range with its own head count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBand {
    pub min_income: i64,
    pub max_income: i64,
    pub size: i64,
}

/// How a synthetic population is drawn.
///
/// Every mode draws uniformly with both range endpoints inclusive and
/// returns the population sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationMode {
    /// `groups` contiguous bands of width `group_span`; band `k` covers
    /// `[k * group_span, (k + 1) * group_span]` and holds `group_sizes[k]`
    /// individuals.
    Banded {
        groups: i64,
        group_span: i64,
        group_sizes: Vec<i64>,
    },

    /// `count` individuals drawn from one `[min_income, max_income]` range.
    Flat {
        count: i64,
        min_income: i64,
        max_income: i64,
    },

    /// Arbitrary, possibly overlapping, ranges.
    Ranges { bands: Vec<IncomeBand> },
}
