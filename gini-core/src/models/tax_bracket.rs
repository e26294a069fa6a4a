use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a progressive schedule.
///
/// `width` is the size of the band, not an absolute threshold: widths are
/// accumulated in table order to find where each band ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub width: i64,
    /// Percentage, nominally 0–100.
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        width: i64,
        rate: Decimal,
    ) -> Self {
        Self { width, rate }
    }
}

/// Ordered bracket table, applied front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    /// Builds a table from `(width, whole-percent rate)` pairs.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(width, rate)| TaxBracket::new(width, Decimal::from(rate)))
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxBracket> {
        self.brackets.iter()
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    pub fn as_slice(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl From<Vec<TaxBracket>> for BracketTable {
    fn from(brackets: Vec<TaxBracket>) -> Self {
        Self::new(brackets)
    }
}

impl<'a> IntoIterator for &'a BracketTable {
    type Item = &'a TaxBracket;
    type IntoIter = std::slice::Iter<'a, TaxBracket>;

    fn into_iter(self) -> Self::IntoIter {
        self.brackets.iter()
    }
}
