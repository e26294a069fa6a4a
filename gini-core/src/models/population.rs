use serde::{Deserialize, Serialize};

/// An income population, always held in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<i64>", into = "Vec<i64>")]
pub struct Population {
    incomes: Vec<i64>,
}

impl Population {
    /// Takes ownership of `incomes` and sorts them ascending.
    pub fn from_incomes(mut incomes: Vec<i64>) -> Self {
        incomes.sort_unstable();
        Self { incomes }
    }

    pub fn incomes(&self) -> &[i64] {
        &self.incomes
    }

    pub fn len(&self) -> usize {
        self.incomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
    }

    /// Sum of all incomes, widened so it cannot overflow.
    pub fn total(&self) -> i128 {
        self.incomes.iter().map(|&income| i128::from(income)).sum()
    }

    pub fn into_incomes(self) -> Vec<i64> {
        self.incomes
    }
}

impl From<Vec<i64>> for Population {
    fn from(incomes: Vec<i64>) -> Self {
        Self::from_incomes(incomes)
    }
}

impl From<Population> for Vec<i64> {
    fn from(population: Population) -> Self {
        population.incomes
    }
}

impl AsRef<[i64]> for Population {
    fn as_ref(&self) -> &[i64] {
        &self.incomes
    }
}
