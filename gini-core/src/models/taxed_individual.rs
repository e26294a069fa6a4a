use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxedIndividual {
    pub income: i64,
    pub tax: i64,
    pub income_after_tax: i64,
}
