mod generation;
mod lorenz_curve;
mod population;
mod tax_bracket;
mod taxed_individual;

pub use generation::{GenerationMode, IncomeBand};
pub use lorenz_curve::LorenzCurve;
pub use population::Population;
pub use tax_bracket::{BracketTable, TaxBracket};
pub use taxed_individual::TaxedIndividual;
