pub mod calculations;
pub mod models;
pub mod presets;

pub use calculations::{
    CalculationError, TaxReport, apply_tax_schedule, compute_gini, generate_population,
};
pub use models::*;
