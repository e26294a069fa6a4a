//! Ready-made inputs: group-size templates and country scenarios.

mod scenarios;
mod templates;

pub use scenarios::Scenario;
pub use templates::DistributionShape;
