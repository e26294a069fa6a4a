use serde::{Deserialize, Serialize};

/// Chart-ready Lorenz curve points.
///
/// All three vectors start with the `(0, 0)` origin, so each is one element
/// longer than the population they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LorenzCurve {
    /// Population rank share, `(i + 1) / n`.
    pub x: Vec<f64>,
    /// Cumulative income share at each rank.
    pub y: Vec<f64>,
    /// Perfect-equality income share at each rank.
    pub equality: Vec<f64>,
}
