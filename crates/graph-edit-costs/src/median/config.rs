//! Convergence settings for the geometric-median solver.

use serde::{Deserialize, Serialize};

/// Default convergence threshold on the per-iteration estimate change.
pub const DEFAULT_EPSILON: f64 = 0.0001;

/// Default hard cap on Weiszfeld iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Convergence settings for [`GeometricMedianSolver`].
///
/// [`GeometricMedianSolver`]: crate::median::GeometricMedianSolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianConfig {
    /// Stop when the summed absolute change of the estimate across all
    /// attribute dimensions drops to this value or below.
    /// Default: 0.0001
    pub epsilon: f64,

    /// Hard cap on iterations. Bounds worst-case latency per call to this
    /// many passes over the input; past the cap the estimate is returned
    /// as a best-effort approximation.
    /// Default: 100
    pub max_iterations: usize,
}

impl Default for MedianConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_config_default() {
        let config = MedianConfig::default();
        assert_eq!(config.epsilon, 0.0001);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = MedianConfig {
            epsilon: 1e-6,
            max_iterations: 250,
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: MedianConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
