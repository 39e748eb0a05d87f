//! Weiszfeld iteration for the geometric median of attribute vectors.

use tracing::{debug, trace};

use super::config::MedianConfig;
use crate::label::AttributeVector;

/// Outcome of a geometric-median computation.
///
/// Hitting the iteration cap is reported through [`converged`], never as an
/// error: the estimate is still the best approximation reached.
///
/// [`converged`]: MedianEstimate::converged
#[derive(Debug, Clone, PartialEq)]
pub struct MedianEstimate {
    /// The final estimate, one value per attribute key.
    pub point: AttributeVector,
    /// Number of estimate-update passes applied. Zero when the initial
    /// mean was already exact (all input points identical).
    pub iterations: usize,
    /// Whether the estimate change dropped below the configured epsilon
    /// (or the estimate became exact) before the iteration cap.
    pub converged: bool,
}

/// Weiszfeld solver for the 1-median of equal-dimension real vectors.
///
/// Given a collection of points sharing one attribute key set, finds the
/// point minimizing the sum of Euclidean distances to all of them. The
/// solver is stateless between calls; each invocation owns its working
/// estimate, so a shared solver is safe for concurrent use.
///
/// Key-set equality across the input points is a caller precondition. The
/// cost models in [`crate::costs`] enforce it while decoding labels.
///
/// # Example
///
/// ```
/// use graph_edit_costs::{AttributeVector, GeometricMedianSolver};
///
/// let a: AttributeVector = [("x".to_string(), 0.0)].into_iter().collect();
/// let b: AttributeVector = [("x".to_string(), 10.0)].into_iter().collect();
///
/// let estimate = GeometricMedianSolver::default().solve(&[a, b]);
/// assert!(estimate.converged);
/// assert!((estimate.point["x"] - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeometricMedianSolver {
    config: MedianConfig,
}

impl GeometricMedianSolver {
    /// Creates a solver with the given convergence settings.
    pub fn new(config: MedianConfig) -> Self {
        Self { config }
    }

    /// The solver's convergence settings.
    pub fn config(&self) -> &MedianConfig {
        &self.config
    }

    /// Computes the geometric median of `points`.
    ///
    /// Starts from the component-wise arithmetic mean and applies
    /// inverse-distance-weighted updates until the estimate change drops
    /// to `epsilon`, the estimate becomes exact, or `max_iterations` is
    /// reached, whichever comes first.
    ///
    /// An empty input yields an empty estimate; callers that need a
    /// different empty-collection policy must handle it before calling.
    pub fn solve(&self, points: &[AttributeVector]) -> MedianEstimate {
        if points.is_empty() {
            return MedianEstimate {
                point: AttributeVector::new(),
                iterations: 0,
                converged: true,
            };
        }

        let mut estimate = component_mean(points);

        for iteration in 0..self.config.max_iterations {
            let mut numerator: AttributeVector =
                estimate.keys().map(|key| (key.clone(), 0.0)).collect();
            let mut denominator = 0.0;

            for point in points {
                let norm = distance(point, &estimate);
                // Classical Weiszfeld singularity handling: a point sitting
                // exactly on the estimate contributes no inverse-distance
                // weight this pass.
                if norm == 0.0 {
                    continue;
                }
                let weight = 1.0 / norm;
                for (key, slot) in numerator.iter_mut() {
                    *slot += value_at(point, key) * weight;
                }
                denominator += weight;
            }

            if denominator == 0.0 {
                // Every input point coincides with the estimate, which
                // makes it exact; further iteration cannot improve it.
                debug!(iterations = iteration, "all points coincide with estimate");
                return MedianEstimate {
                    point: estimate,
                    iterations: iteration,
                    converged: true,
                };
            }

            let mut delta = 0.0;
            for (key, slot) in estimate.iter_mut() {
                let next = numerator[key] / denominator;
                delta += (next - *slot).abs();
                *slot = next;
            }
            trace!(iteration, delta, "weiszfeld update");

            if delta <= self.config.epsilon {
                debug!(iterations = iteration + 1, delta, "median estimate converged");
                return MedianEstimate {
                    point: estimate,
                    iterations: iteration + 1,
                    converged: true,
                };
            }
        }

        debug!(
            max_iterations = self.config.max_iterations,
            "iteration cap reached, returning best-effort estimate"
        );
        MedianEstimate {
            point: estimate,
            iterations: self.config.max_iterations,
            converged: false,
        }
    }
}

/// Component-wise arithmetic mean, keyed by the first point's attributes.
fn component_mean(points: &[AttributeVector]) -> AttributeVector {
    let count = points.len() as f64;
    let mut mean: AttributeVector = points[0].keys().map(|key| (key.clone(), 0.0)).collect();
    for point in points {
        for (key, slot) in mean.iter_mut() {
            *slot += value_at(point, key);
        }
    }
    for slot in mean.values_mut() {
        *slot /= count;
    }
    mean
}

/// Euclidean distance from `point` to `estimate` over the estimate's keys.
fn distance(point: &AttributeVector, estimate: &AttributeVector) -> f64 {
    estimate
        .iter()
        .map(|(key, center)| {
            let diff = value_at(point, key) - center;
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Key parity across points is a caller-enforced precondition; a missing
/// key would have failed label decoding before reaching the solver.
fn value_at(point: &AttributeVector, key: &str) -> f64 {
    point.get(key).copied().unwrap_or(0.0)
}
