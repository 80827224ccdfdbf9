//! Structural weight and load-to-weight figures of merit.

use serde::{Deserialize, Serialize};

use crate::errors::{Metric, MetricsError};
use crate::geometry::{Bar, Point};
use crate::settings::TrussSettings;
use crate::solver::Solution;

/// Weight and efficiency scores derived from a solved truss.
///
/// A ratio is `None` when its denominator is zero, for example when no bar is in tension;
/// the accessors report that case as [`MetricsError::DegenerateMetric`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Sum of density times length over all bars.
    pub weight: f64,
    /// `K / (fmax * weight)`.
    load_to_weight: Option<f64>,
    /// `K / (fmax_tension * weight)`.
    load_to_weight_tension: Option<f64>,
}

impl Metrics {
    /// Score the solved forces against the weight of the structure.
    #[must_use]
    pub fn evaluate(
        nodes: &[Point],
        bars: &[Bar],
        solution: &Solution,
        settings: &TrussSettings,
    ) -> Self {
        let weight = total_weight(nodes, bars, settings.density);
        Self {
            weight,
            load_to_weight: ratio(settings.score_scale, solution.fmax * weight),
            load_to_weight_tension: ratio(settings.score_scale, solution.fmax_tension * weight),
        }
    }

    /// Load-to-weight score based on the largest force magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::DegenerateMetric`] when the peak force or the weight is zero.
    pub fn load_to_weight(&self) -> Result<f64, MetricsError> {
        self.load_to_weight
            .ok_or(MetricsError::DegenerateMetric {
                metric: Metric::LoadToWeight,
            })
    }

    /// Load-to-weight score based on the largest tensile force.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::DegenerateMetric`] when no bar is in tension or the weight
    /// is zero.
    pub fn load_to_weight_tension(&self) -> Result<f64, MetricsError> {
        self.load_to_weight_tension
            .ok_or(MetricsError::DegenerateMetric {
                metric: Metric::LoadToWeightTension,
            })
    }
}

/// Total weight of the bars for a uniform mass per unit length.
///
/// # Examples
/// ```
/// use trussjoints::{point, total_weight, Bar};
///
/// let nodes = [point(0.0, 0.0), point(3.0, 0.0), point(3.0, 4.0)];
/// let bars = [Bar::new(0, 1), Bar::new(1, 2), Bar::new(2, 0)];
/// assert_eq!(total_weight(&nodes, &bars, 1.0), 12.0);
/// ```
#[must_use]
pub fn total_weight(nodes: &[Point], bars: &[Bar], density: f64) -> f64 {
    bars.iter()
        .map(|bar| density * nodes[bar.a].distance_to(nodes[bar.b]))
        .sum()
}

fn ratio(scale: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(scale / denominator)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::point;

    fn right_triangle() -> (Vec<Point>, Vec<Bar>) {
        (
            vec![point(0.0, 0.0), point(3.0, 0.0), point(3.0, 4.0)],
            vec![Bar::new(0, 1), Bar::new(1, 2), Bar::new(2, 0)],
        )
    }

    #[test]
    fn weight_scales_with_density() {
        let (nodes, bars) = right_triangle();
        assert_relative_eq!(total_weight(&nodes, &bars, 2.0), 24.0, epsilon = 1.0e-12);
    }

    #[test]
    fn ratios_use_the_score_scale() {
        let (nodes, bars) = right_triangle();
        let solution = Solution::from_forces(vec![5.0, -10.0, 2.0]);
        let metrics = Metrics::evaluate(&nodes, &bars, &solution, &TrussSettings::default());
        assert_relative_eq!(metrics.weight, 12.0, epsilon = 1.0e-12);
        assert_relative_eq!(
            metrics.load_to_weight().expect("defined"),
            1_000.0 / 120.0,
            epsilon = 1.0e-12
        );
        assert_relative_eq!(
            metrics.load_to_weight_tension().expect("defined"),
            1_000.0 / 60.0,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn zero_tension_is_a_degenerate_metric() {
        let (nodes, bars) = right_triangle();
        let solution = Solution::from_forces(vec![-1.0, -2.0, 0.0]);
        let metrics = Metrics::evaluate(&nodes, &bars, &solution, &TrussSettings::default());
        assert!(metrics.load_to_weight().is_ok());
        assert_eq!(
            metrics.load_to_weight_tension(),
            Err(MetricsError::DegenerateMetric {
                metric: Metric::LoadToWeightTension
            })
        );
    }

    #[test]
    fn unloaded_truss_has_no_scores() {
        let (nodes, bars) = right_triangle();
        let solution = Solution::from_forces(vec![0.0; 3]);
        let metrics = Metrics::evaluate(&nodes, &bars, &solution, &TrussSettings::default());
        assert!(metrics.load_to_weight().is_err());
        assert!(metrics.load_to_weight_tension().is_err());
    }
}
