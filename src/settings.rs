//! Analysis settings shared by construction, solving and metrics.

use serde::{Deserialize, Serialize};

/// How members that span zero distance are treated at construction time.
///
/// Such members arise from a node listing itself as a neighbour or from two distinct
/// nodes sharing a position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroLengthPolicy {
    /// Fail construction with [`GeometryError::ZeroLengthMember`](crate::GeometryError).
    #[default]
    Reject,
    /// Keep the member as an inert column of the equilibrium matrix. Its solved force is
    /// always zero and it adds nothing to the weight.
    PassThrough,
}

/// Tunable constants for a [`Truss`](crate::Truss).
///
/// # Examples
/// ```
/// use trussjoints::{TrussSettings, ZeroLengthPolicy};
///
/// let settings: TrussSettings =
///     serde_json::from_str(r#"{ "density": 7.85, "zero_length": "pass_through" }"#)
///         .expect("valid settings");
/// assert_eq!(settings.density, 7.85);
/// assert_eq!(settings.score_scale, 1_000.0);
/// assert_eq!(settings.zero_length, ZeroLengthPolicy::PassThrough);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrussSettings {
    /// Mass per unit length used for every member.
    pub density: f64,
    /// Scaling constant `K` in the load-to-weight figures of merit.
    pub score_scale: f64,
    /// Singular values below `rcond` times the largest one are treated as zero during
    /// the least-squares solve. `None` uses machine epsilon times the larger matrix
    /// dimension.
    pub rcond: Option<f64>,
    /// Treatment of zero-length members.
    pub zero_length: ZeroLengthPolicy,
}

impl Default for TrussSettings {
    fn default() -> Self {
        Self {
            density: 1.0,
            score_scale: 1_000.0,
            rcond: None,
            zero_length: ZeroLengthPolicy::Reject,
        }
    }
}

impl TrussSettings {
    /// Replace the member density.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Replace the load-to-weight scaling constant.
    #[must_use]
    pub fn with_score_scale(mut self, score_scale: f64) -> Self {
        self.score_scale = score_scale;
        self
    }

    /// Replace the relative singular-value cutoff.
    #[must_use]
    pub fn with_rcond(mut self, rcond: f64) -> Self {
        self.rcond = Some(rcond);
        self
    }

    /// Replace the zero-length member policy.
    #[must_use]
    pub fn with_zero_length(mut self, policy: ZeroLengthPolicy) -> Self {
        self.zero_length = policy;
        self
    }
}
