//! Least-squares solution of the joint equilibrium equations.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Multiple of machine epsilon, per matrix dimension and unit of condition number, below
/// which a solved force relative to the largest one is treated as round-off.
const ROUND_OFF_ULPS: f64 = 1_000.0;

/// Bar forces produced by a solve, together with their extreme values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Signed axial force per bar; positive values are tensile.
    pub forces: Vec<f64>,
    /// Largest force magnitude over all bars.
    pub fmax: f64,
    /// Largest tensile force, or zero when no bar is in tension.
    pub fmax_tension: f64,
}

impl Solution {
    /// Collect the extreme values of a force vector.
    #[must_use]
    pub fn from_forces(forces: Vec<f64>) -> Self {
        let fmax = forces.iter().fold(0.0_f64, |acc, force| acc.max(force.abs()));
        let fmax_tension = forces.iter().fold(0.0_f64, |acc, &force| acc.max(force));
        Self {
            forces,
            fmax,
            fmax_tension,
        }
    }
}

/// Diagnostics describing the quality of a least-squares solve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Numerical rank of the equilibrium matrix.
    pub rank: usize,
    /// Euclidean norm of `G * f - loads` at the solution.
    pub residual_norm: f64,
    /// Set when the matrix has rank zero, so every force is zero regardless of load.
    pub degenerate: bool,
}

impl SolveReport {
    /// Whether the loads are balanced exactly (to within `tolerance`).
    #[must_use]
    pub fn is_exact(&self, tolerance: f64) -> bool {
        self.residual_norm <= tolerance
    }
}

/// Minimum-norm least-squares solution of `matrix * f = rhs`.
///
/// The solve goes through a singular value decomposition so rank-deficient, under- and
/// over-determined systems all produce the best-fit force vector with the smallest norm,
/// following <https://en.wikipedia.org/wiki/Moore%E2%80%93Penrose_inverse>.
///
/// Forces that are indistinguishable from round-off, given the conditioning of the
/// matrix and the largest solved force, are returned as exactly zero so zero-force
/// members do not register as tension or compression.
///
/// # Panics
///
/// Panics when `rhs` does not have one entry per matrix row.
#[must_use]
pub fn least_squares(
    matrix: &DMatrix<f64>,
    rhs: &DVector<f64>,
    rcond: Option<f64>,
) -> (DVector<f64>, SolveReport) {
    assert_eq!(matrix.nrows(), rhs.len(), "one right-hand side per equation");
    let (rows, columns) = matrix.shape();

    if matrix.iter().all(|&entry| entry == 0.0) {
        warn!(rows, columns, "equilibrium matrix is empty or all zero; bars cannot carry load");
        return (
            DVector::zeros(columns),
            SolveReport {
                rank: 0,
                residual_norm: rhs.norm(),
                degenerate: true,
            },
        );
    }

    let svd = matrix.clone().svd(true, true);
    let largest = svd.singular_values.max();
    let relative = rcond.unwrap_or(f64::EPSILON * rows.max(columns) as f64);
    let cutoff = (relative * largest).max(0.0);
    let rank = svd.rank(cutoff);
    let mut forces = svd
        .solve(rhs, cutoff)
        .expect("singular vectors were requested");

    // Round-off in the decomposition grows with the condition number of the retained part.
    let smallest = svd
        .singular_values
        .iter()
        .copied()
        .filter(|&value| value > cutoff)
        .fold(largest, f64::min);
    let noise = ROUND_OFF_ULPS
        * f64::EPSILON
        * rows.max(columns) as f64
        * (largest / smallest)
        * forces.amax();
    let cleared = clear_round_off(&mut forces, noise);
    let residual_norm = (matrix * &forces - rhs).norm();

    debug!(
        rows,
        columns,
        rank,
        residual_norm,
        cleared,
        "least-squares solve finished"
    );
    if rank == 0 {
        warn!("equilibrium matrix has rank zero below the cutoff; bars cannot carry load");
    } else if rank < columns.min(rows) {
        warn!(rank, "equilibrium matrix is rank deficient; using minimum-norm forces");
    }

    (
        forces,
        SolveReport {
            rank,
            residual_norm,
            degenerate: rank == 0,
        },
    )
}

/// Set entries whose magnitude does not exceed `noise` to exactly zero.
///
/// Returns the number of entries cleared.
fn clear_round_off(forces: &mut DVector<f64>, noise: f64) -> usize {
    let mut cleared = 0;
    for force in forces.iter_mut() {
        if *force != 0.0 && force.abs() <= noise {
            *force = 0.0;
            cleared += 1;
        }
    }
    cleared
}
