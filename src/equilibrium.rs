//! Assembly of the method-of-joints equilibrium matrix.
//!
//! Row `2n` holds the x-equilibrium equation of node `n` and row `2n + 1` its
//! y-equilibrium equation. Column `k` holds the projections of a unit tensile force in
//! bar `k` onto the equations of its two endpoints, see
//! <https://en.wikipedia.org/wiki/Truss#Method_of_joints>.

use nalgebra::DMatrix;

use crate::geometry::{Bar, Point};

/// Build the `(2 * nodes.len(), bars.len())` equilibrium matrix.
///
/// Each endpoint `n` of bar `k` receives the direction cosine and sine of the line from
/// `n` towards the opposite endpoint. Zero-length bars contribute an all-zero column.
///
/// # Examples
/// ```
/// use trussjoints::{equilibrium_matrix, point, Bar};
///
/// let g = equilibrium_matrix(&[point(0.0, 0.0), point(3.0, 0.0)], &[Bar::new(0, 1)]);
/// assert_eq!(g.shape(), (4, 1));
/// assert_eq!(g[(0, 0)], 1.0);
/// assert_eq!(g[(2, 0)], -1.0);
/// ```
#[must_use]
pub fn equilibrium_matrix(nodes: &[Point], bars: &[Bar]) -> DMatrix<f64> {
    let mut matrix = DMatrix::zeros(2 * nodes.len(), bars.len());
    for (column, bar) in bars.iter().enumerate() {
        for (node, other) in [(bar.a, bar.b), (bar.b, bar.a)] {
            let (c, s) = nodes[node].direction_to(nodes[other]);
            matrix[(2 * node, column)] = c;
            matrix[(2 * node + 1, column)] = s;
        }
    }
    matrix
}
