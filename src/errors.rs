//! Error types produced while building, loading or analysing trusses.

use thiserror::Error;

/// Error returned when the node and connection input cannot form a truss.
///
/// # Examples
///
/// ```
/// use trussjoints::{point, GeometryError, Truss, TrussError};
///
/// let error = Truss::new(vec![point(0.0, 0.0)], vec![vec![3]])
///     .expect_err("dangling connection is rejected");
/// assert_eq!(
///     error,
///     TrussError::InvalidGeometry(GeometryError::UnknownNode { node: 0, neighbor: 3 })
/// );
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Returned when the connection list does not hold one entry per node.
    #[error("{connections} connection lists supplied for {nodes} nodes")]
    ConnectionCountMismatch {
        /// Number of node coordinates supplied.
        nodes: usize,
        /// Number of connection lists supplied.
        connections: usize,
    },
    /// Returned when a connection references a node outside the node list.
    #[error("node {node} is connected to node {neighbor}, which does not exist")]
    UnknownNode {
        /// Node whose connection list holds the bad reference.
        node: usize,
        /// The out-of-range neighbour index.
        neighbor: usize,
    },
    /// Returned when a node coordinate is NaN or infinite.
    #[error("node {node} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Offending node.
        node: usize,
    },
    /// Returned when a member would span zero distance and the settings reject it.
    #[error("member between nodes {a} and {b} has zero length")]
    ZeroLengthMember {
        /// First endpoint.
        a: usize,
        /// Second endpoint.
        b: usize,
    },
}

/// Error returned when loading or restraining a joint.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum JointError {
    /// Returned when the node index is outside the truss.
    #[error("node {0} does not exist in this truss")]
    UnknownNode(usize),
    /// Returned when a load component is NaN or infinite.
    #[error("load on node {node} has a non-finite component")]
    NonFiniteLoad {
        /// Node the load was meant for.
        node: usize,
    },
}

/// Figures of merit that can be requested after analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// `K / (fmax * weight)`.
    LoadToWeight,
    /// `K / (fmax_tension * weight)`.
    LoadToWeightTension,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::LoadToWeight => f.write_str("load-to-weight"),
            Metric::LoadToWeightTension => f.write_str("tensile load-to-weight"),
        }
    }
}

/// Error returned when derived metrics are requested.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MetricsError {
    /// Returned when metrics are requested before the truss has been solved or
    /// before the weight has been computed.
    #[error("truss has not been solved; call solve() first")]
    Unsolved,
    /// Returned when a ratio would divide by zero.
    #[error("{metric} ratio is undefined because its denominator is zero")]
    DegenerateMetric {
        /// The ratio that could not be formed.
        metric: Metric,
    },
}

/// Umbrella error for every fallible [`Truss`](crate::Truss) operation.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum TrussError {
    /// Malformed node or connection input.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
    /// Load or support assignment rejected.
    #[error("{0}")]
    IndexOutOfRange(#[from] JointError),
    /// Weight requested before solving.
    #[error("{0}")]
    UnsolvedState(MetricsError),
    /// Ratio requested with a zero denominator.
    #[error("{0}")]
    DegenerateMetric(MetricsError),
}

impl From<MetricsError> for TrussError {
    fn from(value: MetricsError) -> Self {
        match value {
            MetricsError::Unsolved => TrussError::UnsolvedState(value),
            MetricsError::DegenerateMetric { .. } => TrussError::DegenerateMetric(value),
        }
    }
}
