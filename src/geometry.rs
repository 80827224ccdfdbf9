//! Planar geometry and member enumeration for pin-jointed trusses.

use nalgebra::Vector2;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;

/// Position of a joint in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    /// Direction cosine and sine of the line from `self` towards `other`.
    ///
    /// Coincident points have no direction; both components are reported as zero.
    ///
    /// # Examples
    /// ```
    /// use trussjoints::point;
    ///
    /// let (c, s) = point(3.0, 0.0).direction_to(point(0.0, 0.0));
    /// assert_eq!((c, s), (-1.0, 0.0));
    /// assert_eq!(point(1.0, 1.0).direction_to(point(1.0, 1.0)), (0.0, 0.0));
    /// ```
    #[must_use]
    pub fn direction_to(self, other: Point) -> (f64, f64) {
        let delta = other.to_vector() - self.to_vector();
        let length = delta.norm();
        if length == 0.0 {
            (0.0, 0.0)
        } else {
            (delta.x / length, delta.y / length)
        }
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::from((self.to_vector() + other.to_vector()) / 2.0)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Planar force applied to a joint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Component along the global X axis.
    pub x: f64,
    /// Component along the global Y axis.
    pub y: f64,
}

impl Load {
    /// Create a [`Load`] with explicit components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both components are zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<(f64, f64)> for Load {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Straight two-force member joining two nodes.
///
/// The pair is unordered for identity purposes; `a` is the node whose connection list
/// produced the bar and `b` the neighbour it referenced.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Bar {
    /// Node whose connection list first produced the bar.
    pub a: usize,
    /// The referenced neighbour.
    pub b: usize,
}

impl Bar {
    /// Create a bar between two nodes.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Whether the bar is incident to `node`.
    #[must_use]
    pub fn touches(self, node: usize) -> bool {
        self.a == node || self.b == node
    }

    /// The endpoint opposite `node`, if the bar touches it.
    ///
    /// A self-loop returns `node` itself.
    #[must_use]
    pub fn other(self, node: usize) -> Option<usize> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }

    /// Whether both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(self) -> bool {
        self.a == self.b
    }
}

impl PartialEq for Bar {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Bar {}

/// Derive the deduplicated member list from per-node connection lists.
///
/// Nodes are scanned in index order and each connection list in the order given. A pair
/// is recorded the first time it is seen in either direction, which fixes the bar index
/// that forces are later reported against.
///
/// # Errors
///
/// Returns [`GeometryError::ConnectionCountMismatch`] when `connections` does not hold one
/// list per node and [`GeometryError::UnknownNode`] when a list references a node that
/// does not exist.
///
/// # Examples
/// ```
/// use trussjoints::{enumerate_bars, Bar};
///
/// let bars = enumerate_bars(3, &[vec![1, 2], vec![0, 2], vec![1, 0]]).expect("valid input");
/// assert_eq!(bars, vec![Bar::new(0, 1), Bar::new(0, 2), Bar::new(1, 2)]);
/// ```
pub fn enumerate_bars(
    node_count: usize,
    connections: &[Vec<usize>],
) -> Result<Vec<Bar>, GeometryError> {
    if connections.len() != node_count {
        return Err(GeometryError::ConnectionCountMismatch {
            nodes: node_count,
            connections: connections.len(),
        });
    }

    let mut graph: UnGraph<usize, Bar> = UnGraph::with_capacity(node_count, node_count);
    for node in 0..node_count {
        graph.add_node(node);
    }
    for (node, neighbors) in connections.iter().enumerate() {
        for &neighbor in neighbors {
            if neighbor >= node_count {
                return Err(GeometryError::UnknownNode { node, neighbor });
            }
            let (start, end) = (NodeIndex::new(node), NodeIndex::new(neighbor));
            if graph.find_edge(start, end).is_none() {
                graph.add_edge(start, end, Bar::new(node, neighbor));
            }
        }
    }

    Ok(graph.edge_weights().copied().collect())
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use trussjoints::point;
///
/// let origin = point(0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Convenience helper for creating [`Load`] instances.
///
/// # Examples
/// ```
/// use trussjoints::load;
///
/// let downward = load(0.0, -5.0);
/// assert_eq!(downward.y, -5.0);
/// ```
#[must_use]
pub const fn load(x: f64, y: f64) -> Load {
    Load::new(x, y)
}
