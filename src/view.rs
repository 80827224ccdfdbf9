//! Read-only access to a truss for drawing and export.
//!
//! Renderers receive a [`TrussView`] (or an owned [`TrussSnapshot`]) and never touch the
//! model itself.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bar, Load, Point};
use crate::truss::Truss;

/// Sign of the axial force carried by a bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberState {
    /// Positive force; the bar is stretched.
    Tension,
    /// Negative force; the bar is squeezed.
    Compression,
    /// Force within the tolerance of zero.
    Unloaded,
}

impl MemberState {
    /// Classify a signed force, treating magnitudes up to `tolerance` as zero.
    ///
    /// # Examples
    /// ```
    /// use trussjoints::MemberState;
    ///
    /// assert_eq!(MemberState::classify(2.0, 1.0e-9), MemberState::Tension);
    /// assert_eq!(MemberState::classify(-1.0e-12, 1.0e-9), MemberState::Unloaded);
    /// ```
    #[must_use]
    pub fn classify(force: f64, tolerance: f64) -> Self {
        if force > tolerance {
            MemberState::Tension
        } else if force < -tolerance {
            MemberState::Compression
        } else {
            MemberState::Unloaded
        }
    }
}

/// Borrowed, read-only window onto a [`Truss`].
#[derive(Clone, Copy, Debug)]
pub struct TrussView<'a> {
    /// The viewed truss.
    truss: &'a Truss,
}

impl<'a> TrussView<'a> {
    /// Wrap a truss.
    #[must_use]
    pub fn new(truss: &'a Truss) -> Self {
        Self { truss }
    }

    /// Joint positions.
    #[must_use]
    pub fn nodes(&self) -> &'a [Point] {
        self.truss.nodes()
    }

    /// Bars in force-index order.
    #[must_use]
    pub fn bars(&self) -> &'a [Bar] {
        self.truss.bars()
    }

    /// Solved force per bar, if the truss has been solved.
    #[must_use]
    pub fn forces(&self) -> Option<&'a [f64]> {
        self.truss.forces()
    }

    /// Applied load per node, in the caller's sign convention.
    #[must_use]
    pub fn loads(&self) -> Vec<Load> {
        (0..self.truss.node_count())
            .filter_map(|node| self.truss.load(node))
            .collect()
    }

    /// Nodes carrying a non-zero load, paired with that load.
    #[must_use]
    pub fn loaded_nodes(&self) -> Vec<(usize, Load)> {
        self.loads()
            .into_iter()
            .enumerate()
            .filter(|(_, load)| !load.is_zero())
            .collect()
    }

    /// Tension or compression per bar, if the truss has been solved.
    #[must_use]
    pub fn member_states(&self, tolerance: f64) -> Option<Vec<MemberState>> {
        self.forces().map(|forces| {
            forces
                .iter()
                .map(|&force| MemberState::classify(force, tolerance))
                .collect()
        })
    }

    /// Midpoint of each bar, where a force label is usually anchored.
    #[must_use]
    pub fn midpoints(&self) -> Vec<Point> {
        let nodes = self.nodes();
        self.bars()
            .iter()
            .map(|bar| nodes[bar.a].midpoint(nodes[bar.b]))
            .collect()
    }

    /// Largest horizontal and vertical separation between any two nodes.
    ///
    /// Used to fit the structure into a drawing area. An empty truss spans `(0, 0)`.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        let nodes = self.nodes();
        let Some(first) = nodes.first() else {
            return (0.0, 0.0);
        };
        let (min, max) = nodes.iter().fold((*first, *first), |(min, max), node| {
            (
                Point::new(min.x.min(node.x), min.y.min(node.y)),
                Point::new(max.x.max(node.x), max.y.max(node.y)),
            )
        });
        (max.x - min.x, max.y - min.y)
    }

    /// Owned copy of everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> TrussSnapshot {
        TrussSnapshot {
            nodes: self.nodes().to_vec(),
            bars: self.bars().to_vec(),
            loads: self.loads(),
            forces: self.forces().map(<[f64]>::to_vec),
        }
    }
}

/// Serializable copy of a truss and its results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrussSnapshot {
    /// Joint positions.
    pub nodes: Vec<Point>,
    /// Bars in force-index order.
    pub bars: Vec<Bar>,
    /// Applied load per node.
    pub loads: Vec<Load>,
    /// Solved force per bar, absent before solving.
    pub forces: Option<Vec<f64>>,
}

impl TrussSnapshot {
    /// Encode the snapshot as JSON for an external renderer.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if encoding fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{load, point};

    fn loaded_triangle() -> Truss {
        let mut truss = Truss::new(
            vec![point(0.0, 0.0), point(4.0, 0.0), point(2.0, 3.0)],
            vec![vec![1, 2], vec![2], vec![]],
        )
        .expect("valid geometry");
        truss.set_support(0, [true, true]).expect("support applied");
        truss.set_support(1, [false, true]).expect("support applied");
        truss.set_load(2, load(0.0, -6.0)).expect("load applied");
        truss
    }

    #[test]
    fn view_reports_applied_loads() {
        let truss = loaded_triangle();
        let view = truss.view();
        assert_eq!(view.loads().len(), 3);
        assert_eq!(view.loaded_nodes(), vec![(2, load(0.0, -6.0))]);
        assert!(view.forces().is_none());
        assert!(view.member_states(1.0e-9).is_none());
    }

    #[test]
    fn view_classifies_members_after_solving() {
        let mut truss = loaded_triangle();
        truss.solve();
        let states = truss.view().member_states(1.0e-9).expect("solved");
        assert_eq!(
            states,
            vec![
                MemberState::Tension,
                MemberState::Compression,
                MemberState::Compression
            ]
        );
    }

    #[test]
    fn extent_and_midpoints_follow_geometry() {
        let truss = loaded_triangle();
        let view = truss.view();
        assert_eq!(view.extent(), (4.0, 3.0));
        assert_eq!(view.midpoints()[0], point(2.0, 0.0));
        assert_eq!(view.midpoints()[2], point(3.0, 1.5));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut truss = loaded_triangle();
        truss.solve();
        let snapshot = truss.view().snapshot();
        let json = snapshot.to_json().expect("serializable");
        let back: TrussSnapshot = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back.bars, snapshot.bars);
        assert_eq!(back.forces.map(|forces| forces.len()), Some(3));
    }
}
