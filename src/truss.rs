//! The truss model and its analysis state machine.

use nalgebra::{DMatrix, DVector};
use tracing::{debug, info};

use crate::equilibrium::equilibrium_matrix;
use crate::errors::{GeometryError, JointError, MetricsError, TrussError};
use crate::geometry::{enumerate_bars, Bar, Load, Point};
use crate::metrics::Metrics;
use crate::settings::{TrussSettings, ZeroLengthPolicy};
use crate::solver::{least_squares, Solution, SolveReport};
use crate::view::TrussView;

/// Progress of a truss through load assignment, solving and scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisState {
    /// Geometry and equilibrium matrix are built; no load or support has been set.
    Constructed,
    /// Loads or supports were assigned since the last solve.
    LoadsSet,
    /// Bar forces are available.
    Solved,
    /// Bar forces, weight and load-to-weight scores are available.
    WeightComputed,
}

/// Cached results; each variant owns exactly what its state makes available.
#[derive(Clone, Debug)]
enum Stage {
    Constructed,
    LoadsSet,
    Solved {
        solution: Solution,
        report: SolveReport,
    },
    WeightComputed {
        solution: Solution,
        report: SolveReport,
        metrics: Metrics,
    },
}

/// Planar pin-jointed truss analysed by the method of joints.
///
/// The member list and equilibrium matrix are fixed at construction. Loads may be set any
/// number of times; each change discards earlier results until [`Truss::solve`] runs
/// again.
///
/// # Examples
/// ```
/// use trussjoints::{load, point, Truss};
///
/// let mut truss = Truss::new(
///     vec![point(0.0, 0.0), point(3.0, 0.0)],
///     vec![vec![1], vec![0]],
/// )?;
/// truss.set_support(0, [true, true])?;
/// truss.set_load(1, load(-10.0, 0.0))?;
/// truss.solve();
///
/// let force = truss.member_force(0).expect("solved");
/// assert!((force + 10.0).abs() < 1.0e-9);
/// assert!((truss.compute_weight()? - 3.0).abs() < 1.0e-12);
/// # Ok::<(), trussjoints::TrussError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Truss {
    /// Joint positions, indexed by node.
    nodes: Vec<Point>,
    /// Connection lists as supplied by the caller.
    connections: Vec<Vec<usize>>,
    /// Deduplicated members in discovery order.
    bars: Vec<Bar>,
    /// Equilibrium matrix of shape `(2 * nodes, bars)`.
    equilibrium: DMatrix<f64>,
    /// Negated external loads, two rows per node.
    loads: DVector<f64>,
    /// Restrained x and y directions per node.
    supports: Vec<[bool; 2]>,
    /// Constants used for solving and scoring.
    settings: TrussSettings,
    /// Current analysis results.
    stage: Stage,
}

impl Truss {
    /// Build a truss with default [`TrussSettings`].
    ///
    /// `connections` must hold one neighbour list per node. Pairs may be listed in either
    /// or both directions and repeated; each unordered pair becomes a single bar.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::InvalidGeometry`] when the connection lists do not match the
    /// node list, reference missing nodes, when a coordinate is not finite, or when a
    /// member has zero length.
    pub fn new(nodes: Vec<Point>, connections: Vec<Vec<usize>>) -> Result<Self, TrussError> {
        Self::with_settings(nodes, connections, TrussSettings::default())
    }

    /// Build a truss with explicit settings.
    ///
    /// # Errors
    ///
    /// See [`Truss::new`]. Zero-length members are only rejected under
    /// [`ZeroLengthPolicy::Reject`].
    pub fn with_settings(
        nodes: Vec<Point>,
        connections: Vec<Vec<usize>>,
        settings: TrussSettings,
    ) -> Result<Self, TrussError> {
        if let Some(node) = nodes.iter().position(|position| !position.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { node }.into());
        }
        let bars = enumerate_bars(nodes.len(), &connections)?;
        if settings.zero_length == ZeroLengthPolicy::Reject {
            if let Some(bar) = bars
                .iter()
                .find(|bar| nodes[bar.a].distance_to(nodes[bar.b]) == 0.0)
            {
                return Err(GeometryError::ZeroLengthMember { a: bar.a, b: bar.b }.into());
            }
        }

        let equilibrium = equilibrium_matrix(&nodes, &bars);
        debug!(
            nodes = nodes.len(),
            bars = bars.len(),
            "built equilibrium matrix"
        );
        Ok(Self {
            loads: DVector::zeros(2 * nodes.len()),
            supports: vec![[false, false]; nodes.len()],
            nodes,
            connections,
            bars,
            equilibrium,
            settings,
            stage: Stage::Constructed,
        })
    }

    /// Return the number of nodes in the truss.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of bars in the truss.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Joint positions in node order.
    #[must_use]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Bars in discovery order; forces are reported against these indices.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Connection lists exactly as supplied.
    #[must_use]
    pub fn connections(&self) -> &[Vec<usize>] {
        &self.connections
    }

    /// Settings the truss was built with.
    #[must_use]
    pub fn settings(&self) -> &TrussSettings {
        &self.settings
    }

    /// The equilibrium matrix `G`.
    #[must_use]
    pub fn equilibrium_matrix(&self) -> &DMatrix<f64> {
        &self.equilibrium
    }

    /// The stored right-hand side, i.e. the negated external loads.
    #[must_use]
    pub fn stored_loads(&self) -> &DVector<f64> {
        &self.loads
    }

    /// Current position in the analysis state machine.
    #[must_use]
    pub fn state(&self) -> AnalysisState {
        match self.stage {
            Stage::Constructed => AnalysisState::Constructed,
            Stage::LoadsSet => AnalysisState::LoadsSet,
            Stage::Solved { .. } => AnalysisState::Solved,
            Stage::WeightComputed { .. } => AnalysisState::WeightComputed,
        }
    }

    /// Whether `neighbor` appears in the connection list supplied for `node`.
    ///
    /// The test is directional and reflects the raw input, unlike [`Truss::bars`].
    #[must_use]
    pub fn are_connected(&self, node: usize, neighbor: usize) -> bool {
        self.connections
            .get(node)
            .is_some_and(|neighbors| neighbors.contains(&neighbor))
    }

    /// Length of a bar, if it exists.
    #[must_use]
    pub fn member_length(&self, bar: usize) -> Option<f64> {
        self.bars
            .get(bar)
            .map(|bar| self.nodes[bar.a].distance_to(self.nodes[bar.b]))
    }

    /// External load applied to a node, in the caller's sign convention.
    #[must_use]
    pub fn load(&self, node: usize) -> Option<Load> {
        (node < self.nodes.len())
            .then(|| Load::new(-self.loads[2 * node], -self.loads[2 * node + 1]))
    }

    /// Restrained directions of a node.
    #[must_use]
    pub fn support(&self, node: usize) -> Option<[bool; 2]> {
        self.supports.get(node).copied()
    }

    /// Apply an external load to a node, replacing any earlier load on that node.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::IndexOutOfRange`] when `node` is not part of this truss or the
    /// load is not finite. The truss is left unchanged in that case.
    pub fn set_load(&mut self, node: usize, load: impl Into<Load>) -> Result<(), TrussError> {
        let load = load.into();
        if node >= self.nodes.len() {
            return Err(JointError::UnknownNode(node).into());
        }
        if !(load.x.is_finite() && load.y.is_finite()) {
            return Err(JointError::NonFiniteLoad { node }.into());
        }
        self.loads[2 * node] = -load.x;
        self.loads[2 * node + 1] = -load.y;
        self.invalidate();
        Ok(())
    }

    /// Restrain directions of a node.
    ///
    /// Each entry corresponds to the X and Y directions respectively. Equilibrium
    /// equations of restrained directions are dropped from the solve because the support
    /// reaction balances them.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::IndexOutOfRange`] when `node` is not part of this truss.
    pub fn set_support(&mut self, node: usize, support: [bool; 2]) -> Result<(), TrussError> {
        let Some(slot) = self.supports.get_mut(node) else {
            return Err(JointError::UnknownNode(node).into());
        };
        *slot = support;
        self.invalidate();
        Ok(())
    }

    /// Solve for the bar forces.
    ///
    /// The least-squares solve always produces forces; rank-deficient or inconsistent
    /// systems yield the minimum-norm best fit. The returned report flags a matrix of rank
    /// zero as degenerate.
    pub fn solve(&mut self) -> SolveReport {
        let free_rows: Vec<usize> = (0..self.loads.len())
            .filter(|row| !self.supports[row / 2][row % 2])
            .collect();
        let (forces, report) = if free_rows.len() == self.loads.len() {
            least_squares(&self.equilibrium, &self.loads, self.settings.rcond)
        } else {
            least_squares(
                &self.equilibrium.select_rows(free_rows.iter()),
                &self.loads.select_rows(free_rows.iter()),
                self.settings.rcond,
            )
        };

        let solution = Solution::from_forces(forces.iter().copied().collect());
        info!(
            bars = self.bars.len(),
            rank = report.rank,
            fmax = solution.fmax,
            fmax_tension = solution.fmax_tension,
            "solved truss"
        );
        self.stage = Stage::Solved { solution, report };
        report
    }

    /// Compute the total weight and the load-to-weight scores.
    ///
    /// Succeeds even when a score is undefined; the undefined score is reported by
    /// [`Truss::load_to_weight`] or [`Truss::load_to_weight_tension`].
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::UnsolvedState`] when the truss has not been solved since the
    /// last load change.
    pub fn compute_weight(&mut self) -> Result<f64, TrussError> {
        let (solution, report) = match &self.stage {
            Stage::Solved { solution, report } | Stage::WeightComputed { solution, report, .. } => {
                (solution.clone(), *report)
            }
            Stage::Constructed | Stage::LoadsSet => return Err(MetricsError::Unsolved.into()),
        };
        let metrics = Metrics::evaluate(&self.nodes, &self.bars, &solution, &self.settings);
        debug!(weight = metrics.weight, "computed truss weight");
        self.stage = Stage::WeightComputed {
            solution,
            report,
            metrics,
        };
        Ok(metrics.weight)
    }

    /// Solved forces and their extremes.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match &self.stage {
            Stage::Solved { solution, .. } | Stage::WeightComputed { solution, .. } => {
                Some(solution)
            }
            Stage::Constructed | Stage::LoadsSet => None,
        }
    }

    /// Diagnostics from the most recent solve.
    #[must_use]
    pub fn solve_report(&self) -> Option<SolveReport> {
        match &self.stage {
            Stage::Solved { report, .. } | Stage::WeightComputed { report, .. } => Some(*report),
            Stage::Constructed | Stage::LoadsSet => None,
        }
    }

    /// Signed force per bar; positive is tension.
    #[must_use]
    pub fn forces(&self) -> Option<&[f64]> {
        self.solution().map(|solution| solution.forces.as_slice())
    }

    /// Signed force in a single bar.
    #[must_use]
    pub fn member_force(&self, bar: usize) -> Option<f64> {
        self.forces().and_then(|forces| forces.get(bar).copied())
    }

    /// Largest force magnitude.
    #[must_use]
    pub fn fmax(&self) -> Option<f64> {
        self.solution().map(|solution| solution.fmax)
    }

    /// Largest tensile force; zero when every bar is compressed or unloaded.
    #[must_use]
    pub fn fmax_tension(&self) -> Option<f64> {
        self.solution().map(|solution| solution.fmax_tension)
    }

    /// Weight and scores from the last [`Truss::compute_weight`].
    #[must_use]
    pub fn metrics(&self) -> Option<&Metrics> {
        match &self.stage {
            Stage::WeightComputed { metrics, .. } => Some(metrics),
            _ => None,
        }
    }

    /// Total weight from the last [`Truss::compute_weight`].
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.metrics().map(|metrics| metrics.weight)
    }

    /// `K / (fmax * weight)`.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::UnsolvedState`] before [`Truss::compute_weight`] and
    /// [`TrussError::DegenerateMetric`] when the denominator is zero.
    pub fn load_to_weight(&self) -> Result<f64, TrussError> {
        let metrics = self.metrics().ok_or(MetricsError::Unsolved)?;
        Ok(metrics.load_to_weight()?)
    }

    /// `K / (fmax_tension * weight)`.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::UnsolvedState`] before [`Truss::compute_weight`] and
    /// [`TrussError::DegenerateMetric`] when no bar is in tension.
    pub fn load_to_weight_tension(&self) -> Result<f64, TrussError> {
        let metrics = self.metrics().ok_or(MetricsError::Unsolved)?;
        Ok(metrics.load_to_weight_tension()?)
    }

    /// Read-only view for drawing or exporting the truss.
    #[must_use]
    pub fn view(&self) -> TrussView<'_> {
        TrussView::new(self)
    }

    /// Discard cached results after a load or support change.
    fn invalidate(&mut self) {
        if matches!(
            self.stage,
            Stage::Solved { .. } | Stage::WeightComputed { .. }
        ) {
            debug!("discarding solved forces after input change");
        }
        self.stage = Stage::LoadsSet;
    }
}
