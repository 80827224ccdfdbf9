#![warn(clippy::all)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod equilibrium;
mod errors;
mod geometry;
mod metrics;
mod settings;
mod solver;
mod truss;
mod view;

pub use equilibrium::equilibrium_matrix;
pub use errors::{GeometryError, JointError, Metric, MetricsError, TrussError};
pub use geometry::{enumerate_bars, load, point, Bar, Load, Point};
pub use metrics::{total_weight, Metrics};
pub use settings::{TrussSettings, ZeroLengthPolicy};
pub use solver::{least_squares, Solution, SolveReport};
pub use truss::{AnalysisState, Truss};
pub use view::{MemberState, TrussSnapshot, TrussView};
