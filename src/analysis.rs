use trussjoints::{SolveReport, Truss, TrussError};

/// Summary of the results from the Pratt truss analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    /// Quality of the least-squares solve.
    pub report: SolveReport,
    /// Signed force per bar, with the bar endpoints.
    pub members: Vec<(usize, usize, f64)>,
    /// Largest force magnitude.
    pub fmax: f64,
    /// Largest tensile force.
    pub fmax_tension: f64,
    /// Total weight at unit density.
    pub weight: f64,
    /// `K / (fmax * weight)`, when defined.
    pub load_to_weight: Option<f64>,
    /// `K / (fmax_tension * weight)`, when defined.
    pub load_to_weight_tension: Option<f64>,
}

/// Solve the loaded truss and collect forces and efficiency scores.
///
/// Undefined scores are kept as `None` so the report can say why they are missing.
pub fn run_analysis(truss: &mut Truss) -> Result<AnalysisSummary, TrussError> {
    let report = truss.solve();
    let weight = truss.compute_weight()?;

    let members = truss
        .bars()
        .iter()
        .zip(truss.forces().unwrap_or_default())
        .map(|(bar, &force)| (bar.a, bar.b, force))
        .collect();

    Ok(AnalysisSummary {
        report,
        members,
        fmax: truss.fmax().unwrap_or_default(),
        fmax_tension: truss.fmax_tension().unwrap_or_default(),
        weight,
        load_to_weight: truss.load_to_weight().ok(),
        load_to_weight_tension: truss.load_to_weight_tension().ok(),
    })
}
