use crate::analysis::AnalysisSummary;
use std::fmt::Write;
use trussjoints::MemberState;

/// Render a textual summary of the Pratt truss analysis.
///
/// Positive forces are tensile, matching the convention described at
/// <https://en.wikipedia.org/wiki/Tension_(physics)>.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Pratt truss analysis ({} members, rank {}, residual {:.2e})",
        summary.members.len(),
        summary.report.rank,
        summary.report.residual_norm
    )
    .expect("writing to string cannot fail");

    for (index, (a, b, force)) in summary.members.iter().enumerate() {
        let state = match MemberState::classify(*force, 1.0e-9) {
            MemberState::Tension => "tension",
            MemberState::Compression => "compression",
            MemberState::Unloaded => "unloaded",
        };
        writeln!(
            &mut output,
            "  bar {index:>2} ({a}-{b}): {force:+9.3} N  {state}"
        )
        .expect("writing to string cannot fail");
    }

    writeln!(
        &mut output,
        "Peak force: {:.3} N, peak tension: {:.3} N, weight: {:.3}",
        summary.fmax, summary.fmax_tension, summary.weight
    )
    .expect("writing to string cannot fail");

    // A missing score means its denominator was zero, not that the analysis failed.
    for (label, score) in [
        ("Load-to-weight", summary.load_to_weight),
        ("Tensile load-to-weight", summary.load_to_weight_tension),
    ] {
        let written = match score {
            Some(score) => writeln!(&mut output, "{label}: {score:.3}"),
            None => writeln!(&mut output, "{label}: undefined (zero peak force)"),
        };
        written.expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use trussjoints::SolveReport;

    #[test]
    fn formats_human_readable_report() {
        let summary = AnalysisSummary {
            report: SolveReport {
                rank: 1,
                residual_norm: 0.0,
                degenerate: false,
            },
            members: vec![(0, 1, -10.0)],
            fmax: 10.0,
            fmax_tension: 0.0,
            weight: 3.0,
            load_to_weight: Some(1_000.0 / 30.0),
            load_to_weight_tension: None,
        };
        let report = render_summary(&summary);
        assert!(report.contains("Pratt truss analysis"));
        assert!(report.contains("bar  0 (0-1):   -10.000 N  compression"));
        assert!(report.contains("Load-to-weight: 33.333"));
        assert!(report.contains("Tensile load-to-weight: undefined"));
    }
}
