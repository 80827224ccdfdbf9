use crate::layout::PrattLayout;
use trussjoints::{load, Truss, TrussError};

/// Loading used for the Pratt truss demonstration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckLoading {
    /// Downward load in newtons applied at each deck joint.
    pub panel_load: f64,
}

impl Default for DeckLoading {
    fn default() -> Self {
        Self { panel_load: 10.0 }
    }
}

/// Apply supports and deck loads to the demonstration truss.
///
/// The pin and roller together provide the three reaction components a planar truss
/// needs, which makes the equilibrium system square for the Pratt layout.
pub fn apply_deck_conditions(
    truss: &mut Truss,
    layout: &PrattLayout,
) -> Result<DeckLoading, TrussError> {
    let loading = DeckLoading::default();

    truss.set_support(layout.pinned_joint, [true, true])?;
    truss.set_support(layout.roller_joint, [false, true])?;

    for &joint in &layout.deck_joints {
        truss.set_load(joint, load(0.0, -loading.panel_load))?;
    }

    Ok(loading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_pratt_truss;
    use trussjoints::AnalysisState;

    #[test]
    fn loads_every_deck_joint() {
        let (mut truss, layout) = build_pratt_truss().expect("valid geometry");
        let loading = apply_deck_conditions(&mut truss, &layout).expect("valid setup");
        assert_eq!(truss.state(), AnalysisState::LoadsSet);
        assert_eq!(truss.view().loaded_nodes().len(), 3);
        assert_eq!(truss.load(2).map(|applied| applied.y), Some(-loading.panel_load));
        assert_eq!(truss.support(4), Some([false, true]));
    }
}
