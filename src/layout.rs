use trussjoints::{point, Truss, TrussError};

/// Panel width and depth of the demonstration truss in metres.
pub const PANEL: f64 = 2.0;

/// Joint indices with a structural role in the demonstration.
#[derive(Debug, Clone, PartialEq)]
pub struct PrattLayout {
    /// Left-hand joint, pinned in both directions.
    pub pinned_joint: usize,
    /// Right-hand joint, free to slide horizontally.
    pub roller_joint: usize,
    /// Interior bottom-chord joints that carry the deck load.
    pub deck_joints: Vec<usize>,
}

/// Build a four-panel Pratt truss.
///
/// Bottom-chord joints 0 to 4 sit on the x axis and top-chord joints 5 to 7 one panel
/// above them. Diagonals slope down towards midspan so that they carry tension under
/// gravity loads, see <https://en.wikipedia.org/wiki/Truss#Pratt_truss>.
pub fn build_pratt_truss() -> Result<(Truss, PrattLayout), TrussError> {
    let mut nodes: Vec<_> = (0..5_u32).map(|i| point(f64::from(i) * PANEL, 0.0)).collect();
    nodes.extend((1..4_u32).map(|i| point(f64::from(i) * PANEL, PANEL)));

    // Each joint lists the joints to its right; members are derived from these lists.
    let connections = vec![
        vec![1, 5],
        vec![2, 5],
        vec![3, 5, 6, 7],
        vec![4, 7],
        vec![7],
        vec![6],
        vec![7],
        vec![],
    ];

    let truss = Truss::new(nodes, connections)?;
    Ok((
        truss,
        PrattLayout {
            pinned_joint: 0,
            roller_joint: 4,
            deck_joints: vec![1, 2, 3],
        },
    ))
}
