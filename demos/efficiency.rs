use trussjoints::{load, point, Point, Truss, TrussError};

/// Score a two-panel truss whose apex sits at `height` above the span.
fn score(height: f64) -> Result<(f64, f64), TrussError> {
    let nodes: Vec<Point> = vec![
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(4.0, 0.0),
        point(2.0, height),
    ];
    let mut truss = Truss::new(nodes, vec![vec![1, 3], vec![2, 3], vec![3], vec![]])?;
    truss.set_support(0, [true, true])?;
    truss.set_support(2, [false, true])?;
    truss.set_load(1, load(0.0, -10.0))?;

    truss.solve();
    let weight = truss.compute_weight()?;
    Ok((weight, truss.load_to_weight()?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Sweep the apex height; candidates are independent, so this loop could run in parallel
    for step in 1..=6 {
        let height = 0.5 * f64::from(step);
        let (weight, ratio) = score(height)?;
        println!("height {height:.1}: weight {weight:.3}, load-to-weight {ratio:.3}");
    }
    Ok(())
}
