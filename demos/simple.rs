use trussjoints::{load, point, Truss};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a simple truss with three joints; members come from the connection lists
    let mut truss = Truss::new(
        vec![point(0.0, 0.0), point(4.0, 0.0), point(2.0, 3.0)],
        vec![vec![1, 2], vec![2], vec![]],
    )?;

    // Define supports and loads
    truss.set_support(0, [true, true])?;
    truss.set_support(1, [false, true])?;
    truss.set_load(2, load(0.0, -6.0))?;

    // Solve the joint equilibrium equations
    let report = truss.solve();
    println!("rank {} residual {:.2e}", report.rank, report.residual_norm);

    // Print the force in every member
    for (bar, force) in truss.bars().iter().zip(truss.forces().unwrap_or_default()) {
        println!("member {}-{}: {force:+.3}", bar.a, bar.b);
    }

    // All done
    Ok(())
}
