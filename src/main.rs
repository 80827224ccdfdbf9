mod analysis;
mod conditions;
mod layout;
mod report;

use analysis::run_analysis;
use conditions::apply_deck_conditions;
use layout::build_pratt_truss;
use report::render_summary;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Build the bare truss geometry before we think about loads.
    // A truss is a structure made from straight members connected at joints.
    // See: https://en.wikipedia.org/wiki/Truss
    let (mut truss, layout) = build_pratt_truss()?;

    // Pin one end, put a roller under the other and load the deck joints.
    apply_deck_conditions(&mut truss, &layout)?;

    // Solve the joint equilibrium equations and score the design.
    let summary = run_analysis(&mut truss)?;

    println!("{}", render_summary(&summary));

    Ok(())
}
