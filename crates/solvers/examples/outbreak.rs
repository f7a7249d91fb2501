//! Simulates a canonical SIR outbreak and prints the trajectory as CSV.
//!
//! A population of 1000 with one initial infection, a contact rate of 0.3,
//! and a recovery rate of 0.1 (so R₀ = 3), sampled daily for 100 days:
//!
//! ```text
//! cargo run --example outbreak
//! ```
//!
//! Pipe the output into any plotting tool to see the classic epidemic
//! curves: susceptibles falling, infections peaking around day 30, and
//! recoveries climbing toward the final size.

use std::error::Error;

use kermack_core::{Parameters, Sir, TimeGrid};
use kermack_solvers::rk4::{self, Tolerances};

fn main() -> Result<(), Box<dyn Error>> {
    let parameters = Parameters::new(1000.0, 0.3, 0.1)?;
    let initial = parameters.initial_state(1.0)?;
    let grid = TimeGrid::evenly_spaced(0.0, 100.0, 101)?;

    let trajectory = rk4::solve(&Sir::new(parameters), initial, &grid, Tolerances::default())?;

    println!("day,susceptible,infected,recovered");
    for sample in &trajectory {
        println!(
            "{:.1},{:.3},{:.3},{:.3}",
            sample.time,
            sample.state.susceptible(),
            sample.state.infected(),
            sample.state.recovered()
        );
    }

    Ok(())
}
