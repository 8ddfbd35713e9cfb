use miette::*;

use crate::aggregate::{total_presses, Variant};
use crate::config::SolverLimits;
use crate::parser::parse_machines;

/// Fewest presses to reach every machine's joltage levels, summed.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let machines = parse_machines(input)?;
    let total = total_presses(&machines, Variant::Joltage, &SolverLimits::default())?;
    Ok(total.to_string())
}
