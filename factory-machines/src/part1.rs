use miette::*;

use crate::aggregate::{total_presses, Variant};
use crate::config::SolverLimits;
use crate::parser::parse_machines;

/// Fewest presses to light every machine's indicator pattern, summed.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let machines = parse_machines(input)?;
    let total = total_presses(&machines, Variant::Toggle, &SolverLimits::default())?;
    Ok(total.to_string())
}
