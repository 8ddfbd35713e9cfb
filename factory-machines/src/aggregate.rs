use rayon::prelude::*;

use crate::config::SolverLimits;
use crate::error::{AggregateError, SolveError};
use crate::joltage::min_joltage_presses_with;
use crate::machine::Machine;
use crate::toggle::min_toggles_with;

/// Which puzzle semantics a button press follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Presses XOR the button's lights.
    Toggle,
    /// Presses add one to each of the button's lights.
    Joltage,
}

impl Variant {
    pub fn solve(self, machine: &Machine, limits: &SolverLimits) -> Result<u64, SolveError> {
        match self {
            Variant::Toggle => min_toggles_with(machine, limits),
            Variant::Joltage => min_joltage_presses_with(machine, limits),
        }
    }
}

/// Sums the minimum presses of every machine.
///
/// Machines are solved in parallel; the first failure in input order is reported.
#[tracing::instrument(skip(machines, limits), fields(count = machines.len()))]
pub fn total_presses(
    machines: &[Machine],
    variant: Variant,
    limits: &SolverLimits,
) -> Result<u64, AggregateError> {
    let results: Vec<_> = machines
        .par_iter()
        .map(|machine| variant.solve(machine, limits))
        .collect();

    let mut total: u64 = 0;
    for (index, result) in results.into_iter().enumerate() {
        let presses = result.map_err(|source| AggregateError::Machine { index, source })?;
        tracing::debug!(index, presses, "machine solved");
        total = total
            .checked_add(presses)
            .ok_or(AggregateError::Overflow { index })?;
    }

    tracing::info!(total, "all machines solved");
    Ok(total)
}
