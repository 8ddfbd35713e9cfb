use std::collections::HashMap;

use num_integer::Integer;

use crate::config::SolverLimits;
use crate::error::SolveError;
use crate::machine::Machine;
use crate::patterns::{parity_of, PatternTable};

/// Minimum presses raising every light to exactly its joltage target,
/// using the default [`SolverLimits`].
pub fn min_joltage_presses(machine: &Machine) -> Result<u64, SolveError> {
    min_joltage_presses_with(machine, &SolverLimits::default())
}

pub fn min_joltage_presses_with(
    machine: &Machine,
    limits: &SolverLimits,
) -> Result<u64, SolveError> {
    let table = PatternTable::build(machine, limits)?;
    EquationSolver::new(&table, limits).solve(machine.joltage_target())
}

/// Divide-and-conquer solver over one machine's [`PatternTable`].
///
/// Any press count splits into "pressed an odd number of times" plus twice a
/// smaller press count. The odd part is a button subset whose delta shares the
/// target's parity, so `solve(v) = min(c + 2 * solve((v - d) / 2))` over the
/// patterns `(d, c)` with the parity of `v`.
pub struct EquationSolver<'a> {
    table: &'a PatternTable,
    max_depth: usize,
    /// Best press count per already visited target, `None` when infeasible.
    memo: HashMap<Vec<u64>, Option<u64>>,
}

impl<'a> EquationSolver<'a> {
    pub fn new(table: &'a PatternTable, limits: &SolverLimits) -> Self {
        Self {
            table,
            max_depth: limits.max_depth,
            memo: HashMap::new(),
        }
    }

    pub fn solve(&mut self, target: &[u64]) -> Result<u64, SolveError> {
        let expected = self.table.light_count();
        if target.len() != expected {
            return Err(SolveError::TargetLength {
                expected,
                actual: target.len(),
            });
        }
        self.min_presses(target, 0)?.ok_or(SolveError::Unsolvable)
    }

    fn min_presses(&mut self, target: &[u64], depth: usize) -> Result<Option<u64>, SolveError> {
        if target.iter().all(|&v| v == 0) {
            return Ok(Some(0));
        }
        if depth > self.max_depth {
            return Err(SolveError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        if let Some(&cached) = self.memo.get(target) {
            return Ok(cached);
        }

        let table = self.table;
        let mut best: Option<u64> = None;
        let mut overflowed = false;

        for pattern in table.candidates(&parity_of(target)) {
            let Some(half) = halve_remainder(target, &pattern.delta) else {
                continue;
            };
            let rest = match self.min_presses(&half, depth + 1) {
                Ok(Some(rest)) => rest,
                Ok(None) => continue,
                Err(SolveError::Overflow) => {
                    overflowed = true;
                    continue;
                }
                Err(err) => return Err(err),
            };
            match rest
                .checked_mul(2)
                .and_then(|twice| twice.checked_add(pattern.presses))
            {
                Some(total) => best = Some(best.map_or(total, |b| b.min(total))),
                None => overflowed = true,
            }
        }

        // A feasible branch that does not fit in a u64 can't be ruled out as the minimum.
        if best.is_none() && overflowed {
            return Err(SolveError::Overflow);
        }

        self.memo.insert(target.to_vec(), best);
        Ok(best)
    }
}

/// `(target - delta) / 2`, or `None` if any light would go negative or odd.
fn halve_remainder(target: &[u64], delta: &[u64]) -> Option<Vec<u64>> {
    target
        .iter()
        .zip(delta)
        .map(|(&v, &d)| {
            let rest = v.checked_sub(d)?;
            rest.is_even().then_some(rest / 2)
        })
        .collect()
}
