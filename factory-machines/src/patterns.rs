use std::collections::HashMap;

use bitvec::prelude::*;
use num_integer::Integer;

use crate::config::SolverLimits;
use crate::error::SolveError;
use crate::machine::Machine;

/// Per-light parity of a joltage vector, bit `i` set when entry `i` is odd.
pub type Parity = BitVec<usize, Lsb0>;

/// Parity signature of `values`.
pub fn parity_of(values: &[u64]) -> Parity {
    values.iter().map(|v| v.is_odd()).collect()
}

/// Subsets are enumerated as a `usize`, which bounds the button count.
const MAX_SUBSET_BUTTONS: usize = usize::BITS as usize - 1;

/// Joltage added by pressing a subset of buttons once each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Increment applied to every light.
    pub delta: Vec<u64>,
    /// Number of buttons in the subset.
    pub presses: u64,
}

/// Every button subset of one machine, grouped by the parity of its delta.
#[derive(Debug)]
pub struct PatternTable {
    light_count: usize,
    by_parity: HashMap<Parity, Vec<Pattern>>,
}

impl PatternTable {
    /// Enumerates all `2^k` subsets of the machine's `k` buttons.
    ///
    /// Subset `s` presses button `j` when bit `j` of `s` is set.
    pub fn build(machine: &Machine, limits: &SolverLimits) -> Result<Self, SolveError> {
        let buttons = machine.buttons();
        let limit = limits.max_buttons.min(MAX_SUBSET_BUTTONS);
        if buttons.len() > limit {
            return Err(SolveError::TooManyButtons {
                count: buttons.len(),
                limit,
            });
        }

        let light_count = machine.light_count();
        let mut by_parity: HashMap<Parity, Vec<Pattern>> = HashMap::new();

        for subset in 0usize..(1 << buttons.len()) {
            let mut delta = vec![0u64; light_count];
            let pressed = subset.view_bits::<Lsb0>();
            for button in pressed.iter_ones().map(|j| &buttons[j]) {
                for &light in button.lights() {
                    delta[light] += 1;
                }
            }

            by_parity.entry(parity_of(&delta)).or_default().push(Pattern {
                delta,
                presses: u64::from(subset.count_ones()),
            });
        }

        Ok(Self {
            light_count,
            by_parity,
        })
    }

    pub fn light_count(&self) -> usize {
        self.light_count
    }

    /// Patterns whose delta has exactly this parity signature.
    pub fn candidates(&self, parity: &Parity) -> &[Pattern] {
        self.by_parity
            .get(parity)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of patterns, always `2^k`.
    pub fn len(&self) -> usize {
        self.by_parity.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct parity signatures.
    pub fn signatures(&self) -> usize {
        self.by_parity.len()
    }
}
