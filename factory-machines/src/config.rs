/// Resource caps applied to every solve.
///
/// Puzzle inputs stay far below these; they exist so malformed input fails
/// fast instead of exhausting memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverLimits {
    /// Maximum number of distinct light states the toggle search may visit.
    pub max_states: usize,
    /// Maximum number of buttons for which the `2^k` pattern table is built.
    pub max_buttons: usize,
    /// Maximum recursion depth of the joltage solver.
    pub max_depth: usize,
}

impl SolverLimits {
    pub const DEFAULT_MAX_STATES: usize = 1 << 22;
    pub const DEFAULT_MAX_BUTTONS: usize = 20;
    /// Every level at least halves a `u64` vector, so 64 levels always suffice.
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            max_states: Self::DEFAULT_MAX_STATES,
            max_buttons: Self::DEFAULT_MAX_BUTTONS,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
