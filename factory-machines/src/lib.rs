pub mod aggregate;
pub mod config;
pub mod error;
pub mod joltage;
pub mod machine;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod patterns;
pub mod toggle;

pub use aggregate::{total_presses, Variant};
pub use config::SolverLimits;
pub use error::{AggregateError, InputError, MachineError, SolveError};
pub use joltage::{min_joltage_presses, min_joltage_presses_with};
pub use machine::{Button, LightMask, Machine};
pub use parser::parse_machines;
pub use toggle::{min_toggles, min_toggles_with};
