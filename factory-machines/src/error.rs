use miette::Diagnostic;
use thiserror::Error;

use crate::machine::MAX_LIGHTS;

/// A machine description that violates the model's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum MachineError {
    #[error("machine has no lights")]
    #[diagnostic(code(machine::no_lights))]
    NoLights,

    #[error("machine has {0} lights, but at most {max} are supported", max = MAX_LIGHTS)]
    #[diagnostic(code(machine::too_many_lights))]
    TooManyLights(usize),

    #[error("target mask {mask:#b} sets lights beyond the {light_count} available")]
    #[diagnostic(code(machine::target_out_of_range))]
    TargetOutOfRange { mask: u64, light_count: usize },

    #[error("button #{button} affects no lights")]
    #[diagnostic(code(machine::empty_button))]
    EmptyButton { button: usize },

    #[error("button #{button} references light {light}, but only {light_count} lights exist")]
    #[diagnostic(code(machine::light_out_of_range))]
    LightOutOfRange {
        button: usize,
        light: usize,
        light_count: usize,
    },

    #[error("button #{button} references light {light} more than once")]
    #[diagnostic(code(machine::duplicate_light))]
    DuplicateLight { button: usize, light: usize },

    #[error("joltage target has {actual} entries, expected one per light ({expected})")]
    #[diagnostic(code(machine::joltage_length))]
    JoltageLength { expected: usize, actual: usize },
}

/// Why a single machine could not be solved.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SolveError {
    #[error("target light pattern is unreachable with the available buttons")]
    #[diagnostic(code(solve::unreachable))]
    Unreachable,

    #[error("no combination of button presses produces the joltage target")]
    #[diagnostic(
        code(solve::unsolvable),
        help("every press adds one to each light of its button; check the target parities")
    )]
    Unsolvable,

    #[error("toggle search visited more than {limit} states")]
    #[diagnostic(code(solve::state_limit), help("raise `SolverLimits::max_states`"))]
    StateLimitExceeded { limit: usize },

    #[error("joltage recursion went deeper than {limit} levels")]
    #[diagnostic(code(solve::depth_limit), help("raise `SolverLimits::max_depth`"))]
    DepthLimitExceeded { limit: usize },

    #[error("machine has {count} buttons, pattern enumeration is capped at {limit}")]
    #[diagnostic(code(solve::too_many_buttons), help("raise `SolverLimits::max_buttons`"))]
    TooManyButtons { count: usize, limit: usize },

    #[error("joltage target has {actual} entries, but the machine has {expected} lights")]
    #[diagnostic(code(solve::target_length))]
    TargetLength { expected: usize, actual: usize },

    #[error("minimum press count does not fit in a u64")]
    #[diagnostic(code(solve::overflow))]
    Overflow,
}

/// Failure to turn puzzle text into machines.
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("parse failed: {0}")]
    #[diagnostic(code(input::syntax))]
    Syntax(String),

    #[error("machine #{index} is malformed")]
    #[diagnostic(code(input::machine))]
    Machine {
        index: usize,
        #[source]
        #[diagnostic_source]
        source: MachineError,
    },
}

/// Failure while summing presses over every machine.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AggregateError {
    #[error("machine #{index} could not be solved")]
    #[diagnostic(code(aggregate::machine))]
    Machine {
        index: usize,
        #[source]
        #[diagnostic_source]
        source: SolveError,
    },

    #[error("press total overflowed a u64 at machine #{index}")]
    #[diagnostic(code(aggregate::overflow))]
    Overflow { index: usize },
}
