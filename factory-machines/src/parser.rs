use chumsky::prelude::*;
use itertools::Itertools;

use crate::error::InputError;
use crate::machine::Machine;

#[derive(Debug)]
struct RawMachine {
    diagram: Vec<bool>,
    buttons: Vec<Vec<usize>>,
    joltage: Vec<u64>,
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<RawMachine>, extra::Err<Rich<'a, char>>> {
    // Custom whitespace parser that excludes newlines
    let hspace = one_of(" \t").repeated();

    let light = choice((just('.').to(false), just('#').to(true)));

    // [.##.]
    let diagram = light
        .repeated()
        .at_least(1)
        .collect::<Vec<bool>>()
        .delimited_by(just('['), just(']'));

    // (0,2,3)
    let indices = text::int(10)
        .try_map(|s: &str, span| s.parse::<usize>().map_err(|e| Rich::custom(span, e)))
        .separated_by(just(','))
        .at_least(1)
        .collect::<Vec<usize>>()
        .delimited_by(just('('), just(')'));

    // (0,2) (1,3) ...
    let buttons = indices.padded_by(hspace).repeated().collect::<Vec<_>>();

    // {3,5,4}
    let joltage = text::int(10)
        .try_map(|s: &str, span| s.parse::<u64>().map_err(|e| Rich::custom(span, e)))
        .separated_by(just(','))
        .collect::<Vec<u64>>()
        .delimited_by(just('{'), just('}'));

    let machine = diagram
        .then_ignore(hspace)
        .then(buttons)
        .then(joltage)
        .then_ignore(hspace)
        .map(|((diagram, buttons), joltage)| RawMachine {
            diagram,
            buttons,
            joltage,
        });

    machine
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Parses one machine per line: `[.##.] (3) (1,3) ... {3,5,4,7}`.
///
/// The leftmost light of the diagram is light 0.
pub fn parse_machines(input: &str) -> Result<Vec<Machine>, InputError> {
    let raw = parser()
        .parse(input)
        .into_result()
        .map_err(|errs| InputError::Syntax(errs.iter().map(ToString::to_string).join("; ")))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            Machine::from_diagram(&raw.diagram, raw.buttons, raw.joltage)
                .map_err(|source| InputError::Machine { index, source })
        })
        .collect()
}
