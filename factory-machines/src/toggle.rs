use std::collections::{HashSet, VecDeque};

use crate::config::SolverLimits;
use crate::error::SolveError;
use crate::machine::{Button, LightMask, Machine};

/// Minimum presses turning the all-off state into the machine's target pattern,
/// using the default [`SolverLimits`].
pub fn min_toggles(machine: &Machine) -> Result<u64, SolveError> {
    min_toggles_with(machine, &SolverLimits::default())
}

/// Breadth-first search over light masks. Every press XORs the button's mask
/// into the current state, so the first time the target is generated its depth
/// is the minimum press count.
pub fn min_toggles_with(machine: &Machine, limits: &SolverLimits) -> Result<u64, SolveError> {
    let target = machine.target_mask();
    if target == 0 {
        return Ok(0);
    }

    let masks: Vec<LightMask> = machine.buttons().iter().map(Button::mask).collect();

    let mut visited: HashSet<LightMask> = HashSet::from([0]);
    let mut queue: VecDeque<(LightMask, u64)> = VecDeque::from([(0, 0)]);

    while let Some((state, presses)) = queue.pop_front() {
        for &mask in &masks {
            let next = state ^ mask;
            if next == target {
                return Ok(presses + 1);
            }
            if visited.insert(next) {
                if visited.len() > limits.max_states {
                    return Err(SolveError::StateLimitExceeded {
                        limit: limits.max_states,
                    });
                }
                queue.push_back((next, presses + 1));
            }
        }
    }

    Err(SolveError::Unreachable)
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::Itertools;
    use rstest::rstest;

    fn machine(light_count: usize, target_mask: LightMask, buttons: &[&[usize]]) -> Machine {
        let buttons = buttons.iter().map(|b| b.to_vec()).collect();
        Machine::new(light_count, target_mask, buttons, vec![0; light_count])
            .expect("test machine should be valid")
    }

    /// Shortest sequence length found by trying every sequence up to `max_len`.
    fn brute_force(machine: &Machine, max_len: usize) -> Option<u64> {
        if machine.target_mask() == 0 {
            return Some(0);
        }
        let masks = machine.buttons().iter().map(Button::mask).collect_vec();
        (1..=max_len).find_map(|len| {
            (0..len)
                .map(|_| 0..masks.len())
                .multi_cartesian_product()
                .any(|seq| seq.iter().fold(0, |acc, &b| acc ^ masks[b]) == machine.target_mask())
                .then_some(len as u64)
        })
    }

    #[test]
    fn all_off_target_needs_no_presses() -> Result<(), SolveError> {
        let machine = machine(3, 0, &[&[0, 1], &[2]]);
        assert_eq!(min_toggles(&machine)?, 0);
        Ok(())
    }

    #[test]
    fn all_off_target_is_free_even_without_buttons() -> Result<(), SolveError> {
        assert_eq!(min_toggles(&machine(2, 0, &[]))?, 0);
        Ok(())
    }

    #[rstest]
    #[case::single_button_matches(0b110, 1)]
    #[case::other_single_button(0b101, 1)]
    #[case::first_button(0b011, 1)]
    fn triangle_targets_are_single_presses(#[case] target: LightMask, #[case] expected: u64) {
        let machine = machine(3, target, &[&[0, 1], &[1, 2], &[0, 2]]);
        assert_eq!(min_toggles(&machine), Ok(expected));
    }

    #[test]
    fn chained_buttons_need_two_presses() {
        let machine = machine(3, 0b101, &[&[0, 1], &[1, 2]]);
        assert_eq!(min_toggles(&machine), Ok(2));
    }

    #[rstest]
    #[case::odd_weight_target(0b111)]
    #[case::single_light(0b001)]
    fn even_buttons_cannot_reach_odd_targets(#[case] target: LightMask) {
        let machine = machine(3, target, &[&[0, 1], &[1, 2], &[0, 2]]);
        assert_eq!(min_toggles(&machine), Err(SolveError::Unreachable));
    }

    #[test]
    fn no_buttons_is_unreachable() {
        assert_eq!(min_toggles(&machine(1, 0b1, &[])), Err(SolveError::Unreachable));
    }

    #[test]
    fn sample_machines() -> Result<(), SolveError> {
        let first = machine(
            4,
            0b0110,
            &[&[3], &[1, 3], &[2], &[2, 3], &[0, 2], &[0, 1]],
        );
        let second = machine(
            5,
            0b01000,
            &[&[0, 2, 3, 4], &[2, 3], &[0, 4], &[0, 1, 2], &[1, 2, 3, 4]],
        );
        let third = machine(
            6,
            0b101110,
            &[&[0, 1, 2, 3, 4], &[0, 3, 4], &[0, 1, 2, 4, 5], &[1, 2]],
        );
        assert_eq!(min_toggles(&first)?, 2);
        assert_eq!(min_toggles(&second)?, 3);
        assert_eq!(min_toggles(&third)?, 2);
        Ok(())
    }

    #[test]
    fn state_cap_fails_fast() {
        let machine = machine(4, 0b1111, &[&[0], &[1], &[2], &[3]]);
        let limits = SolverLimits {
            max_states: 3,
            ..SolverLimits::default()
        };
        assert_eq!(
            min_toggles_with(&machine, &limits),
            Err(SolveError::StateLimitExceeded { limit: 3 })
        );
    }

    #[test]
    fn matches_brute_force_on_small_machines() {
        let buttons: [&[usize]; 5] = [&[0], &[1, 2], &[0, 3], &[1, 2, 3], &[2]];
        for target in 0..16 {
            for subset in [&buttons[..], &buttons[1..], &buttons[2..]] {
                let machine = machine(4, target, subset);
                let expected = brute_force(&machine, 4);
                assert_eq!(min_toggles(&machine).ok(), expected, "target {target:#06b}");
            }
        }
    }

    #[test]
    fn button_order_does_not_matter() {
        let buttons: Vec<&[usize]> = vec![&[0, 1], &[1, 2, 3], &[3], &[0, 2]];
        for target in 0..16 {
            let expected = min_toggles(&machine(4, target, &buttons));
            for permutation in buttons.iter().copied().permutations(buttons.len()) {
                assert_eq!(min_toggles(&machine(4, target, &permutation)), expected);
            }
        }
    }
}
