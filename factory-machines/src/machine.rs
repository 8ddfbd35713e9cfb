use crate::error::MachineError;

/// Light states packed into a `u64`, bit `i` being light `i`.
pub type LightMask = u64;

/// Largest light count representable by a [`LightMask`].
pub const MAX_LIGHTS: usize = LightMask::BITS as usize;

/// A button and the lights it touches, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    lights: Vec<usize>,
}

impl Button {
    fn new(index: usize, mut lights: Vec<usize>, light_count: usize) -> Result<Self, MachineError> {
        if lights.is_empty() {
            return Err(MachineError::EmptyButton { button: index });
        }
        if let Some(&light) = lights.iter().find(|&&light| light >= light_count) {
            return Err(MachineError::LightOutOfRange {
                button: index,
                light,
                light_count,
            });
        }

        lights.sort_unstable();
        if let Some(pair) = lights.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(MachineError::DuplicateLight {
                button: index,
                light: pair[0],
            });
        }

        Ok(Self { lights })
    }

    pub fn lights(&self) -> &[usize] {
        &self.lights
    }

    /// The lights this button toggles, as a mask.
    pub fn mask(&self) -> LightMask {
        self.lights.iter().fold(0, |mask, &light| mask | 1 << light)
    }
}

/// One puzzle instance. Immutable once built; carries no solver state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    light_count: usize,
    target_mask: LightMask,
    buttons: Vec<Button>,
    joltage_target: Vec<u64>,
}

impl Machine {
    /// Validates and builds a machine.
    ///
    /// Each entry of `buttons` lists the light indices that button affects.
    pub fn new(
        light_count: usize,
        target_mask: LightMask,
        buttons: Vec<Vec<usize>>,
        joltage_target: Vec<u64>,
    ) -> Result<Self, MachineError> {
        if light_count == 0 {
            return Err(MachineError::NoLights);
        }
        if light_count > MAX_LIGHTS {
            return Err(MachineError::TooManyLights(light_count));
        }
        if light_count < MAX_LIGHTS && target_mask >> light_count != 0 {
            return Err(MachineError::TargetOutOfRange {
                mask: target_mask,
                light_count,
            });
        }
        if joltage_target.len() != light_count {
            return Err(MachineError::JoltageLength {
                expected: light_count,
                actual: joltage_target.len(),
            });
        }

        let buttons = buttons
            .into_iter()
            .enumerate()
            .map(|(i, lights)| Button::new(i, lights, light_count))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            light_count,
            target_mask,
            buttons,
            joltage_target,
        })
    }

    /// Builds a machine from a light diagram, leftmost entry being light 0.
    pub fn from_diagram(
        diagram: &[bool],
        buttons: Vec<Vec<usize>>,
        joltage_target: Vec<u64>,
    ) -> Result<Self, MachineError> {
        if diagram.len() > MAX_LIGHTS {
            return Err(MachineError::TooManyLights(diagram.len()));
        }
        let target_mask: LightMask = diagram
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .fold(0, |mask, (i, _)| mask | 1 << i);

        Self::new(diagram.len(), target_mask, buttons, joltage_target)
    }

    pub fn light_count(&self) -> usize {
        self.light_count
    }

    pub fn target_mask(&self) -> LightMask {
        self.target_mask
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn joltage_target(&self) -> &[u64] {
        &self.joltage_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn diagram_sets_bits_from_the_left() -> Result<(), MachineError> {
        let machine = Machine::from_diagram(
            &[false, true, true, false],
            vec![vec![3], vec![1, 3]],
            vec![3, 5, 4, 7],
        )?;
        assert_eq!(machine.light_count(), 4);
        assert_eq!(machine.target_mask(), 0b0110);
        assert_eq!(machine.buttons()[1].mask(), 0b1010);
        Ok(())
    }

    #[test]
    fn button_lights_are_sorted() -> Result<(), MachineError> {
        let machine = Machine::new(3, 0, vec![vec![2, 0]], vec![0; 3])?;
        assert_eq!(machine.buttons()[0].lights(), &[0, 2]);
        Ok(())
    }

    #[test]
    fn full_width_mask_is_accepted() -> Result<(), MachineError> {
        let machine = Machine::new(64, u64::MAX, vec![vec![63]], vec![0; 64])?;
        assert_eq!(machine.buttons()[0].mask(), 1 << 63);
        Ok(())
    }

    #[rstest]
    #[case::no_lights(0, 0, vec![], 0, MachineError::NoLights)]
    #[case::too_many_lights(65, 0, vec![], 65, MachineError::TooManyLights(65))]
    #[case::mask_overflow(
        2, 0b100, vec![], 2,
        MachineError::TargetOutOfRange { mask: 0b100, light_count: 2 }
    )]
    #[case::empty_button(2, 0, vec![vec![0], vec![]], 2, MachineError::EmptyButton { button: 1 })]
    #[case::light_out_of_range(
        2, 0, vec![vec![0, 2]], 2,
        MachineError::LightOutOfRange { button: 0, light: 2, light_count: 2 }
    )]
    #[case::duplicate_light(
        3, 0, vec![vec![1], vec![2, 0, 2]], 3,
        MachineError::DuplicateLight { button: 1, light: 2 }
    )]
    #[case::joltage_length(
        3, 0, vec![vec![0]], 2,
        MachineError::JoltageLength { expected: 3, actual: 2 }
    )]
    fn rejects_malformed_machines(
        #[case] light_count: usize,
        #[case] target_mask: LightMask,
        #[case] buttons: Vec<Vec<usize>>,
        #[case] joltage_len: usize,
        #[case] expected: MachineError,
    ) {
        let result = Machine::new(light_count, target_mask, buttons, vec![0; joltage_len]);
        assert_eq!(result, Err(expected));
    }
}
