//! Scripted input injection for tests

use bevy::prelude::*;
use std::collections::HashMap;

use super::parser::FrameInput;
use crate::shooting::SwingInput;

/// Scripted swing inputs for a test
#[derive(Default)]
pub struct ScriptedInputs {
    /// Map of frame -> input change
    pub frames: HashMap<u64, FrameInput>,
    /// Swing held and aim carried between frames
    held: bool,
    aim: Vec3,
    /// Current frame number
    pub current_frame: u64,
    /// Last frame with a scripted input
    pub max_frame: u64,
}

impl ScriptedInputs {
    /// Create from parsed frame inputs
    pub fn from_inputs(inputs: &[FrameInput]) -> Self {
        let mut frames = HashMap::new();
        let mut max_frame = 0u64;

        for fi in inputs {
            max_frame = max_frame.max(fi.frame);
            frames.insert(fi.frame, fi.clone());
        }

        Self {
            frames,
            held: false,
            aim: Vec3::NEG_Z,
            current_frame: 0,
            max_frame,
        }
    }

    /// Swing input for the current frame, then advance.
    ///
    /// Edges are derived from changes in the scripted held state, the same
    /// way `capture_input` derives them from the keyboard.
    pub fn advance_frame(&mut self) -> SwingInput {
        let mut input = SwingInput {
            held: self.held,
            aim: self.aim,
            ..default()
        };

        if let Some(change) = self.frames.get(&self.current_frame) {
            if let Some(aim) = change.aim {
                self.aim = Vec3::from_array(aim);
                input.aim = self.aim;
            }
            if let Some(swing) = change.swing {
                input.pressed = swing && !self.held;
                input.released = !swing && self.held;
                self.held = swing;
                input.held = swing;
            }
        }

        self.current_frame += 1;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(frame: u64, swing: Option<bool>) -> FrameInput {
        FrameInput {
            frame,
            swing,
            aim: None,
        }
    }

    #[test]
    fn test_edges_follow_held_changes() {
        let mut scripted =
            ScriptedInputs::from_inputs(&[change(1, Some(true)), change(3, Some(false))]);

        let f0 = scripted.advance_frame();
        assert!(!f0.pressed && !f0.held);

        let f1 = scripted.advance_frame();
        assert!(f1.pressed && f1.held);

        let f2 = scripted.advance_frame();
        assert!(!f2.pressed && f2.held);

        let f3 = scripted.advance_frame();
        assert!(f3.released && !f3.held);
        assert_eq!(f3.aim, Vec3::NEG_Z);
        assert_eq!(scripted.max_frame, 3);
    }
}
