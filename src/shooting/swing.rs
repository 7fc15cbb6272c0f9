//! Swing input and aim

use bevy::prelude::*;

use crate::tuning::PhysicsTweaks;

/// Buffered swing input, filled in Update and consumed by the fixed-step core.
///
/// `pressed` and `released` are edges latched until `consume_edges`.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SwingInput {
    pub pressed: bool,
    pub held: bool,
    pub released: bool,
    /// World-space aim, normally the camera forward vector
    pub aim: Vec3,
}

impl SwingInput {
    pub fn consume_edges(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}

/// Aim with the fixed upward bias, normalized. `None` for a zero aim.
pub fn shot_direction(aim: Vec3, tweaks: &PhysicsTweaks) -> Option<Vec3> {
    let aim = aim.try_normalize()?;
    (aim + Vec3::Y * tweaks.aim_lift).try_normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_direction_adds_lift() {
        let tweaks = PhysicsTweaks::default();
        let dir = shot_direction(Vec3::new(0.0, 0.0, -3.0), &tweaks).unwrap();
        let expected = Vec3::new(0.0, 0.2, -1.0).normalize();
        assert!((dir - expected).length() < 1e-6);
    }

    #[test]
    fn test_zero_aim_has_no_direction() {
        let tweaks = PhysicsTweaks::default();
        assert!(shot_direction(Vec3::ZERO, &tweaks).is_none());
    }

    #[test]
    fn test_consume_edges_keeps_held() {
        let mut input = SwingInput {
            pressed: true,
            held: true,
            released: true,
            aim: Vec3::NEG_Z,
        };
        input.consume_edges();
        assert!(!input.pressed && !input.released);
        assert!(input.held);
        assert_eq!(input.aim, Vec3::NEG_Z);
    }
}
