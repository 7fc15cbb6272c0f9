//! Shot phase state machine and charge-to-power mapping

use bevy::prelude::*;

use crate::helpers::lerp;
use crate::shooting::SwingInput;
use crate::tuning::PhysicsTweaks;

/// Where the current shot is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ShotPhase {
    /// Waiting for the swing button
    #[default]
    Idle,
    /// Swing held; `elapsed` is clamped to the max charge time
    Charging { elapsed: f32 },
    /// Ball is moving; resolves once it comes to rest
    InMotion { power: f32 },
}

impl ShotPhase {
    pub fn name(&self) -> &'static str {
        match self {
            ShotPhase::Idle => "Idle",
            ShotPhase::Charging { .. } => "Charging",
            ShotPhase::InMotion { .. } => "InMotion",
        }
    }

    pub fn is_charging(&self) -> bool {
        matches!(self, ShotPhase::Charging { .. })
    }

    pub fn in_motion(&self) -> bool {
        matches!(self, ShotPhase::InMotion { .. })
    }

    /// Fraction of full charge, 0.0 outside Charging
    pub fn charge_fraction(&self, tweaks: &PhysicsTweaks) -> f32 {
        match self {
            ShotPhase::Charging { elapsed } => charge_fraction(*elapsed, tweaks),
            _ => 0.0,
        }
    }

    /// Apply one frame of swing input to the charge.
    ///
    /// A press edge while Idle starts a fresh charge that already counts the
    /// press frame. Releasing (edge or button no longer held) while Charging
    /// reports the charge and power; the caller decides what phase follows.
    /// Input is ignored while the ball is in motion.
    pub fn advance_charge(
        &mut self,
        input: &SwingInput,
        dt: f32,
        tweaks: &PhysicsTweaks,
    ) -> SwingAction {
        let mut action = SwingAction::None;

        if *self == ShotPhase::Idle && input.pressed {
            *self = ShotPhase::Charging { elapsed: 0.0 };
            action = SwingAction::ChargeStarted;
        }

        if let ShotPhase::Charging { elapsed } = self {
            if input.held {
                *elapsed = (*elapsed + dt).clamp(0.0, tweaks.charge_time);
            }
            if input.released || !input.held {
                let charge = *elapsed;
                return SwingAction::Released {
                    charge,
                    power: shot_power(charge, tweaks),
                };
            }
        }

        action
    }
}

/// Result of feeding one frame of input to the charge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwingAction {
    None,
    ChargeStarted,
    Released { charge: f32, power: f32 },
}

pub fn charge_fraction(elapsed: f32, tweaks: &PhysicsTweaks) -> f32 {
    if tweaks.charge_time <= 0.0 {
        return 1.0;
    }
    (elapsed / tweaks.charge_time).clamp(0.0, 1.0)
}

/// Linear map from charge time to launch power
pub fn shot_power(elapsed: f32, tweaks: &PhysicsTweaks) -> f32 {
    lerp(
        tweaks.min_power,
        tweaks.max_power,
        charge_fraction(elapsed, tweaks),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn held() -> SwingInput {
        SwingInput {
            held: true,
            ..default()
        }
    }

    fn pressed() -> SwingInput {
        SwingInput {
            pressed: true,
            held: true,
            ..default()
        }
    }

    fn released() -> SwingInput {
        SwingInput {
            released: true,
            ..default()
        }
    }

    #[test]
    fn test_shot_power_endpoints() {
        let tweaks = PhysicsTweaks::default();
        assert_eq!(shot_power(0.0, &tweaks), 2.0);
        assert_eq!(shot_power(2.0, &tweaks), 30.0);
        assert_eq!(shot_power(1.0, &tweaks), 16.0);
        assert_eq!(shot_power(5.0, &tweaks), 30.0);
    }

    #[test]
    fn test_full_charge_yields_max_power() {
        let tweaks = PhysicsTweaks::default();
        let mut phase = ShotPhase::Idle;
        assert_eq!(
            phase.advance_charge(&pressed(), DT, &tweaks),
            SwingAction::ChargeStarted
        );
        for _ in 0..150 {
            assert_eq!(phase.advance_charge(&held(), DT, &tweaks), SwingAction::None);
        }
        match phase.advance_charge(&released(), DT, &tweaks) {
            SwingAction::Released { charge, power } => {
                assert!((charge - 2.0).abs() < 1e-4);
                assert!((power - 30.0).abs() < 1e-3);
            }
            other => panic!("expected release, got {:?}", other),
        }
    }

    #[test]
    fn test_next_frame_release_counts_press_frame() {
        let tweaks = PhysicsTweaks::default();
        let mut phase = ShotPhase::Idle;
        phase.advance_charge(&pressed(), DT, &tweaks);
        match phase.advance_charge(&released(), DT, &tweaks) {
            SwingAction::Released { charge, power } => {
                assert!((charge - DT).abs() < 1e-6);
                assert!((power - (2.0 + 28.0 * DT / 2.0)).abs() < 1e-4);
            }
            other => panic!("expected release, got {:?}", other),
        }
    }

    #[test]
    fn test_tap_in_single_frame() {
        let tweaks = PhysicsTweaks::default();
        let mut phase = ShotPhase::Idle;
        let tap = SwingInput {
            pressed: true,
            released: true,
            ..default()
        };
        assert_eq!(
            phase.advance_charge(&tap, DT, &tweaks),
            SwingAction::Released {
                charge: 0.0,
                power: 2.0
            }
        );
    }

    #[test]
    fn test_input_ignored_while_in_motion() {
        let tweaks = PhysicsTweaks::default();
        let mut phase = ShotPhase::InMotion { power: 10.0 };
        assert_eq!(phase.advance_charge(&pressed(), DT, &tweaks), SwingAction::None);
        assert_eq!(phase, ShotPhase::InMotion { power: 10.0 });
    }

    #[test]
    fn test_charge_fraction() {
        let tweaks = PhysicsTweaks::default();
        assert_eq!(ShotPhase::Idle.charge_fraction(&tweaks), 0.0);
        assert_eq!(
            ShotPhase::Charging { elapsed: 0.5 }.charge_fraction(&tweaks),
            0.25
        );
    }
}
