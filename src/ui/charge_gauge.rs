//! Charge gauge UI components and systems

use bevy::prelude::*;

use crate::constants::*;
use crate::session::GolfSession;
use crate::tuning::PhysicsTweaks;

/// Charge gauge background component
#[derive(Component)]
pub struct ChargeGaugeBackground;

/// Charge gauge fill component
#[derive(Component)]
pub struct ChargeGaugeFill;

/// Bottom-centre bar, hidden until a charge starts
pub fn spawn_charge_gauge(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(40.0),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-CHARGE_GAUGE_WIDTH / 2.0)),
                width: Val::Px(CHARGE_GAUGE_WIDTH),
                height: Val::Px(CHARGE_GAUGE_HEIGHT),
                padding: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Visibility::Hidden,
            ChargeGaugeBackground,
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Percent(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.0, 0.8, 0.0)),
                ChargeGaugeFill,
            ));
        });
}

/// Update charge gauge display
pub fn update_charge_gauge(
    tweaks: Res<PhysicsTweaks>,
    session: Res<GolfSession>,
    mut bg_query: Query<&mut Visibility, With<ChargeGaugeBackground>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<ChargeGaugeFill>>,
) {
    let charging = session.shot.is_charging();
    if let Ok(mut visibility) = bg_query.single_mut() {
        *visibility = if charging {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    let Ok((mut node, mut color)) = fill_query.single_mut() else {
        return;
    };
    let charge_pct = session.charge_fraction(&tweaks);
    node.width = Val::Percent(charge_pct * 100.0);

    // Color transition: green (0%) -> red (100%)
    let r = charge_pct * 0.9;
    let g = (1.0 - charge_pct) * 0.8;
    color.0 = Color::srgb(r, g, 0.0);
}
