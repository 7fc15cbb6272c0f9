//! HUD components and systems (score display, capture banner)

use bevy::prelude::*;

use crate::constants::*;
use crate::scoring::CaptureBanner;
use crate::session::GolfSession;

/// Score text component
#[derive(Component)]
pub struct ScoreText;

/// Capture banner text component
#[derive(Component)]
pub struct BannerText;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Holes: 0  |  Strokes: 0"),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        ScoreText,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextColor(TEXT_ACCENT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(20.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        BannerText,
    ));
}

/// Update score display
pub fn update_score_text(
    session: Res<GolfSession>,
    mut text_query: Query<&mut Text, With<ScoreText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    text.0 = format!(
        "Holes: {}  |  Strokes: {}",
        session.score.holes, session.score.strokes
    );
}

/// Show the capture banner while its timer runs
pub fn update_banner_text(
    banner: Res<CaptureBanner>,
    mut text_query: Query<&mut Text, With<BannerText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    if banner.is_visible() {
        if text.0 != banner.message {
            text.0 = banner.message.clone();
        }
    } else if !text.0.is_empty() {
        text.0.clear();
    }
}
