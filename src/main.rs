use avian2d::prelude::*;
use bevy::prelude::*;

use platform_motion::movement::MotionDefaults;
use platform_motion::movement::dev::{DEMO_GRAVITY, demo_motion, spawn_test_room};
use platform_motion::prelude::*;
use platform_motion::sprites::AnimationState;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platform Motion".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * DEMO_GRAVITY))
    .insert_resource(MotionDefaults(demo_motion()))
    .add_plugins((CorePlugin, ContentPlugin, MovementPlugin, SpritesPlugin))
    .add_systems(Startup, spawn_test_room)
    .add_systems(Update, tint_by_animation);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(platform_motion::debug::DebugPlugin);

    app.run();
}

/// Flat-colored stand-in for real clips.
fn tint_by_animation(
    mut query: Query<(&AnimationController, &mut Sprite), Changed<AnimationController>>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.color = match controller.state {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walk => Color::srgb(0.8, 0.9, 0.8),
            AnimationState::Jump => Color::srgb(1.0, 0.95, 0.6),
            AnimationState::Rise => Color::srgb(0.95, 0.85, 0.6),
            AnimationState::Fall => Color::srgb(0.7, 0.75, 0.95),
        };
    }
}
