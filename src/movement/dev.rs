//! Movement domain: a small test room for the demo.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, MotionConfig};

/// World gravity for the demo, in pixels per second squared.
pub const DEMO_GRAVITY: f32 = 1000.0;

/// Built-in tuning at the demo's pixel scale, used when no profile loads.
pub fn demo_motion() -> MotionConfig {
    MotionConfig {
        jump_speed: 420.0,
        move_speed: 240.0,
        ..MotionConfig::default()
    }
}

fn spawn_block(commands: &mut Commands, color: Color, position: Vec2, size: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Probe]),
    ));
}

pub fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor and walls
    spawn_block(
        &mut commands,
        ground_color,
        Vec2::new(0.0, -200.0),
        Vec2::new(800.0, 40.0),
    );
    spawn_block(
        &mut commands,
        wall_color,
        Vec2::new(-420.0, 50.0),
        Vec2::new(40.0, 500.0),
    );
    spawn_block(
        &mut commands,
        wall_color,
        Vec2::new(420.0, 50.0),
        Vec2::new(40.0, 500.0),
    );

    // Platforms, each reachable from the one before with a double jump
    spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(-250.0, -50.0),
        Vec2::new(150.0, 20.0),
    );
    spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(250.0, 50.0),
        Vec2::new(150.0, 20.0),
    );
    spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(0.0, 150.0),
        Vec2::new(120.0, 20.0),
    );

    // Pillar to stop against
    spawn_block(
        &mut commands,
        wall_color,
        Vec2::new(-100.0, -130.0),
        Vec2::new(30.0, 100.0),
    );
}
