//! Movement domain: character spawning with its contact probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ContactZone, GameLayer, MotionConfig, MotionController, MotionDefaults, Player, Probe,
    ProbeLayout, ProbeRig,
};
use crate::sprites::{AnimationController, AnimatorParams};

/// Spawn a controlled character and its three probes.
///
/// The probes are children of the body, so Avian attaches them to the same
/// rigid body; their collision messages are routed back to the controller
/// through [`Probe::owner`].
pub fn spawn_character(
    commands: &mut Commands,
    controller: MotionController,
    position: Vec2,
    layout: &ProbeLayout,
) -> Entity {
    let size = layout.body_size;
    let character = commands
        .spawn((
            // Identity & Movement
            (Player, controller),
            // Animation
            (AnimatorParams::default(), AnimationController::default()),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .id();

    let mut spawn_probe = |zone: ContactZone, (offset, probe_size): (Vec2, Vec2)| {
        commands
            .spawn((
                Probe {
                    owner: character,
                    zone,
                },
                Transform::from_xyz(offset.x, offset.y, 0.0),
                Collider::rectangle(probe_size.x, probe_size.y),
                ColliderDensity(0.0),
                Sensor,
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Probe, [GameLayer::Ground]),
                ChildOf(character),
            ))
            .id()
    };

    let rig = ProbeRig {
        bottom: spawn_probe(ContactZone::Bottom, layout.bottom()),
        left: spawn_probe(ContactZone::Left, layout.left()),
        right: spawn_probe(ContactZone::Right, layout.right()),
    };
    commands.entity(character).insert(rig);

    character
}

/// Spawn the player from the loaded motion defaults.
pub(crate) fn spawn_player(
    mut commands: Commands,
    defaults: Res<MotionDefaults>,
    layout: Res<ProbeLayout>,
    gravity: Option<Res<Gravity>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let controller = match MotionController::new(defaults.0) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Invalid motion defaults ({}), using built-in tuning", e);
            match MotionController::new(MotionConfig::default()) {
                Ok(controller) => controller,
                Err(e) => panic!("built-in motion tuning is invalid: {}", e),
            }
        }
    };

    let config = *controller.config();
    info!(
        "Spawning player: jump_speed={}, move_speed={}, const_move={}, chasing={}",
        config.jump_speed, config.move_speed, config.const_move, config.chasing,
    );
    if let Some(gravity) = gravity {
        let g = -gravity.0.y;
        info!(
            "Jump apex: held={:.1}, tapped={:.1}",
            config.held_jump_height(g),
            config.tapped_jump_height(g)
        );
    }

    spawn_character(&mut commands, controller, Vec2::new(0.0, 100.0), &layout);
}
