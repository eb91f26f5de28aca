//! Core domain: camera setup and pause propagation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::movement::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Stop the physics clock together with gameplay systems.
pub(crate) fn sync_physics_pause(paused: Res<GameplayPaused>, mut time: ResMut<Time<Physics>>) {
    if !paused.is_changed() {
        return;
    }

    if paused.is_paused() {
        time.pause();
        info!("Gameplay paused: {:?}", paused.sources);
    } else {
        time.unpause();
        info!("Gameplay resumed");
    }
}

/// Keep the camera horizontally centered on the player.
pub(crate) fn follow_player(
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let (Ok(player), Ok(mut camera)) = (player.single(), camera.single_mut()) else {
        return;
    };
    camera.translation.x = player.translation.x;
}
