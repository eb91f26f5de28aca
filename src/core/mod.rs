//! Core domain: camera, pause tracking and shared run conditions.

mod resources;
mod systems;

pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera, sync_physics_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (sync_physics_pause, follow_player));
    }
}
