//! Sprites module: animation state and playback for characters.

pub mod animation;

use bevy::prelude::*;

pub use animation::*;

use crate::movement::MotionSystems;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>().add_systems(
                Update,
                (
                    play_jump_trigger,
                    animation_state_machine,
                    update_animation_frames,
                )
                    .chain()
                    .after(MotionSystems::Frame),
            );
    }
}
