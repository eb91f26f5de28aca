//! Movement domain: motion controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod config;
mod controller;
pub mod dev;
mod events;
mod resources;
mod systems;


pub use bootstrap::spawn_character;
pub use components::{GameLayer, Ground, Player, Probe, ProbeRig};
pub use config::{ConfigError, MotionConfig};
pub use controller::{
    ANIM_EPSILON, AnimFlag, AnimState, ContactEvent, ContactPhase, ContactState, ContactZone,
    Facing, FrameOutput, InputSnapshot, LEDGE_JUMPS, MAX_JUMPS, MotionController, PhysicsStep,
    StepOutput, SurfaceTag, VerticalMotion, gravity_shaping,
};
pub use events::JumpTriggered;
pub use resources::{MotionDefaults, MovementInput, ProbeLayout};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_frame_input, ingest_probe_contacts, read_input, step_motion, sync_facing,
    verify_probe_wiring,
};

/// Ordering handles for systems outside this module.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionSystems {
    /// Per-frame input and jump triggers (`Update`).
    Frame,
    /// Contact ingestion and the motion step (`FixedUpdate`).
    Step,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .init_resource::<MotionDefaults>()
            .init_resource::<ProbeLayout>()
            .add_message::<JumpTriggered>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    verify_probe_wiring,
                    (read_input, apply_frame_input, sync_facing)
                        .chain()
                        .run_if(gameplay_active),
                )
                    .chain()
                    .in_set(MotionSystems::Frame),
            )
            .add_systems(
                FixedUpdate,
                (
                    ingest_probe_contacts,
                    step_motion.run_if(gameplay_active),
                )
                    .chain()
                    .in_set(MotionSystems::Step),
            );
    }
}
