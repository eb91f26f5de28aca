//! Debug tools for tuning motion at runtime.
//!
//! Hotkeys (hold Ctrl):
//! - C / V: toggle const-move / chasing
//! - [ / ]: chasing rate down / up
//! - - / =: jump speed down / up
//! - , / .: move speed down / up
//! - N: next motion profile
//! - P: pause
//! - T: trace animation transitions
//! - L: log controller state

mod state;
mod systems;

pub use state::{DebugAction, DebugState};

use bevy::prelude::*;

use crate::debug::systems::{handle_debug_hotkeys, trace_animation_changes};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, trace_animation_changes));
    }
}
