//! Debug domain: state for runtime tweaks.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Log every animation state transition
    pub trace_animation: bool,
}

/// Adjustments reachable from debug hotkeys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugAction {
    ToggleConstMove,
    ToggleChasing,
    ChasingRate(f32),
    JumpSpeed(f32),
    MoveSpeed(f32),
    NextProfile,
    TogglePause,
    ToggleAnimationTrace,
    LogState,
}

/// Step sizes for the numeric hotkeys.
pub const CHASING_RATE_STEP: f32 = 0.25;
pub const SPEED_STEP: f32 = 20.0;
