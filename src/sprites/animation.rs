//! Animation state machine and playback.
//!
//! [`AnimatorParams`] is the sink the motion step writes into: derived flags
//! plus horizontal speed. [`AnimationController`] turns those flags and the
//! jump trigger into a clip state and advances its frames.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{AnimState, JumpTriggered, VerticalMotion};

/// Animator inputs written by the motion step. Only written when a value
/// actually changes, so `Changed<AnimatorParams>` marks real transitions.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimatorParams {
    pub state: AnimState,
    pub speed: f32,
}

/// Animation states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    /// Take-off, played once per accepted jump.
    Jump,
    Rise,
    Fall,
}

impl AnimationState {
    /// Clip for a set of derived flags. Vertical motion wins over walking.
    pub fn from_flags(flags: &AnimState) -> Self {
        match flags.vertical {
            VerticalMotion::Rising => AnimationState::Rise,
            VerticalMotion::Falling => AnimationState::Fall,
            VerticalMotion::Neutral if flags.walking => AnimationState::Walk,
            VerticalMotion::Neutral => AnimationState::Idle,
        }
    }
}

/// Component for animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frame if state changed.
    /// Returns whether the state changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }

        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.looping = state != AnimationState::Jump;

        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Walk => 4,
            AnimationState::Jump => 2,
            AnimationState::Rise => 2,
            AnimationState::Fall => 2,
        };

        self.frame_duration = match state {
            AnimationState::Jump => 0.08,
            _ => 0.15,
        };

        true
    }

    /// A take-off clip still playing; flag-driven states wait for it.
    pub fn is_taking_off(&self) -> bool {
        self.state == AnimationState::Jump && !self.finished
    }

    /// Advance by `dt`. A non-looping clip holds its last frame once done.
    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }

        self.frame_timer += dt;
        if self.frame_timer < self.frame_duration {
            return;
        }

        self.frame_timer -= self.frame_duration;
        self.current_frame += 1;

        if self.current_frame < self.total_frames {
            return;
        }

        if self.looping {
            self.current_frame = 0;
        } else {
            self.current_frame = self.total_frames - 1;
            self.finished = true;
        }
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Start the take-off clip for every accepted jump.
pub fn play_jump_trigger(
    mut jump_events: MessageReader<JumpTriggered>,
    mut query: Query<&mut AnimationController>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for event in jump_events.read() {
        let Ok(mut controller) = query.get_mut(event.entity) else {
            continue;
        };

        let from = controller.state;
        // Re-trigger a double jump even if the take-off clip is still playing.
        if from == AnimationState::Jump {
            controller.current_frame = 0;
            controller.frame_timer = 0.0;
            controller.finished = false;
        } else if controller.set_state(AnimationState::Jump) {
            changed_events.write(AnimationStateChanged {
                entity: event.entity,
                from,
                to: AnimationState::Jump,
            });
        }
    }
}

/// Follow the derived flags unless a take-off clip is playing.
pub fn animation_state_machine(
    mut query: Query<(Entity, &AnimatorParams, &mut AnimationController)>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, params, mut controller) in &mut query {
        if controller.is_taking_off() {
            continue;
        }

        let from = controller.state;
        let to = AnimationState::from_flags(&params.state);
        if controller.set_state(to) {
            changed_events.write(AnimationStateChanged { entity, from, to });
        }
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(time: Res<Time>, mut query: Query<&mut AnimationController>) {
    for mut controller in &mut query {
        controller.advance(time.delta_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;

    #[test]
    fn flags_map_to_clip_states() {
        let rising = AnimState::from_velocity(Vec2::new(3.0, 5.0), false);
        let falling = AnimState::from_velocity(Vec2::new(0.0, -5.0), false);
        let walking = AnimState::from_velocity(Vec2::new(4.0, 0.0), false);
        let idle = AnimState::from_velocity(Vec2::ZERO, false);

        assert_eq!(AnimationState::from_flags(&rising), AnimationState::Rise);
        assert_eq!(AnimationState::from_flags(&falling), AnimationState::Fall);
        assert_eq!(AnimationState::from_flags(&walking), AnimationState::Walk);
        assert_eq!(AnimationState::from_flags(&idle), AnimationState::Idle);
    }

    #[test]
    fn set_state_resets_playback_only_on_change() {
        let mut controller = AnimationController::default();
        controller.current_frame = 3;

        assert!(!controller.set_state(AnimationState::Idle));
        assert_eq!(controller.current_frame, 3);

        assert!(controller.set_state(AnimationState::Walk));
        assert_eq!(controller.current_frame, 0);
        assert!(controller.looping);
    }

    #[test]
    fn jump_clip_finishes_once() {
        let mut controller = AnimationController::default();
        controller.set_state(AnimationState::Jump);
        assert!(controller.is_taking_off());

        controller.advance(0.08);
        assert!(controller.is_taking_off());
        controller.advance(0.08);
        assert!(!controller.is_taking_off());
        assert_eq!(controller.current_frame, 1);

        // Further time holds the last frame
        controller.advance(1.0);
        assert!(controller.finished);
        assert_eq!(controller.current_frame, 1);
    }

    #[test]
    fn looping_clip_wraps() {
        let mut controller = AnimationController::default();
        for _ in 0..3 {
            controller.advance(0.15);
        }
        assert_eq!(controller.current_frame, 3);
        controller.advance(0.15);
        assert_eq!(controller.current_frame, 0);
        assert!(!controller.finished);
    }
}
