//! Movement domain: the character motion state machine.
//!
//! [`MotionController`] owns everything that decides how a character moves:
//! remaining jumps, probe contacts, the held jump button, and the animation
//! flags derived from velocity. It never touches the ECS world directly. The
//! systems in `movement::systems` feed it input snapshots, contact events and
//! fixed physics steps, and write its output back to the rigid body.

use bevy::log::debug;
use bevy::math::Vec2;
use bevy::prelude::Component;

use crate::movement::config::{ConfigError, MotionConfig};

/// Jumps available after touching ground.
pub const MAX_JUMPS: u8 = 2;
/// Jumps left after walking (not jumping) off a ledge.
pub const LEDGE_JUMPS: u8 = 1;
/// Velocity dead-zone for animation flags.
pub const ANIM_EPSILON: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactZone {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Enter,
    Exit,
}

/// Category of the body a probe touched. Only ground counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTag {
    Ground,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub zone: ContactZone,
    pub phase: ContactPhase,
    pub tag: SurfaceTag,
}

impl ContactEvent {
    pub fn enter(zone: ContactZone, tag: SurfaceTag) -> Self {
        Self {
            zone,
            phase: ContactPhase::Enter,
            tag,
        }
    }

    pub fn exit(zone: ContactZone, tag: SurfaceTag) -> Self {
        Self {
            zone,
            phase: ContactPhase::Exit,
            tag,
        }
    }
}

/// Probe contacts, counted per zone so that two overlapping ground bodies
/// keep the flag set until both are left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactState {
    ground: u16,
    left_wall: u16,
    right_wall: u16,
}

impl ContactState {
    pub fn grounded(&self) -> bool {
        self.ground > 0
    }

    pub fn left_wall(&self) -> bool {
        self.left_wall > 0
    }

    pub fn right_wall(&self) -> bool {
        self.right_wall > 0
    }

    fn counter_mut(&mut self, zone: ContactZone) -> &mut u16 {
        match zone {
            ContactZone::Bottom => &mut self.ground,
            ContactZone::Left => &mut self.left_wall,
            ContactZone::Right => &mut self.right_wall,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct JumpState {
    count: u8,
    held: bool,
    /// Set by a successful trigger, cleared by the physics step that applies
    /// the impulse.
    impulse_pending: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerticalMotion {
    #[default]
    Neutral,
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimFlag {
    Idle,
    Rising,
    Falling,
    Walking,
}

impl AnimFlag {
    pub const ALL: [AnimFlag; 4] = [
        AnimFlag::Idle,
        AnimFlag::Rising,
        AnimFlag::Falling,
        AnimFlag::Walking,
    ];
}

/// Animation flags derived from velocity once per physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimState {
    pub vertical: VerticalMotion,
    pub walking: bool,
    pub idle: bool,
}

impl Default for AnimState {
    fn default() -> Self {
        Self {
            vertical: VerticalMotion::Neutral,
            walking: false,
            idle: true,
        }
    }
}

impl AnimState {
    /// Derive flags from a velocity. Const-move characters are never idle.
    pub fn from_velocity(velocity: Vec2, const_move: bool) -> Self {
        let vertical = if velocity.y > ANIM_EPSILON {
            VerticalMotion::Rising
        } else if velocity.y < -ANIM_EPSILON {
            VerticalMotion::Falling
        } else {
            VerticalMotion::Neutral
        };
        let walking = velocity.x.abs() > ANIM_EPSILON;

        Self {
            vertical,
            walking,
            idle: !walking && vertical == VerticalMotion::Neutral && !const_move,
        }
    }

    pub fn is_rising(&self) -> bool {
        self.vertical == VerticalMotion::Rising
    }

    pub fn is_falling(&self) -> bool {
        self.vertical == VerticalMotion::Falling
    }

    pub fn get(&self, flag: AnimFlag) -> bool {
        match flag {
            AnimFlag::Idle => self.idle,
            AnimFlag::Rising => self.is_rising(),
            AnimFlag::Falling => self.is_falling(),
            AnimFlag::Walking => self.walking,
        }
    }

    /// Flags whose value differs from `previous`, with their new value.
    pub fn changes(self, previous: AnimState) -> impl Iterator<Item = (AnimFlag, bool)> {
        AnimFlag::ALL.into_iter().filter_map(move |flag| {
            let now = self.get(flag);
            (now != previous.get(flag)).then_some((flag, now))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Input sampled once per rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub jump_down: bool,
    pub jump_up: bool,
    pub jump_held: bool,
    /// Horizontal axis in `[-1, 1]`.
    pub move_axis: f32,
    pub left_pressed: bool,
    pub right_pressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutput {
    /// A jump was accepted this frame; the impulse lands on the next step.
    pub jump_triggered: bool,
    pub facing: Facing,
}

/// One fixed physics step. `velocity` already includes ordinary gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsStep {
    pub velocity: Vec2,
    pub gravity: Vec2,
    pub dt: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub velocity: Vec2,
    pub anim: AnimState,
    /// `|velocity.x|` of the incoming velocity, for the animator.
    pub speed: f32,
    /// Extra vertical velocity added by gravity shaping.
    pub shaping: f32,
    pub impulse_applied: bool,
}

/// Extra vertical velocity for one step of asymmetric gravity.
///
/// Falling gets `fall_multiplier`, rising with the button released gets
/// `low_jump_multiplier`, a held rise gets nothing.
pub fn gravity_shaping(
    config: &MotionConfig,
    vertical_velocity: f32,
    jump_held: bool,
    gravity_y: f32,
    dt: f32,
) -> f32 {
    if vertical_velocity < 0.0 {
        gravity_y * (config.fall_multiplier - 1.0) * dt
    } else if vertical_velocity > 0.0 && !jump_held {
        gravity_y * (config.low_jump_multiplier - 1.0) * dt
    } else {
        0.0
    }
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    config: MotionConfig,
    contacts: ContactState,
    jump: JumpState,
    anim: AnimState,
    facing: Facing,
    move_axis: f32,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            contacts: ContactState::default(),
            jump: JumpState::default(),
            anim: AnimState::default(),
            facing: Facing::default(),
            move_axis: 0.0,
        })
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn contacts(&self) -> &ContactState {
        &self.contacts
    }

    pub fn jump_count(&self) -> u8 {
        self.jump.count
    }

    pub fn jump_held(&self) -> bool {
        self.jump.held
    }

    pub fn impulse_pending(&self) -> bool {
        self.jump.impulse_pending
    }

    pub fn anim(&self) -> AnimState {
        self.anim
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn set_config(&mut self, config: MotionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_jump_speed(&mut self, jump_speed: f32) -> Result<(), ConfigError> {
        self.set_config(MotionConfig {
            jump_speed,
            ..self.config
        })
    }

    pub fn set_move_speed(&mut self, move_speed: f32) -> Result<(), ConfigError> {
        self.set_config(MotionConfig {
            move_speed,
            ..self.config
        })
    }

    pub fn set_chasing_rate(&mut self, chasing_rate: f32) -> Result<(), ConfigError> {
        self.set_config(MotionConfig {
            chasing_rate,
            ..self.config
        })
    }

    pub fn set_const_move(&mut self, const_move: bool) {
        self.config.const_move = const_move;
    }

    pub fn set_chasing(&mut self, chasing: bool) {
        self.config.chasing = chasing;
    }

    /// Apply a probe enter/exit. Events from non-ground bodies are ignored.
    pub fn on_contact(&mut self, event: ContactEvent) {
        if event.tag != SurfaceTag::Ground {
            return;
        }

        let was_grounded = self.contacts.grounded();
        let counter = self.contacts.counter_mut(event.zone);
        match event.phase {
            ContactPhase::Enter => *counter = counter.saturating_add(1),
            ContactPhase::Exit => *counter = counter.saturating_sub(1),
        }

        if event.zone != ContactZone::Bottom {
            return;
        }

        match event.phase {
            ContactPhase::Enter => {
                self.jump.count = MAX_JUMPS;
                debug!("Landed: jump_count={}", self.jump.count);
            }
            ContactPhase::Exit if was_grounded && !self.contacts.grounded() => {
                // Walking off a ledge leaves one jump, never a fresh double jump.
                if self.anim.idle || self.anim.walking {
                    self.jump.count = LEDGE_JUMPS;
                }
                debug!(
                    "Left ground: idle={}, walking={}, jump_count={}",
                    self.anim.idle, self.anim.walking, self.jump.count
                );
            }
            ContactPhase::Exit => {}
        }
    }

    /// Discrete per-frame logic: jump edges and facing.
    pub fn on_frame(&mut self, input: &InputSnapshot) -> FrameOutput {
        self.move_axis = if input.move_axis.is_finite() {
            input.move_axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        let mut jump_triggered = false;
        if input.jump_down {
            self.jump.held = true;
            if self.jump.count > 0 {
                self.jump.count -= 1;
                self.jump.impulse_pending = true;
                jump_triggered = true;
                debug!("Jump triggered: jump_count now {}", self.jump.count);
            }
        } else if input.jump_up || !input.jump_held {
            self.jump.held = false;
        }

        if input.right_pressed {
            self.facing = Facing::Right;
        } else if input.left_pressed {
            self.facing = Facing::Left;
        }

        FrameOutput {
            jump_triggered,
            facing: self.facing,
        }
    }

    /// Continuous per-step logic: animation flags, horizontal motion, the
    /// pending jump impulse, gravity shaping and wall blocking, in that order.
    pub fn on_physics_step(&mut self, step: &PhysicsStep) -> StepOutput {
        let previous = self.anim;
        self.anim = AnimState::from_velocity(step.velocity, self.config.const_move);
        for (flag, value) in self.anim.changes(previous) {
            debug!("Animation flag {:?} -> {}", flag, value);
        }

        let mut velocity = Vec2::new(
            self.horizontal_axis() * self.config.move_speed,
            step.velocity.y,
        );

        let impulse_applied = std::mem::take(&mut self.jump.impulse_pending);
        if impulse_applied {
            velocity = Vec2::new(0.0, self.config.jump_speed);
        }

        let shaping = gravity_shaping(
            &self.config,
            velocity.y,
            self.jump.held,
            step.gravity.y,
            step.dt,
        );
        velocity.y += shaping;

        if (velocity.x > 0.0 && self.contacts.right_wall())
            || (velocity.x < 0.0 && self.contacts.left_wall())
        {
            velocity.x = 0.0;
        }

        StepOutput {
            velocity,
            anim: self.anim,
            speed: step.velocity.x.abs(),
            shaping,
            impulse_applied,
        }
    }

    /// Horizontal input after const-move and chase overrides.
    pub fn horizontal_axis(&self) -> f32 {
        if !self.config.const_move {
            self.move_axis
        } else if self.config.chasing && self.contacts.grounded() {
            self.config.chasing_rate
        } else {
            1.0
        }
    }
}
