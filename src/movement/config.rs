//! Movement domain: per-character motion tuning and its validation.

use serde::{Deserialize, Serialize};

/// Tuning values for a single character.
///
/// Units follow whatever the physics world uses; the defaults assume one
/// unit per meter and a gravity of roughly `-9.81`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Vertical speed set by a jump impulse.
    pub jump_speed: f32,
    /// Horizontal speed at full axis deflection.
    pub move_speed: f32,
    /// Gravity multiplier while falling.
    pub fall_multiplier: f32,
    /// Gravity multiplier while rising with the jump button released.
    pub low_jump_multiplier: f32,
    /// Always run right, ignoring the live move axis.
    pub const_move: bool,
    /// Chase mode: while const-moving and grounded, run at `chasing_rate`.
    pub chasing: bool,
    pub chasing_rate: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            jump_speed: 7.0,
            move_speed: 4.0,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            const_move: false,
            chasing: false,
            chasing_rate: 1.0,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_speed("jump_speed", self.jump_speed)?;
        check_speed("move_speed", self.move_speed)?;
        check_multiplier("fall_multiplier", self.fall_multiplier)?;
        check_multiplier("low_jump_multiplier", self.low_jump_multiplier)?;
        check_finite("chasing_rate", self.chasing_rate)
    }

    /// Apex height of a held jump from rest under `gravity` (positive magnitude).
    /// Uses h = v² / (2g).
    pub fn held_jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_speed * self.jump_speed / (2.0 * gravity)
    }

    /// Apex height of a jump released immediately; gravity is scaled by the
    /// low-jump multiplier for the whole ascent.
    pub fn tapped_jump_height(&self, gravity: f32) -> f32 {
        self.held_jump_height(gravity * self.low_jump_multiplier)
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn check_speed(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeSpeed { field, value });
    }
    Ok(())
}

fn check_multiplier(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    // Below one the "extra" gravity would push the character upward.
    if value < 1.0 {
        return Err(ConfigError::MultiplierBelowOne { field, value });
    }
    Ok(())
}

/// A tuning value that the controller refuses to run with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NotFinite { field: &'static str, value: f32 },
    NegativeSpeed { field: &'static str, value: f32 },
    MultiplierBelowOne { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFinite { field, value } => {
                write!(f, "{} must be finite, got {}", field, value)
            }
            ConfigError::NegativeSpeed { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            ConfigError::MultiplierBelowOne { field, value } => {
                write!(f, "{} must be at least 1.0, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
