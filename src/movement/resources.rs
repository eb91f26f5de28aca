//! Movement domain: input and spawn-time resources.

use bevy::prelude::*;

use crate::movement::{InputSnapshot, MotionConfig};

/// Latest keyboard snapshot, refreshed every frame.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct MovementInput(pub InputSnapshot);

/// Config given to newly spawned characters. Replaced by the content loader.
#[derive(Resource, Debug, Clone, Default, Deref, DerefMut)]
pub struct MotionDefaults(pub MotionConfig);

/// Probe geometry relative to the player body.
#[derive(Resource, Debug, Clone)]
pub struct ProbeLayout {
    pub body_size: Vec2,
    /// Thickness of each probe strip.
    pub thickness: f32,
    /// How far a probe's strip is shortened at each end, so the bottom probe
    /// does not catch walls and side probes do not catch the floor.
    pub inset: f32,
}

impl Default for ProbeLayout {
    fn default() -> Self {
        Self {
            body_size: Vec2::new(24.0, 48.0),
            thickness: 4.0,
            inset: 3.0,
        }
    }
}

impl ProbeLayout {
    /// Offset and size of the bottom probe.
    pub fn bottom(&self) -> (Vec2, Vec2) {
        let half = self.body_size / 2.0;
        (
            Vec2::new(0.0, -half.y),
            Vec2::new(self.body_size.x - 2.0 * self.inset, self.thickness),
        )
    }

    /// Offset and size of the left probe; the right one mirrors it.
    pub fn left(&self) -> (Vec2, Vec2) {
        let half = self.body_size / 2.0;
        (
            Vec2::new(-half.x, 0.0),
            Vec2::new(self.thickness, self.body_size.y - 2.0 * self.inset),
        )
    }

    pub fn right(&self) -> (Vec2, Vec2) {
        let (offset, size) = self.left();
        (Vec2::new(-offset.x, offset.y), size)
    }
}
