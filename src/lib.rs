//! Platformer character motion: a jump/gravity/contact state machine and the
//! Bevy + Avian2D plugins that drive it.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;
pub mod sprites;

pub mod prelude {
    pub use crate::content::{ContentPaths, ContentPlugin, MotionProfiles};
    pub use crate::core::{CorePlugin, GameplayPaused};
    pub use crate::movement::{
        AnimState, ContactEvent, ContactZone, Facing, InputSnapshot, MotionConfig,
        MotionController, MovementPlugin, PhysicsStep, SurfaceTag, spawn_character,
    };
    pub use crate::sprites::{AnimationController, AnimatorParams, SpritesPlugin};
}
