//! Movement domain: messages emitted by the motion systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A jump was accepted; the impulse lands on the next fixed step.
#[derive(Debug, Clone, Copy)]
pub struct JumpTriggered {
    pub entity: Entity,
    pub jumps_remaining: u8,
}

impl Message for JumpTriggered {}
