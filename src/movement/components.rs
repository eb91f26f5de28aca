//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::ContactZone;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Terrain: floors, platforms and walls alike
    Ground,
    /// Player body
    Player,
    /// Contact probes attached to the player (sensors only)
    Probe,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for terrain colliders. Probes only react to bodies carrying it.
#[derive(Component, Debug)]
pub struct Ground;

/// A sensor collider reporting contacts for one side of its owner.
#[derive(Component, Debug, Clone, Copy)]
pub struct Probe {
    pub owner: Entity,
    pub zone: ContactZone,
}

/// The three probes a controlled character must have.
#[derive(Component, Debug, Clone, Copy)]
pub struct ProbeRig {
    pub bottom: Entity,
    pub left: Entity,
    pub right: Entity,
}

impl ProbeRig {
    pub fn iter(&self) -> impl Iterator<Item = (ContactZone, Entity)> {
        [
            (ContactZone::Bottom, self.bottom),
            (ContactZone::Left, self.left),
            (ContactZone::Right, self.right),
        ]
        .into_iter()
    }
}
