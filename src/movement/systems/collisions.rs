//! Movement domain: probe contact ingestion and wiring checks.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    ContactEvent, ContactPhase, Ground, MotionController, Probe, ProbeRig, SurfaceTag,
};

/// Translate sensor collision messages into probe contact events.
pub(crate) fn ingest_probe_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    probes: Query<&Probe>,
    ground: Query<(), With<Ground>>,
    mut controllers: Query<&mut MotionController>,
) {
    let starts = collision_start_events.read().map(|event| {
        (
            [(event.collider1, event.body1), (event.collider2, event.body2)],
            ContactPhase::Enter,
        )
    });
    let ends = collision_end_events.read().map(|event| {
        (
            [(event.collider1, event.body1), (event.collider2, event.body2)],
            ContactPhase::Exit,
        )
    });

    for ([first, second], phase) in starts.chain(ends) {
        for ((probe_entity, _), (other, other_body)) in [(first, second), (second, first)] {
            let Ok(probe) = probes.get(probe_entity) else {
                continue;
            };

            let is_ground =
                ground.contains(other) || other_body.is_some_and(|body| ground.contains(body));
            let tag = if is_ground {
                SurfaceTag::Ground
            } else {
                SurfaceTag::Other
            };

            let Ok(mut controller) = controllers.get_mut(probe.owner) else {
                warn!(
                    "Probe {:?} reports contact for {:?}, which has no MotionController",
                    probe_entity, probe.owner
                );
                continue;
            };

            controller.on_contact(ContactEvent {
                zone: probe.zone,
                phase,
                tag,
            });
        }
    }
}

/// A controlled character without all three probes is a wiring fault; stop
/// immediately instead of running with a sensor that never fires.
pub(crate) fn verify_probe_wiring(
    added: Query<(Entity, Option<&ProbeRig>), Added<MotionController>>,
    probes: Query<&Probe>,
) {
    for (entity, rig) in &added {
        let Some(rig) = rig else {
            panic!("{:?} has a MotionController but no ProbeRig", entity);
        };

        for (zone, probe_entity) in rig.iter() {
            match probes.get(probe_entity) {
                Ok(probe) if probe.owner == entity && probe.zone == zone => {}
                Ok(probe) => panic!(
                    "{:?} {:?} probe {:?} is wired to {:?} {:?}",
                    entity, zone, probe_entity, probe.owner, probe.zone
                ),
                Err(_) => panic!(
                    "{:?} {:?} probe {:?} does not exist",
                    entity, zone, probe_entity
                ),
            }
        }
    }
}
