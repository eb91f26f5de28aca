//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{ingest_probe_contacts, verify_probe_wiring};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_frame_input, step_motion, sync_facing};
