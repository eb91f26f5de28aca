//! MotionProfiles resource providing lookups for loaded motion tunings.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::MotionProfileDef;

/// Loaded motion profiles, keyed by id, remembering file order.
#[derive(Resource, Debug, Default)]
pub struct MotionProfiles {
    profiles: HashMap<String, MotionProfileDef>,
    order: Vec<String>,
}

impl MotionProfiles {
    /// Add a profile. Returns false (and keeps the first) on a duplicate id.
    pub fn insert(&mut self, profile: MotionProfileDef) -> bool {
        if self.profiles.contains_key(&profile.id) {
            return false;
        }
        self.order.push(profile.id.clone());
        self.profiles.insert(profile.id.clone(), profile);
        true
    }

    pub fn get(&self, id: &str) -> Option<&MotionProfileDef> {
        self.profiles.get(id)
    }

    /// The first profile in file order.
    pub fn first(&self) -> Option<&MotionProfileDef> {
        self.order.first().and_then(|id| self.profiles.get(id))
    }

    /// The profile after `id` in file order, wrapping around.
    pub fn next_after(&self, id: &str) -> Option<&MotionProfileDef> {
        let index = self.order.iter().position(|other| other == id)?;
        let next = &self.order[(index + 1) % self.order.len()];
        self.profiles.get(next)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns a summary of loaded profiles for logging.
    pub fn summary(&self) -> String {
        format!("MotionProfiles loaded: [{}]", self.order.join(", "))
    }
}
