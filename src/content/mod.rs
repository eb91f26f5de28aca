//! Content domain: data-driven motion profiles loaded from RON.

mod data;
mod loader;
mod registry;

#[cfg(test)]
mod tests;

pub use data::{DataFile, MotionProfileDef};
pub use loader::{ContentLoadError, load_motion_profiles};
pub use registry::MotionProfiles;

use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::MotionDefaults;

/// Directory holding the RON data files.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

/// Id of the profile the player was spawned with.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActiveProfile {
    pub id: Option<String>,
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .init_resource::<ActiveProfile>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load motion profiles and make the first one the spawn default.
/// Falls back to the built-in tuning when nothing usable loads.
fn load_content(
    mut commands: Commands,
    paths: Res<ContentPaths>,
    mut defaults: ResMut<MotionDefaults>,
    mut active: ResMut<ActiveProfile>,
) {
    let (profiles, errors) = load_motion_profiles(&paths.data_dir);

    for e in &errors {
        warn!("{}", e);
    }

    match profiles.first() {
        Some(profile) => {
            info!("{}", profiles.summary());
            info!("Using motion profile '{}' ({})", profile.id, profile.name);
            defaults.0 = profile.motion;
            active.id = Some(profile.id.clone());
        }
        None => {
            warn!(
                "No motion profiles available, keeping jump_speed={}, move_speed={}",
                defaults.jump_speed, defaults.move_speed
            );
        }
    }

    commands.insert_resource(profiles);
}
