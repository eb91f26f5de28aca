//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{DataFile, MotionProfileDef};
use super::registry::MotionProfiles;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text containing a DataFile<T> wrapper.
pub(crate) fn parse_data_file<T>(
    file_name: &str,
    contents: &str,
) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_data_file(&file_name, &contents)
}

/// Build the registry from parsed profiles, rejecting invalid tunings and
/// duplicate ids. Valid profiles are kept even when others fail.
pub(crate) fn collect_profiles(
    file_name: &str,
    items: Vec<MotionProfileDef>,
) -> (MotionProfiles, Vec<ContentLoadError>) {
    let mut profiles = MotionProfiles::default();
    let mut errors = Vec::new();

    for item in items {
        if let Err(e) = item.motion.validate() {
            errors.push(ContentLoadError {
                file: file_name.to_string(),
                message: format!("Profile '{}': {}", item.id, e),
            });
            continue;
        }

        let id = item.id.clone();
        if !profiles.insert(item) {
            errors.push(ContentLoadError {
                file: file_name.to_string(),
                message: format!("Duplicate profile id '{}'", id),
            });
        }
    }

    (profiles, errors)
}

/// Load assets/data/motion_profiles.ron into a MotionProfiles registry.
/// Returns the registry (possibly partial) and every error met on the way.
pub fn load_motion_profiles(base_path: &Path) -> (MotionProfiles, Vec<ContentLoadError>) {
    let path = base_path.join("motion_profiles.ron");
    match load_data_file::<MotionProfileDef>(&path) {
        Ok(items) => collect_profiles(&path.display().to_string(), items),
        Err(e) => (MotionProfiles::default(), vec![e]),
    }
}
