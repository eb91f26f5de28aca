//! Data definitions for RON content files.

use serde::{Deserialize, Serialize};

use crate::movement::MotionConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Motion profiles (motion_profiles.ron)
// ============================================================================

/// A named motion tuning, e.g. a free platformer or an auto-runner.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotionProfileDef {
    pub id: String,
    pub name: String,
    pub motion: MotionConfig,
}
