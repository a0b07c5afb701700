//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use serde::{Deserialize, Serialize};

use crate::movement::MotionConfig;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Characters (characters.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    /// World position the character spawns and respawns at.
    pub spawn: (f32, f32),
    /// Omitted fields take the default tuning.
    #[serde(default)]
    pub motion: MotionConfig,
}

impl CharacterDef {
    /// Character used when no content could be loaded.
    pub fn fallback() -> Self {
        Self {
            id: "character_default".to_string(),
            name: "Quark".to_string(),
            spawn: (0.0, -3.5),
            motion: MotionConfig::default(),
        }
    }
}
