//! ContentRegistry resource providing lookups for all loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded game content.
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    pub characters: HashMap<String, CharacterDef>,
    /// Character ids in file order; the first one is the default pick.
    pub character_order: Vec<String>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Characters: {} ({})",
            self.characters.len(),
            self.character_order.join(", ")
        )
    }

    pub fn insert_character(&mut self, def: CharacterDef) -> Option<CharacterDef> {
        if !self.characters.contains_key(&def.id) {
            self.character_order.push(def.id.clone());
        }
        self.characters.insert(def.id.clone(), def)
    }

    /// The requested character, or the first one loaded when the id is
    /// absent or unknown.
    pub fn character_or_default(&self, id: Option<&str>) -> Option<&CharacterDef> {
        if let Some(def) = id.and_then(|id| self.characters.get(id)) {
            return Some(def);
        }
        if let Some(id) = id {
            warn!("Character '{}' not found in registry, using default", id);
        }
        self.character_order
            .first()
            .and_then(|id| self.characters.get(id))
    }
}
