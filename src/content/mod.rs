//! Content domain: data-driven character definitions loaded from RON.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{CharacterDef, DataFile};
pub use loader::{ContentLoadError, load_all_content, parse_data_file, registry_from_characters};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON content files.
pub const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, setup_content_registry);
    }
}

/// Load content before anything spawns. Unreadable files fall back to
/// built-in defaults; readable but invalid tuning stops startup.
fn setup_content_registry(mut commands: Commands) -> Result {
    let registry = match load_all_content(Path::new(CONTENT_PATH)) {
        Ok(registry) => registry,
        Err(errors) => {
            for e in &errors {
                warn!("{}", e);
            }
            warn!("Content failed to load, characters will use default tuning");
            commands.insert_resource(ContentRegistry::default());
            return Ok(());
        }
    };

    let mut errors = validate_content(&registry);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        return Err(errors.remove(0).into());
    }

    info!("{}", registry.summary());
    commands.insert_resource(registry);
    Ok(())
}
