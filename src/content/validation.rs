//! Validation for loaded content definitions.

use super::registry::ContentRegistry;
use crate::movement::MotionConfigError;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub error: MotionConfigError,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid motion tuning: {}",
            self.source_type, self.source_id, self.error
        )
    }
}

impl std::error::Error for ValidationError {}

/// Validate every definition in the registry.
/// Returns a list of validation errors, empty if all content is usable.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Walk in file order so reports are stable
    for id in &registry.character_order {
        let Some(def) = registry.characters.get(id) else {
            continue;
        };
        if let Err(error) = def.motion.validate() {
            errors.push(ValidationError {
                source_type: "Character",
                source_id: id.clone(),
                error,
            });
        }
    }

    errors
}
