//! Movement domain: player bootstrap and rig validation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{CharacterDef, ContentRegistry};
use crate::core::RunConfig;
use crate::movement::{GameLayer, MotionConfig, MotionState, Player, SensorRig};
use crate::sprites::AnimationPlayer;

/// Collider size of a character, in world units.
pub const CHARACTER_SIZE: Vec2 = Vec2::new(0.8, 1.0);

/// Spawn the selected character from ContentRegistry data.
pub(crate) fn spawn_characters_from_data(
    mut commands: Commands,
    run_config: Res<RunConfig>,
    registry: Option<Res<ContentRegistry>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let def = match registry.as_deref() {
        Some(registry) => match registry.character_or_default(run_config.character_id.as_deref()) {
            Some(def) => def.clone(),
            None => {
                warn!("No characters in ContentRegistry, using default motion tuning");
                CharacterDef::fallback()
            }
        },
        None => {
            warn!("ContentRegistry not available, using default motion tuning");
            CharacterDef::fallback()
        }
    };

    spawn_character(&mut commands, &def);
}

/// Spawn one fully rigged character and return its entity.
pub fn spawn_character(commands: &mut Commands, def: &CharacterDef) -> Entity {
    let spawn = Vec2::new(def.spawn.0, def.spawn.1);
    let config = def.motion.clone();

    info!(
        "Spawning character: id={}, spawn={:?}, max_jumps={}, dash_force={}",
        def.id, spawn, config.max_jumps, config.dash_force
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                Name::new(def.name.clone()),
                MotionState::new(&config, spawn),
                SensorRig::for_body(CHARACTER_SIZE),
                AnimationPlayer::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.95),
                custom_size: Some(CHARACTER_SIZE),
                ..default()
            },
            Transform::from_xyz(spawn.x, spawn.y, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(CHARACTER_SIZE.x, CHARACTER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(config.resting_gravity_scale),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
            config,
        ))
        .id()
}

/// A character that cannot be driven by the motion systems.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionRigError {
    pub entity: Entity,
    pub missing: &'static str,
}

impl std::fmt::Display for MotionRigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "character {:?} is missing required component {}",
            self.entity, self.missing
        )
    }
}

impl std::error::Error for MotionRigError {}

/// First required component absent from a rig, if any.
pub fn missing_rig_component(
    has_config: bool,
    has_sensors: bool,
    has_velocity: bool,
    has_gravity: bool,
    has_collider: bool,
) -> Option<&'static str> {
    [
        (has_config, "MotionConfig"),
        (has_sensors, "SensorRig"),
        (has_velocity, "LinearVelocity"),
        (has_gravity, "GravityScale"),
        (has_collider, "Collider"),
    ]
    .into_iter()
    .find_map(|(present, name)| (!present).then_some(name))
}

/// Fail startup if any character lacks its sensor or physics references.
pub(crate) fn validate_motion_rigs(
    rigs: Query<
        (
            Entity,
            Has<MotionConfig>,
            Has<SensorRig>,
            Has<LinearVelocity>,
            Has<GravityScale>,
            Has<Collider>,
        ),
        With<MotionState>,
    >,
) -> Result {
    for (entity, has_config, has_sensors, has_velocity, has_gravity, has_collider) in &rigs {
        if let Some(missing) =
            missing_rig_component(has_config, has_sensors, has_velocity, has_gravity, has_collider)
        {
            error!("Motion rig check failed for {:?}: missing {}", entity, missing);
            return Err(MotionRigError { entity, missing }.into());
        }
    }

    info!("Motion rigs validated: {} character(s)", rigs.iter().count());
    Ok(())
}
