//! Probes domain: spawning, swapping, floating, aiming and light toggles.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::RunConfig;
use crate::movement::{MotionInput, PROBE_COUNT, Player};
use crate::probes::{Probe, ProbeAnchor, ProbeLight, ProbeSettings, ProbeSwapper, ProbeToggled};

/// Color charge of each probe.
const PROBE_COLORS: [Color; PROBE_COUNT] = [
    Color::srgb(0.95, 0.25, 0.25),
    Color::srgb(0.25, 0.9, 0.35),
    Color::srgb(0.3, 0.45, 1.0),
];

const PROBE_SIZE: f32 = 0.35;
const LIGHT_SIZE: f32 = 0.9;

// ============================================================================
// Helpers
// ============================================================================

/// Anchor position with the sine bob applied.
pub(crate) fn float_target(
    anchor: Vec2,
    elapsed: f32,
    time_offset: f32,
    settings: &ProbeSettings,
) -> Vec2 {
    let bob = (elapsed * settings.float_frequency + time_offset).sin() * settings.float_amplitude;
    anchor + Vec2::new(0.0, bob)
}

/// One lagging follow step toward `target`.
pub(crate) fn follow_step(current: Vec2, target: Vec2, dt: f32, follow_speed: f32) -> Vec2 {
    current.lerp(target, (dt * follow_speed).clamp(0.0, 1.0))
}

/// Rotation (radians) that points a probe at `target`.
pub(crate) fn aim_angle(from: Vec2, target: Vec2) -> f32 {
    let direction = target - from;
    direction.y.atan2(direction.x)
}

pub(crate) fn toggled_visibility(visibility: Visibility) -> Visibility {
    match visibility {
        Visibility::Hidden => Visibility::Visible,
        Visibility::Visible | Visibility::Inherited => Visibility::Hidden,
    }
}

fn light_visibility(on: bool) -> Visibility {
    if on {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

// ============================================================================
// Setup
// ============================================================================

pub(crate) fn setup_probe_swapper(
    mut commands: Commands,
    run_config: Res<RunConfig>,
    settings: Res<ProbeSettings>,
) {
    let swapper = ProbeSwapper::new(run_config.seed, &settings);
    info!(
        "Probe slots assigned: {:?}, first swap in {:.2}s",
        swapper.assignments, swapper.swap_timer
    );
    commands.insert_resource(swapper);
}

/// Spawn anchor slots on the player and one probe per slot.
pub(crate) fn spawn_probes(
    mut commands: Commands,
    settings: Res<ProbeSettings>,
    mut swapper: ResMut<ProbeSwapper>,
    players: Query<(Entity, &Transform), With<Player>>,
    existing: Query<Entity, With<Probe>>,
) {
    if !existing.is_empty() {
        return;
    }

    let Some((player, player_transform)) = players.iter().next() else {
        warn!("No player to attach probes to, skipping probe spawn");
        return;
    };

    commands.entity(player).with_children(|parent| {
        for (slot, offset) in settings.anchor_offsets.iter().enumerate() {
            parent.spawn((
                ProbeAnchor { slot },
                Transform::from_translation(offset.extend(0.0)),
            ));
        }
    });

    let origin = player_transform.translation.truncate();
    for (index, color) in PROBE_COLORS.into_iter().enumerate() {
        let slot = swapper.assignments[index];
        let start = origin + settings.anchor_offsets[slot];
        let time_offset = swapper.roll_time_offset();

        commands
            .spawn((
                Probe { index, time_offset },
                Name::new(format!("Probe {}", index + 1)),
                Sprite {
                    color,
                    custom_size: Some(Vec2::splat(PROBE_SIZE)),
                    ..default()
                },
                Transform::from_translation(start.extend(2.0)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    ProbeLight { index },
                    Sprite {
                        color: color.with_alpha(0.35),
                        custom_size: Some(Vec2::splat(LIGHT_SIZE)),
                        ..default()
                    },
                    Transform::from_xyz(0.0, 0.0, -0.1),
                    light_visibility(settings.light_starts_on),
                ));
            });

        debug!("Probe {} assigned to slot {}", index + 1, slot);
    }
}

// ============================================================================
// Per-frame systems
// ============================================================================

/// Forward the numeric probe keys sampled with the motion input.
pub(crate) fn forward_probe_toggles(
    input: Res<MotionInput>,
    mut toggled: MessageWriter<ProbeToggled>,
) {
    for (index, pressed) in input.probe_toggles.iter().enumerate() {
        if *pressed {
            toggled.write(ProbeToggled { index });
        }
    }
}

pub(crate) fn toggle_probe_lights(
    mut toggled: MessageReader<ProbeToggled>,
    mut lights: Query<(&ProbeLight, &mut Visibility)>,
) {
    for event in toggled.read() {
        for (light, mut visibility) in &mut lights {
            if light.index == event.index {
                *visibility = toggled_visibility(*visibility);
                debug!("Probe {} light now {:?}", event.index + 1, *visibility);
            }
        }
    }
}

pub(crate) fn update_probe_swaps(
    time: Res<Time>,
    settings: Res<ProbeSettings>,
    mut swapper: ResMut<ProbeSwapper>,
) {
    if let Some(swap) = swapper.tick(&settings, time.delta_secs()) {
        debug!(
            "Probes rotated positions (swap {}/{})",
            swap, settings.swaps_per_cycle
        );
    }
}

pub(crate) fn follow_probe_anchors(
    time: Res<Time>,
    settings: Res<ProbeSettings>,
    swapper: Res<ProbeSwapper>,
    anchors: Query<(&ProbeAnchor, &GlobalTransform)>,
    mut probes: Query<(&Probe, &mut Transform)>,
) {
    let mut slots = [None; PROBE_COUNT];
    for (anchor, transform) in &anchors {
        if let Some(slot) = slots.get_mut(anchor.slot) {
            *slot = Some(transform.translation().truncate());
        }
    }

    let dt = time.delta_secs();
    let elapsed = time.elapsed_secs();
    for (probe, mut transform) in &mut probes {
        let Some(anchor) = swapper
            .assignments
            .get(probe.index)
            .and_then(|slot| slots.get(*slot).copied().flatten())
        else {
            continue;
        };

        let target = float_target(anchor, elapsed, probe.time_offset, &settings);
        let next = follow_step(
            transform.translation.truncate(),
            target,
            dt,
            settings.follow_speed,
        );
        transform.translation = next.extend(transform.translation.z);
    }
}

/// Point every probe at the mouse cursor.
pub(crate) fn aim_probes_at_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut probes: Query<&mut Transform, With<Probe>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Some(target) = cameras
        .iter()
        .find_map(|(camera, transform)| camera.viewport_to_world_2d(transform, cursor).ok())
    else {
        return;
    };

    for mut transform in &mut probes {
        let angle = aim_angle(transform.translation.truncate(), target);
        transform.rotation = Quat::from_rotation_z(angle);
    }
}
