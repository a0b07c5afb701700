//! Movement domain: the practice room used when no level is loaded.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

/// A static block on the ground or wall layer.
struct Block {
    wall: bool,
    center: Vec2,
    size: Vec2,
}

const fn ground(x: f32, y: f32, w: f32, h: f32) -> Block {
    Block {
        wall: false,
        center: Vec2::new(x, y),
        size: Vec2::new(w, h),
    }
}

const fn wall(x: f32, y: f32, w: f32, h: f32) -> Block {
    Block {
        wall: true,
        center: Vec2::new(x, y),
        size: Vec2::new(w, h),
    }
}

const TEST_ROOM: [Block; 7] = [
    // Floor
    ground(0.0, -5.0, 24.0, 1.0),
    // Side walls
    wall(-12.5, 1.0, 1.0, 13.0),
    wall(12.5, 1.0, 1.0, 13.0),
    // Platforms
    ground(-7.0, -1.5, 4.0, 0.5),
    ground(7.0, 1.0, 4.0, 0.5),
    ground(0.0, 3.5, 3.0, 0.5),
    // Pillar for wall jumping practice
    wall(-2.5, -2.0, 0.8, 5.0),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    for block in &TEST_ROOM {
        let (color, layers) = if block.wall {
            (wall_color, wall_layers)
        } else {
            (ground_color, ground_layers)
        };

        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_xyz(block.center.x, block.center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            layers,
        ));
        if block.wall {
            entity.insert(Wall);
        } else {
            entity.insert(Ground);
        }
    }

    info!("Spawned test room: {} blocks", TEST_ROOM.len());
}
