//! Movement domain: sensor readings delivered by the contact probes.

/// Which side of the character a wall probe is touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    /// +1 for a wall on the right, -1 on the left.
    pub fn direction(self) -> Option<f32> {
        match self {
            WallContact::None => None,
            WallContact::Left => Some(-1.0),
            WallContact::Right => Some(1.0),
        }
    }
}

/// Combine the two wall probes. The right probe wins when both report contact.
pub fn resolve_wall_contact(left_hit: bool, right_hit: bool) -> WallContact {
    if right_hit {
        WallContact::Right
    } else if left_hit {
        WallContact::Left
    } else {
        WallContact::None
    }
}

/// One tick of environment contact data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorReadings {
    pub grounded: bool,
    pub wall: WallContact,
}

impl SensorReadings {
    pub fn airborne() -> Self {
        Self::default()
    }

    pub fn on_ground() -> Self {
        Self {
            grounded: true,
            wall: WallContact::None,
        }
    }

    pub fn against_wall(wall: WallContact) -> Self {
        Self {
            grounded: false,
            wall,
        }
    }
}
