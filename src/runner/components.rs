//! Runner-related components

use bevy::prelude::*;

/// Marker for the runner entity
#[derive(Component)]
pub struct Runner;

/// Whether the runner has hit an obstacle. Once set, input is ignored
/// and forward motion stops.
#[derive(Component, Default)]
pub struct Dead(pub bool);

/// Simulated jump axis - height above the track and vertical velocity.
/// Not part of the 2D transform; rendered as a sprite scale pulse.
#[derive(Component, Default)]
pub struct Airborne {
    pub height: f32,
    pub vertical_velocity: f32,
}

impl Airborne {
    pub fn is_airborne(&self) -> bool {
        self.height > 0.0
    }

    /// Whether the runner is high enough to pass over an obstacle
    pub fn clears_obstacles(&self) -> bool {
        self.height > crate::constants::OBSTACLE_CLEAR_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounded_by_default() {
        let air = Airborne::default();
        assert!(!air.is_airborne());
        assert!(!air.clears_obstacles());
    }
}
