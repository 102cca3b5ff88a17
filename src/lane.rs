//! Lane model - three fixed parallel paths and the switch table

use serde::{Deserialize, Serialize};

use crate::constants::LANE_WIDTH;

/// One of three fixed parallel forward paths, ordered left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Left,
    #[default]
    Middle,
    Right,
}

impl Lane {
    /// Lateral world-space center of this lane (Y axis).
    pub fn center_y(self) -> f32 {
        match self {
            Lane::Left => -LANE_WIDTH,
            Lane::Middle => 0.0,
            Lane::Right => LANE_WIDTH,
        }
    }

    /// Target lane for a steer direction. Edge lanes saturate, never wrap.
    pub fn shifted(self, direction: MoveDirection) -> Lane {
        match direction {
            MoveDirection::ToLeft => match self {
                Lane::Right => Lane::Middle,
                Lane::Middle | Lane::Left => Lane::Left,
            },
            MoveDirection::ToRight => match self {
                Lane::Left => Lane::Middle,
                Lane::Middle | Lane::Right => Lane::Right,
            },
            MoveDirection::None => self,
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lane::Left => write!(f, "Left"),
            Lane::Middle => write!(f, "Middle"),
            Lane::Right => write!(f, "Right"),
        }
    }
}

/// Active strafe request. Transient - reset to None when a strafe completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    ToLeft,
    #[default]
    None,
    ToRight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_table() {
        // Full table: edges saturate toward the boundary, middle moves out
        assert_eq!(Lane::Left.shifted(MoveDirection::ToLeft), Lane::Left);
        assert_eq!(Lane::Left.shifted(MoveDirection::ToRight), Lane::Middle);
        assert_eq!(Lane::Middle.shifted(MoveDirection::ToLeft), Lane::Left);
        assert_eq!(Lane::Middle.shifted(MoveDirection::ToRight), Lane::Right);
        assert_eq!(Lane::Right.shifted(MoveDirection::ToLeft), Lane::Middle);
        assert_eq!(Lane::Right.shifted(MoveDirection::ToRight), Lane::Right);
    }

    #[test]
    fn test_none_is_identity() {
        for lane in [Lane::Left, Lane::Middle, Lane::Right] {
            assert_eq!(lane.shifted(MoveDirection::None), lane);
        }
    }

    #[test]
    fn test_edge_requests_are_idempotent() {
        assert_eq!(
            Lane::Left.shifted(MoveDirection::ToLeft).shifted(MoveDirection::ToLeft),
            Lane::Left
        );
        assert_eq!(
            Lane::Right.shifted(MoveDirection::ToRight).shifted(MoveDirection::ToRight),
            Lane::Right
        );
    }

    #[test]
    fn test_lane_centers_ordered() {
        assert!(Lane::Left.center_y() < Lane::Middle.center_y());
        assert!(Lane::Middle.center_y() < Lane::Right.center_y());
        assert_eq!(Lane::Middle.center_y(), 0.0);
    }
}
