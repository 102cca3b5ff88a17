//! Input module - RunnerInput resource and capture_input system

use bevy::prelude::*;

use crate::lane::MoveDirection;

/// A discrete sideways steer intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerRequest {
    Left,
    Right,
}

impl From<SteerRequest> for MoveDirection {
    fn from(request: SteerRequest) -> Self {
        match request {
            SteerRequest::Left => MoveDirection::ToLeft,
            SteerRequest::Right => MoveDirection::ToRight,
        }
    }
}

/// Buffered input state for the runner.
///
/// Steer and jump are edge-triggered and accumulate until a fixed-tick
/// system consumes them, so presses between ticks are never dropped.
#[derive(Resource, Default)]
pub struct RunnerInput {
    /// Latest un-consumed steer press this frame (last press wins)
    pub steer: Option<SteerRequest>,
    /// Un-consumed jump press
    pub jump_pressed: bool,
}

/// Runs in Update to capture input state before it's cleared.
pub fn capture_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    touches: Res<Touches>,
    mut input: ResMut<RunnerInput>,
) {
    let left_pressed = keyboard.just_pressed(KeyCode::KeyA)
        || keyboard.just_pressed(KeyCode::ArrowLeft)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::DPadLeft));

    let right_pressed = keyboard.just_pressed(KeyCode::KeyD)
        || keyboard.just_pressed(KeyCode::ArrowRight)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::DPadRight));

    // Separate discrete bindings: when both fire on one frame the later
    // branch wins, matching two back-to-back presses
    if left_pressed {
        input.steer = Some(SteerRequest::Left);
    }
    if right_pressed {
        input.steer = Some(SteerRequest::Right);
    }

    // Jump (Space / W / Up / South button); a touch tap also jumps
    if keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::South))
        || touches.any_just_pressed()
    {
        input.jump_pressed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steer_converts_to_direction() {
        assert_eq!(MoveDirection::from(SteerRequest::Left), MoveDirection::ToLeft);
        assert_eq!(MoveDirection::from(SteerRequest::Right), MoveDirection::ToRight);
    }
}
