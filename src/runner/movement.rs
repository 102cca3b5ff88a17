//! Runner movement systems - auto-run, jump and the simulated air axis

use bevy::prelude::*;

use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::input::RunnerInput;
use crate::runner::components::{Airborne, Dead, Runner};
use crate::runner::strafe::LaneSwitch;

/// Constant forward motion while alive. During a strafe the interpolation
/// track carries the forward drift instead, so strafing runners are skipped.
pub fn forward_run(
    time: Res<Time>,
    mut runners: Query<(&mut Transform, &LaneSwitch, &Dead), With<Runner>>,
) {
    for (mut transform, lane_switch, dead) in &mut runners {
        if dead.0 || lane_switch.is_strafing() {
            continue;
        }
        transform.translation.x += RUN_SPEED * time.delta_secs();
    }
}

/// Consume a buffered jump press. A second press while airborne is ignored;
/// dead runners ignore input entirely.
pub fn apply_jump(
    mut input: ResMut<RunnerInput>,
    mut bus: ResMut<EventBus>,
    mut runners: Query<(&mut Airborne, &Dead), With<Runner>>,
) {
    if !input.jump_pressed {
        return;
    }
    input.jump_pressed = false;

    for (mut airborne, dead) in &mut runners {
        if dead.0 || airborne.is_airborne() {
            continue;
        }
        airborne.vertical_velocity = JUMP_VELOCITY;
        airborne.height = f32::EPSILON; // leaves the ground this tick
        bus.emit(GameEvent::Jump);
    }
}

/// Integrate the simulated jump axis: gravity pulls the runner back to the
/// track, landing zeroes both height and velocity.
pub fn apply_air_physics(time: Res<Time>, mut runners: Query<&mut Airborne, With<Runner>>) {
    for mut airborne in &mut runners {
        if !airborne.is_airborne() {
            continue;
        }
        airborne.height += airborne.vertical_velocity * time.delta_secs();
        airborne.vertical_velocity -= JUMP_GRAVITY * time.delta_secs();

        if airborne.height <= 0.0 {
            airborne.height = 0.0;
            airborne.vertical_velocity = 0.0;
        }
    }
}

/// Scale the sprite with jump height so the top-down view reads as a hop
pub fn animate_jump_height(mut runners: Query<(&mut Transform, &Airborne), With<Runner>>) {
    for (mut transform, airborne) in &mut runners {
        let scale = 1.0 + airborne.height * JUMP_SCALE_FACTOR;
        transform.scale = Vec3::new(scale, scale, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut airborne = Airborne {
            height: f32::EPSILON,
            vertical_velocity: JUMP_VELOCITY,
        };

        // Integrate the arc at 60 Hz; it must peak and come back down
        let dt = 1.0 / 60.0;
        let mut peak: f32 = 0.0;
        for _ in 0..600 {
            if !airborne.is_airborne() {
                break;
            }
            airborne.height += airborne.vertical_velocity * dt;
            airborne.vertical_velocity -= JUMP_GRAVITY * dt;
            if airborne.height <= 0.0 {
                airborne.height = 0.0;
                airborne.vertical_velocity = 0.0;
            }
            peak = peak.max(airborne.height);
        }

        assert!(!airborne.is_airborne());
        // Analytic apex v^2 / 2g, with integration slack
        let apex = JUMP_VELOCITY * JUMP_VELOCITY / (2.0 * JUMP_GRAVITY);
        assert!((peak - apex).abs() < apex * 0.15);
        assert!(peak > OBSTACLE_CLEAR_HEIGHT);
    }
}
