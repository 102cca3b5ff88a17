//! Follow camera - tracks the runner forward with smoothed lag

use bevy::prelude::*;

use crate::constants::{CAMERA_LAG_SPEED, CAMERA_LEAD};
use crate::helpers::exp_approach;
use crate::runner::Runner;

/// Marker for the gameplay camera with its smoothing rate
#[derive(Component)]
pub struct CameraRig {
    pub lag_speed: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            lag_speed: CAMERA_LAG_SPEED,
        }
    }
}

/// Ease the camera toward a point ahead of the runner. Lateral framing is
/// fixed; lane switches play out on screen instead of panning the view.
pub fn camera_follow(
    time: Res<Time>,
    runners: Query<&Transform, (With<Runner>, Without<CameraRig>)>,
    mut cameras: Query<(&mut Transform, &CameraRig), Without<Runner>>,
) {
    let Ok(runner_transform) = runners.single() else {
        return;
    };
    let target_x = runner_transform.translation.x + CAMERA_LEAD;

    for (mut camera_transform, rig) in &mut cameras {
        camera_transform.translation.x = exp_approach(
            camera_transform.translation.x,
            target_x,
            rig.lag_speed,
            time.delta_secs(),
        );
    }
}
