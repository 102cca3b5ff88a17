//! Lane switching - the strafe controller and its timeline systems
//!
//! A steer press either starts a new strafe (snapshotting the lateral
//! interpolation endpoints) or, while one is in flight, only retargets the
//! pending direction. An explicit timeline advanced by the fixed clock
//! drives the interpolation and fires completion.

use bevy::prelude::*;

use crate::constants::{RUN_SPEED, STRAFE_DRIFT_FACTOR, STRAFE_DURATION};
use crate::events::{EventBus, GameEvent};
use crate::helpers::smoothstep;
use crate::input::{RunnerInput, SteerRequest};
use crate::lane::{Lane, MoveDirection};
use crate::runner::components::{Dead, Runner};

/// Interpolation endpoints for the strafe in flight. Owned by the
/// controller only while a strafe is active, discarded on completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrafeTrack {
    pub start: Vec2,
    pub destination: Vec2,
}

/// Lane-switch controller for the runner entity.
///
/// Tracks the occupied lane, the pending steer direction, and at most one
/// strafe in flight. The lane commits when the strafe starts, not when the
/// animation lands, so a quick second press can change the logical lane
/// before the visual catches up. Kept as shipped; gameplay systems that
/// query `current_lane` were tuned against it.
#[derive(Component, Debug)]
pub struct LaneSwitch {
    /// Lane the runner logically occupies
    pub current_lane: Lane,
    /// Active strafe request; None outside a strafe
    pub pending: MoveDirection,
    active: Option<StrafeTrack>,
}

impl Default for LaneSwitch {
    fn default() -> Self {
        Self {
            current_lane: Lane::Middle,
            pending: MoveDirection::None,
            active: None,
        }
    }
}

impl LaneSwitch {
    /// Whether a lane-change animation is in flight
    pub fn is_strafing(&self) -> bool {
        self.active.is_some()
    }

    /// The active interpolation endpoints, if a strafe is in flight
    pub fn track(&self) -> Option<&StrafeTrack> {
        self.active.as_ref()
    }

    /// Handle a discrete steer press at the runner's current position.
    ///
    /// Always records the pending direction. If no strafe is in flight a
    /// new one starts: the lateral destination moves by the lane-center
    /// delta (one lane width, or zero when saturating at an edge) plus a
    /// fixed forward drift, and the lane transition applies immediately.
    /// Returns the `(from, to)` transition when a strafe started.
    pub fn request_move(
        &mut self,
        request: SteerRequest,
        position: Vec2,
    ) -> Option<(Lane, Lane)> {
        let direction = MoveDirection::from(request);
        self.pending = direction;

        // In flight: retarget only, never restart the animation
        if self.active.is_some() {
            return None;
        }

        let from = self.current_lane;
        let to = from.shifted(direction);
        let destination = Vec2::new(
            position.x + RUN_SPEED * STRAFE_DRIFT_FACTOR,
            position.y + (to.center_y() - from.center_y()),
        );
        self.active = Some(StrafeTrack {
            start: position,
            destination,
        });
        self.current_lane = to;
        Some((from, to))
    }

    /// Interpolated position for progress in [0, 1]; None outside a strafe.
    /// `sample(0.0)` is the start snapshot, `sample(1.0)` the destination.
    pub fn sample(&self, progress: f32) -> Option<Vec2> {
        self.active
            .map(|track| track.start.lerp(track.destination, progress.clamp(0.0, 1.0)))
    }

    /// Finish the strafe: discard the track and reset the pending direction
    pub fn complete(&mut self) {
        self.active = None;
        self.pending = MoveDirection::None;
    }
}

/// Elapsed time of the strafe animation. Replaces the curve-asset timeline:
/// the fixed clock advances it and `progress()` applies the ease.
#[derive(Component, Default)]
pub struct StrafeTimeline {
    pub elapsed: f32,
}

impl StrafeTimeline {
    /// Eased, normalized time-in-animation in [0, 1]
    pub fn progress(&self) -> f32 {
        smoothstep(self.elapsed / STRAFE_DURATION)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= STRAFE_DURATION
    }
}

/// Consume a buffered steer press and route it to the controller.
/// Ignored once the runner is dead.
pub fn begin_strafe(
    mut input: ResMut<RunnerInput>,
    mut bus: ResMut<EventBus>,
    mut runners: Query<(&Transform, &mut LaneSwitch, &mut StrafeTimeline, &Dead), With<Runner>>,
) {
    let Some(request) = input.steer.take() else {
        return;
    };

    for (transform, mut lane_switch, mut timeline, dead) in &mut runners {
        if dead.0 {
            continue;
        }

        if let Some((from, to)) = lane_switch.request_move(request, transform.translation.truncate())
        {
            timeline.elapsed = 0.0;
            bus.emit(GameEvent::LaneChange { from, to });
            info!("Lane switch: {} -> {}", from, to);
        }
    }
}

/// Advance the strafe timeline and move the runner along the interpolated
/// track; fires completion when the timeline runs out.
pub fn strafe_tick(
    time: Res<Time>,
    mut runners: Query<(&mut Transform, &mut LaneSwitch, &mut StrafeTimeline), With<Runner>>,
) {
    for (mut transform, mut lane_switch, mut timeline) in &mut runners {
        if !lane_switch.is_strafing() {
            continue;
        }

        timeline.elapsed += time.delta_secs();
        if let Some(position) = lane_switch.sample(timeline.progress()) {
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        }

        if timeline.is_finished() {
            lane_switch.complete();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LANE_WIDTH;

    #[test]
    fn test_request_from_middle_commits_lane_and_track() {
        let mut ls = LaneSwitch::default();
        let start = Vec2::new(500.0, 0.0);

        let transition = ls.request_move(SteerRequest::Right, start);
        assert_eq!(transition, Some((Lane::Middle, Lane::Right)));
        assert_eq!(ls.current_lane, Lane::Right);
        assert_eq!(ls.pending, MoveDirection::ToRight);
        assert!(ls.is_strafing());

        let track = ls.track().unwrap();
        assert_eq!(track.start, start);
        assert_eq!(track.destination.y, start.y + LANE_WIDTH);
        assert_eq!(track.destination.x, start.x + RUN_SPEED * STRAFE_DRIFT_FACTOR);
    }

    #[test]
    fn test_edge_request_saturates_with_drift_only() {
        let mut ls = LaneSwitch {
            current_lane: Lane::Right,
            ..Default::default()
        };
        let start = Vec2::new(100.0, LANE_WIDTH);

        let transition = ls.request_move(SteerRequest::Right, start);
        assert_eq!(transition, Some((Lane::Right, Lane::Right)));
        assert_eq!(ls.current_lane, Lane::Right);

        // No lateral travel at the boundary; forward drift still applies
        let track = ls.track().unwrap();
        assert_eq!(track.destination.y, start.y);
        assert!(track.destination.x > start.x);
    }

    #[test]
    fn test_midflight_request_retargets_direction_only() {
        let mut ls = LaneSwitch::default();
        let start = Vec2::new(0.0, 0.0);
        ls.request_move(SteerRequest::Right, start);
        let track_before = *ls.track().unwrap();

        // Second press before completion: pending flips, track untouched,
        // lane unchanged
        let transition = ls.request_move(SteerRequest::Left, Vec2::new(40.0, 12.0));
        assert_eq!(transition, None);
        assert_eq!(ls.pending, MoveDirection::ToLeft);
        assert_eq!(ls.current_lane, Lane::Right);
        assert_eq!(*ls.track().unwrap(), track_before);
    }

    #[test]
    fn test_sample_brackets_the_track() {
        let mut ls = LaneSwitch::default();
        let start = Vec2::new(200.0, 0.0);
        ls.request_move(SteerRequest::Left, start);

        let track = *ls.track().unwrap();
        assert_eq!(ls.sample(0.0), Some(track.start));
        assert_eq!(ls.sample(1.0), Some(track.destination));

        let mid = ls.sample(0.5).unwrap();
        assert_eq!(mid, track.start.lerp(track.destination, 0.5));

        // Out-of-range progress clamps to the endpoints
        assert_eq!(ls.sample(-1.0), Some(track.start));
        assert_eq!(ls.sample(2.0), Some(track.destination));
    }

    #[test]
    fn test_complete_clears_flight_state() {
        let mut ls = LaneSwitch::default();
        ls.request_move(SteerRequest::Right, Vec2::ZERO);
        assert!(ls.is_strafing());

        ls.complete();
        assert!(!ls.is_strafing());
        assert_eq!(ls.pending, MoveDirection::None);
        assert_eq!(ls.sample(0.5), None);
        // The committed lane survives completion
        assert_eq!(ls.current_lane, Lane::Right);
    }

    #[test]
    fn test_new_strafe_allowed_after_completion() {
        let mut ls = LaneSwitch::default();
        ls.request_move(SteerRequest::Right, Vec2::ZERO);
        ls.complete();

        let pos = Vec2::new(300.0, LANE_WIDTH);
        let transition = ls.request_move(SteerRequest::Right, pos);
        assert_eq!(transition, Some((Lane::Right, Lane::Right)));
        assert!(ls.is_strafing());
    }

    #[test]
    fn test_timeline_progress_eases_to_one() {
        let mut timeline = StrafeTimeline::default();
        assert_eq!(timeline.progress(), 0.0);
        assert!(!timeline.is_finished());

        timeline.elapsed = STRAFE_DURATION / 2.0;
        let mid = timeline.progress();
        assert!(mid > 0.0 && mid < 1.0);

        timeline.elapsed = STRAFE_DURATION;
        assert_eq!(timeline.progress(), 1.0);
        assert!(timeline.is_finished());
    }
}
