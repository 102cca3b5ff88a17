//! World module - the endless track, coins and obstacles

use bevy::prelude::*;
use rand::Rng;

use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::lane::Lane;
use crate::runner::{Airborne, Dead, Runner};
use crate::scoring::Score;
use crate::settings::CurrentSettings;

/// Marks entities belonging to one generated track segment
#[derive(Component)]
pub struct TrackSegment(pub i64);

/// Collectable coin
#[derive(Component)]
pub struct Coin;

/// Obstacle that ends the run on ground-level contact
#[derive(Component)]
pub struct Obstacle;

/// Tracks how far ahead the track has been generated
#[derive(Resource, Default)]
pub struct TrackState {
    /// Next segment index to spawn
    pub next_segment: i64,
}

const LANES: [Lane; 3] = [Lane::Left, Lane::Middle, Lane::Right];

/// Spawn the floor strip, lane lines, coins and obstacles for one segment.
/// The opening segment stays empty so every run starts clean.
pub fn spawn_track_segment(commands: &mut Commands, index: i64, rng: &mut impl Rng) {
    let seg_start = index as f32 * SEGMENT_LENGTH;
    let seg_center_x = seg_start + SEGMENT_LENGTH / 2.0;

    // Floor strip
    commands.spawn((
        Sprite::from_color(TRACK_COLOR, Vec2::new(SEGMENT_LENGTH, TRACK_WIDTH)),
        Transform::from_xyz(seg_center_x, 0.0, 0.0),
        TrackSegment(index),
    ));

    // Lane boundary lines at the two inner edges
    for y in [-LANE_WIDTH / 2.0, LANE_WIDTH / 2.0] {
        commands.spawn((
            Sprite::from_color(LANE_LINE_COLOR, Vec2::new(SEGMENT_LENGTH, 4.0)),
            Transform::from_xyz(seg_center_x, y, 0.1),
            TrackSegment(index),
        ));
    }

    if index < FIRST_HAZARD_SEGMENT {
        return;
    }

    // Coin row along one random lane
    let coin_lane = LANES[rng.gen_range(0..LANES.len())];
    let row_start = seg_start + rng.gen_range(0.1..0.4) * SEGMENT_LENGTH;
    for i in 0..COINS_PER_SEGMENT {
        commands.spawn((
            Sprite::from_color(COIN_COLOR, COIN_SIZE),
            Transform::from_xyz(row_start + i as f32 * 150.0, coin_lane.center_y(), 0.5),
            Coin,
            TrackSegment(index),
        ));
    }

    // Obstacles at separated forward slots, each on a random lane. One
    // obstacle never spans more than a single lane, so a clear path always
    // exists (and any obstacle can be jumped).
    for slot in 0..OBSTACLES_PER_SEGMENT {
        let slot_frac = 0.3 + 0.4 * slot as f32;
        let jitter = rng.gen_range(-0.05..0.05) * SEGMENT_LENGTH;
        let lane = LANES[rng.gen_range(0..LANES.len())];
        commands.spawn((
            Sprite::from_color(OBSTACLE_COLOR, OBSTACLE_SIZE),
            Transform::from_xyz(seg_start + slot_frac * SEGMENT_LENGTH + jitter, lane.center_y(), 0.5),
            Obstacle,
            TrackSegment(index),
        ));
    }
}

/// Keep the generated track sliding along with the runner: spawn segments
/// ahead, despawn everything a couple of segments behind.
pub fn advance_track(
    mut commands: Commands,
    mut track: ResMut<TrackState>,
    runners: Query<&Transform, With<Runner>>,
    segment_entities: Query<(Entity, &Transform), With<TrackSegment>>,
) {
    let Ok(runner_transform) = runners.single() else {
        return;
    };
    let runner_x = runner_transform.translation.x;

    let current_index = (runner_x / SEGMENT_LENGTH).floor() as i64;
    let mut rng = rand::thread_rng();
    while track.next_segment <= current_index + SEGMENTS_AHEAD {
        let index = track.next_segment;
        spawn_track_segment(&mut commands, index, &mut rng);
        track.next_segment += 1;
    }

    for (entity, transform) in &segment_entities {
        // Segment sprites are centered; the +half-length keeps a segment
        // alive until its far edge passes the cutoff
        if transform.translation.x + SEGMENT_LENGTH / 2.0 < runner_x - DESPAWN_BEHIND {
            commands.entity(entity).despawn();
        }
    }
}

/// Ground-level obstacle contact ends the run. Airborne runners above the
/// clearance height pass over.
pub fn obstacle_hit(
    mut bus: ResMut<EventBus>,
    mut settings: ResMut<CurrentSettings>,
    score: Res<Score>,
    mut runners: Query<(&Transform, &Airborne, &mut Dead, &mut Sprite), With<Runner>>,
    obstacles: Query<&Transform, (With<Obstacle>, Without<Runner>)>,
) {
    for (runner_transform, airborne, mut dead, mut sprite) in &mut runners {
        if dead.0 || airborne.clears_obstacles() {
            continue;
        }

        let runner_pos = runner_transform.translation.truncate();
        let runner_half = RUNNER_SIZE / 2.0;

        for obstacle_transform in &obstacles {
            let obstacle_pos = obstacle_transform.translation.truncate();
            let obstacle_half = OBSTACLE_SIZE / 2.0;

            let diff = runner_pos - obstacle_pos;
            let overlap_x = runner_half.x + obstacle_half.x - diff.x.abs();
            let overlap_y = runner_half.y + obstacle_half.y - diff.y.abs();
            if overlap_x <= 0.0 || overlap_y <= 0.0 {
                continue;
            }

            dead.0 = true;
            sprite.color = RUNNER_DEAD_COLOR;
            bus.emit(GameEvent::RunnerDeath {
                distance: score.distance,
                coins: score.coins,
            });
            if settings.settings.record_best(score.distance, score.coins) {
                settings.mark_dirty();
                info!("New best run: {:.0} units, {} coins", score.distance, score.coins);
            }
            info!(
                "Runner down at {:.0} units with {} coins",
                score.distance, score.coins
            );
            break;
        }
    }
}
