//! Scoring module - coin and distance tracking plus the HUD text

use bevy::prelude::*;

use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::runner::{Dead, Runner};
use crate::world::Coin;

/// Score resource for the current run
#[derive(Resource, Default)]
pub struct Score {
    /// Coins picked up this run
    pub coins: u32,
    /// Forward distance covered this run (world units)
    pub distance: f32,
}

/// Marker for the HUD score text entity
#[derive(Component)]
pub struct ScoreText;

/// Collect coins the runner overlaps and award them.
/// Emits CoinCollected events to the EventBus.
pub fn collect_coins(
    mut commands: Commands,
    mut score: ResMut<Score>,
    mut bus: ResMut<EventBus>,
    runners: Query<(&Transform, &Dead), With<Runner>>,
    coins: Query<(Entity, &Transform), With<Coin>>,
) {
    for (runner_transform, dead) in &runners {
        if dead.0 {
            continue;
        }
        let runner_pos = runner_transform.translation.truncate();

        for (coin_entity, coin_transform) in &coins {
            let coin_pos = coin_transform.translation.truncate();
            if runner_pos.distance(coin_pos) <= COIN_PICKUP_RADIUS {
                commands.entity(coin_entity).despawn();
                score.coins += 1;
                bus.emit(GameEvent::CoinCollected { total: score.coins });
                info!("Coin collected, total: {}", score.coins);
            }
        }
    }
}

/// Track forward progress from the runner's transform
pub fn track_distance(
    mut score: ResMut<Score>,
    runners: Query<&Transform, With<Runner>>,
) {
    for transform in &runners {
        let travelled = transform.translation.x - RUNNER_SPAWN.x;
        score.distance = score.distance.max(travelled);
    }
}

/// Refresh the HUD with coins and distance
pub fn update_score_text(
    score: Res<Score>,
    runners: Query<&Dead, With<Runner>>,
    mut texts: Query<&mut Text2d, With<ScoreText>>,
) {
    let dead = runners.iter().any(|d| d.0);
    for mut text in &mut texts {
        let line = format!("Coins: {}   Distance: {:.0}m", score.coins, score.distance / 100.0);
        text.0 = if dead {
            format!("{}   -- RUN OVER --", line)
        } else {
            line
        };
    }
}
