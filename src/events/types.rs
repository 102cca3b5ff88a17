//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

use crate::lane::Lane;

/// All game events that can be logged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    // === Session Events ===
    /// Session started (generated once per game launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,  // ISO 8601
    },

    // === Movement Events ===
    /// A lane switch started (the lane commits at strafe start)
    LaneChange { from: Lane, to: Lane },
    /// Runner jumped
    Jump,

    // === Scoring Events ===
    /// Coin collected
    CoinCollected { total: u32 },

    // === Run Events ===
    /// Runner hit an obstacle; the run is over
    RunnerDeath { distance: f32, coins: u32 },
}

impl GameEvent {
    /// Get the event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::LaneChange { .. } => "LC",
            GameEvent::Jump => "J",
            GameEvent::CoinCollected { .. } => "C",
            GameEvent::RunnerDeath { .. } => "D",
        }
    }
}
