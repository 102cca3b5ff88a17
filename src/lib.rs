//! Lanerunner - a three-lane endless runner built with Bevy
//!
//! This crate provides all game components, resources, and systems organized
//! into modules. The heart of it is the lane-switch controller in `runner`:
//! a small state machine that owns the strafe interpolation between lanes.

// Core modules
pub mod camera;
pub mod constants;
pub mod events;
pub mod helpers;
pub mod settings;

// Game logic modules
pub mod input;
pub mod lane;
pub mod runner;
pub mod scoring;
pub mod world;

// Re-export commonly used types for convenience
pub use camera::{CameraRig, camera_follow};
pub use constants::*;
pub use events::{BusEvent, EventBus, GameEvent, log_drained_events, update_event_bus_time};
pub use helpers::{exp_approach, smoothstep};
pub use input::{RunnerInput, SteerRequest, capture_input};
pub use lane::{Lane, MoveDirection};
pub use runner::{
    Airborne, Dead, LaneSwitch, Runner, StrafeTimeline, StrafeTrack, animate_jump_height,
    apply_air_physics, apply_jump, begin_strafe, forward_run, strafe_tick,
};
pub use scoring::{Score, ScoreText, collect_coins, track_distance, update_score_text};
pub use settings::{CurrentSettings, InitSettings, save_settings_system};
pub use world::{Coin, Obstacle, TrackSegment, TrackState, advance_track, obstacle_hit};
