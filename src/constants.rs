//! Tunable constants for lanerunner
//!
//! All gameplay values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.12, 0.13, 0.16);
pub const TRACK_COLOR: Color = Color::srgb(0.2, 0.21, 0.25);
pub const LANE_LINE_COLOR: Color = Color::srgb(0.3, 0.31, 0.36);
pub const RUNNER_COLOR: Color = Color::srgb(0.9, 0.55, 0.2);
pub const RUNNER_DEAD_COLOR: Color = Color::srgb(0.4, 0.38, 0.36);
pub const COIN_COLOR: Color = Color::srgb(0.95, 0.8, 0.25);
pub const OBSTACLE_COLOR: Color = Color::srgb(0.75, 0.25, 0.25);

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.9, 0.8); // Bone white/cream

// =============================================================================
// LANES
// =============================================================================

/// Distance between adjacent lane centers (one strafe travels exactly this)
pub const LANE_WIDTH: f32 = 300.0;
/// Full track width (three lanes)
pub const TRACK_WIDTH: f32 = LANE_WIDTH * 3.0;

// =============================================================================
// RUNNER MOVEMENT
// =============================================================================

/// Forward auto-run speed (world units/sec)
pub const RUN_SPEED: f32 = 1500.0;
/// Duration of one lane-switch animation in seconds
pub const STRAFE_DURATION: f32 = 0.25;
/// Forward distance covered during a strafe, as a fraction of one second of run speed
pub const STRAFE_DRIFT_FACTOR: f32 = 0.1;
/// Initial vertical velocity on jump
pub const JUMP_VELOCITY: f32 = 600.0;
/// Downward pull on the simulated jump axis
pub const JUMP_GRAVITY: f32 = 1600.0;
/// Above this jump height the runner clears obstacles
pub const OBSTACLE_CLEAR_HEIGHT: f32 = 40.0;
/// Sprite scale gain per unit of jump height (visual feedback only)
pub const JUMP_SCALE_FACTOR: f32 = 0.004;

// =============================================================================
// SIZES
// =============================================================================

pub const RUNNER_SIZE: Vec2 = Vec2::new(48.0, 64.0);
pub const COIN_SIZE: Vec2 = Vec2::new(28.0, 28.0);
pub const OBSTACLE_SIZE: Vec2 = Vec2::new(60.0, 120.0);

/// How close the runner must be to collect a coin
pub const COIN_PICKUP_RADIUS: f32 = 60.0;

// =============================================================================
// TRACK GENERATION
// =============================================================================

/// Forward length of one generated track segment
pub const SEGMENT_LENGTH: f32 = 1600.0;
/// Segments kept spawned ahead of the runner
pub const SEGMENTS_AHEAD: i64 = 3;
/// Track entities further behind the runner than this are despawned
pub const DESPAWN_BEHIND: f32 = SEGMENT_LENGTH * 1.5;
/// Coins placed per segment
pub const COINS_PER_SEGMENT: usize = 4;
/// Obstacles placed per segment
pub const OBSTACLES_PER_SEGMENT: usize = 2;
/// The first segment is kept empty so the run starts clean
pub const FIRST_HAZARD_SEGMENT: i64 = 1;

// =============================================================================
// CAMERA
// =============================================================================

/// Vertical world extent always visible (FixedVertical scaling)
pub const VIEW_HEIGHT: f32 = 1200.0;
/// How far ahead of the runner the camera frames the track
pub const CAMERA_LEAD: f32 = 350.0;
/// Exponential smoothing rate for camera follow (higher = stiffer)
pub const CAMERA_LAG_SPEED: f32 = 5.0;

// =============================================================================
// SPAWN POSITIONS
// =============================================================================

pub const RUNNER_SPAWN: Vec3 = Vec3::new(0.0, 0.0, 1.0);

// =============================================================================
// VIEWPORT PRESETS
// =============================================================================

/// Viewport scale presets: (width, height, label)
pub const VIEWPORT_PRESETS: &[(f32, f32, &str)] = &[
    (1600.0, 900.0, "1600x900 (native)"),
    (1920.0, 1080.0, "1920x1080 (1080p)"),
    (2560.0, 1440.0, "2560x1440 (1440p)"),
];

/// Default viewport preset index
pub const DEFAULT_VIEWPORT_INDEX: usize = 1;
