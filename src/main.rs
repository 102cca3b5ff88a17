//! Lanerunner - a three-lane endless runner built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::{camera::ScalingMode, prelude::*};
use chrono::Utc;
use uuid::Uuid;

use lanerunner::{
    Airborne, CameraRig, CurrentSettings, Dead, EventBus, GameEvent, LaneSwitch, Runner,
    RunnerInput, Score, ScoreText, StrafeTimeline, TrackState, camera, constants::*, events, input,
    runner, save_settings_system, scoring, world,
};

fn main() {
    // Load persistent settings (uses defaults if file doesn't exist)
    let current_settings = CurrentSettings::default();

    // Use loaded viewport preset (clamped to valid range)
    let viewport_index = current_settings
        .settings
        .viewport_index
        .min(VIEWPORT_PRESETS.len() - 1);
    let (viewport_width, viewport_height, _) = VIEWPORT_PRESETS[viewport_index];

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: bevy::window::WindowResolution::new(
                    viewport_width as u32,
                    viewport_height as u32,
                )
                .with_scale_factor_override(1.0),
                title: "Lanerunner".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(current_settings)
        .insert_resource(EventBus::new())
        .init_resource::<RunnerInput>()
        .init_resource::<Score>()
        .init_resource::<TrackState>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                input::capture_input,
                camera::camera_follow,
                scoring::update_score_text,
                events::update_event_bus_time,
                events::log_drained_events,
                save_settings_system,
            ),
        )
        // Fixed-tick gameplay: steer, run, strafe, jump, track, pickups, death
        .add_systems(
            FixedUpdate,
            (
                runner::begin_strafe,
                runner::forward_run,
                runner::strafe_tick,
                runner::apply_jump,
                runner::apply_air_physics,
                runner::animate_jump_height,
                world::advance_track,
                scoring::collect_coins,
                world::obstacle_hit,
                scoring::track_distance,
            )
                .chain(),
        )
        .run();
}

/// Setup the game world
fn setup(mut commands: Commands, mut bus: ResMut<EventBus>) {
    // Camera - orthographic, fixed vertical extent so the full track width
    // is always framed regardless of window size
    let camera_entity = commands
        .spawn((
            Camera2d,
            Transform::from_xyz(RUNNER_SPAWN.x + CAMERA_LEAD, 0.0, 0.0),
            Projection::Orthographic(OrthographicProjection {
                scaling_mode: ScalingMode::FixedVertical {
                    viewport_height: VIEW_HEIGHT,
                },
                ..OrthographicProjection::default_2d()
            }),
            CameraRig::default(),
        ))
        .id();

    // HUD - parented to the camera so it rides along with the scroll
    let hud = commands
        .spawn((
            Text2d::new("Coins: 0   Distance: 0m"),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextLayout::new_with_justify(Justify::Center),
            TextColor(TEXT_PRIMARY),
            Transform::from_xyz(0.0, VIEW_HEIGHT / 2.0 - 50.0, 10.0),
            ScoreText,
        ))
        .id();
    commands.entity(camera_entity).add_child(hud);

    // The runner - starts alive, grounded, in the middle lane
    commands.spawn((
        Sprite::from_color(RUNNER_COLOR, RUNNER_SIZE),
        Transform::from_translation(RUNNER_SPAWN),
        Runner,
        LaneSwitch::default(),
        StrafeTimeline::default(),
        Airborne::default(),
        Dead::default(),
    ));

    bus.emit(GameEvent::SessionStart {
        session_id: Uuid::new_v4().to_string(),
        timestamp: Utc::now().to_rfc3339(),
    });
    info!("Lanerunner session started");
}
