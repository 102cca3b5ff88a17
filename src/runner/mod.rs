//! Runner module - components, lane switching and movement systems

mod components;
mod movement;
mod strafe;

pub use components::*;
pub use movement::*;
pub use strafe::*;
