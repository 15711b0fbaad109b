//! Step Platformer - collision and physics core for a 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (polygons, actor, collision, sub-stepping)
//! - `level`: Level descriptions (built-in layout and JSON)
//! - `settings`: Physics and play-field tuning
//! - `audio`: Sound cue routing onto an optional output sink
//! - `renderer`: CPU-side render export (vertices, view window)

pub mod audio;
pub mod error;
pub mod level;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GeometryError, LevelError, SettingsError};
pub use level::Level;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest sub-step the integrator will take (seconds)
    pub const MAX_STEP: f32 = 0.05;
    /// Largest distance the actor may travel in one sub-step (meters)
    pub const MAX_SUBSTEP_TRAVEL: f32 = 0.05;

    /// Play field dimensions (meters)
    pub const PLAYING_W: f32 = 32.0;
    pub const PLAYING_H: f32 = 4.0;

    /// Gravity applied once the actor has jumped (m/s²)
    pub const GRAVITY: f32 = -9.8;
    /// Vertical launch speed of a jump (m/s)
    pub const JUMP_SPEED: f32 = 7.0;
    /// Horizontal walking speed (m/s)
    pub const WALK_SPEED: f32 = 1.5;

    /// Actor box, relative to the actor position (feet at the origin)
    pub const ACTOR_HALF_WIDTH: f32 = 0.2;
    pub const ACTOR_HEIGHT: f32 = 1.0;
    /// Actor spawn point
    pub const ACTOR_START: (f32, f32) = (0.5, 1.0);

    /// Points awarded per collectible
    pub const COLLECTIBLE_SCORE: u64 = 1;
}

/// Perpendicular of a vector, rotated a quarter turn counter-clockwise
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// 2D cross product (z component of the 3D cross product)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}
