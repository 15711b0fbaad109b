//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time arrives only as a delta (or clock reading) from the host
//! - Seeded RNG only, and only at level build
//! - Stable iteration order (insertion order of shapes and collectibles)
//! - No rendering, audio, or platform dependencies

pub mod actor;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod shape;
pub mod state;
pub mod tick;
pub mod world;

pub use actor::Actor;
pub use collision::{Contact, Containment};
pub use geometry::{Color, Polygon, PolygonBuilder};
pub use input::{Command, apply as apply_command};
pub use shape::{Collectible, CollectibleShape, Motion, Renderable, Shape};
pub use state::{GameEvent, GameState};
pub use tick::{Stepper, advance};
pub use world::World;
