//! World shapes: obstacles, moving platforms, and collectibles
//!
//! A shape is a polygon plus a motion rule. The rule is data, not a subtype:
//! static obstacles, oscillating platforms and blinking blocks all share the
//! same `Shape` and differ only in their `Motion`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Color, Polygon};

/// Per-instance update rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Motion {
    /// Never moves
    #[default]
    Static,
    /// Translates at `velocity`, reversing after covering `travel` meters.
    /// A non-positive `travel` never reverses.
    Oscillate {
        velocity: Vec2,
        travel: f32,
        /// Distance covered since the last reversal
        #[serde(default)]
        traveled: f32,
    },
    /// Solid for `on` seconds, then absent for `off` seconds
    Blink {
        on: f32,
        off: f32,
        #[serde(default)]
        clock: f32,
    },
}

impl Motion {
    /// Platform moving back and forth along `velocity`
    pub fn oscillate(velocity: Vec2, travel: f32) -> Self {
        Motion::Oscillate {
            velocity,
            travel,
            traveled: 0.0,
        }
    }

    /// Block that disappears periodically
    pub fn blink(on: f32, off: f32) -> Self {
        Motion::Blink { on, off, clock: 0.0 }
    }
}

/// Something the renderer can draw
pub trait Renderable {
    /// Current world-space outline, or None when nothing should be drawn
    fn outline(&self) -> Option<&Polygon>;

    /// Color the outline is drawn with
    fn tint(&self) -> Color {
        self.outline().map(|p| p.color).unwrap_or([0.0; 4])
    }
}

/// An obstacle or platform
#[derive(Debug, Clone)]
pub struct Shape {
    pub id: u32,
    pub polygon: Polygon,
    pub motion: Motion,
}

impl Shape {
    pub fn new(id: u32, polygon: Polygon, motion: Motion) -> Self {
        Self {
            id,
            polygon,
            motion,
        }
    }

    /// Static obstacle
    pub fn obstacle(id: u32, polygon: Polygon) -> Self {
        Self::new(id, polygon, Motion::Static)
    }

    /// Whether the actor can currently collide with this shape
    pub fn is_solid(&self) -> bool {
        match self.motion {
            Motion::Blink { on, off, clock } => on + off <= 0.0 || clock < on,
            _ => true,
        }
    }

    /// Current velocity of the shape's vertices
    pub fn velocity(&self) -> Vec2 {
        match self.motion {
            Motion::Oscillate { velocity, .. } => velocity,
            _ => Vec2::ZERO,
        }
    }

    /// Advance the motion rule by `dt`, returning how far the polygon moved
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        match &mut self.motion {
            Motion::Static => Vec2::ZERO,
            Motion::Oscillate {
                velocity,
                travel,
                traveled,
            } => {
                let delta = oscillate(velocity, *travel, traveled, dt);
                if delta != Vec2::ZERO {
                    self.polygon.translate(delta);
                }
                delta
            }
            Motion::Blink { on, off, clock } => {
                let cycle = *on + *off;
                if cycle > 0.0 {
                    *clock = (*clock + dt).rem_euclid(cycle);
                }
                Vec2::ZERO
            }
        }
    }
}

/// Move along `velocity` for `dt`, bouncing at each end of the travel span
fn oscillate(velocity: &mut Vec2, travel: f32, traveled: &mut f32, dt: f32) -> Vec2 {
    let speed = velocity.length();
    if speed == 0.0 || dt <= 0.0 {
        return Vec2::ZERO;
    }
    if travel <= 0.0 {
        return *velocity * dt;
    }

    let mut remaining = speed * dt;
    let mut delta = Vec2::ZERO;
    while remaining > 0.0 {
        let leg = (travel - *traveled).min(remaining);
        delta += *velocity / speed * leg;
        *traveled += leg;
        remaining -= leg;
        if *traveled >= travel {
            *velocity = -*velocity;
            *traveled = 0.0;
        }
    }
    delta
}

impl Renderable for Shape {
    fn outline(&self) -> Option<&Polygon> {
        self.is_solid().then_some(&self.polygon)
    }
}

/// Outline family of a collectible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollectibleShape {
    #[default]
    Triangle,
    Hexagon,
}

/// A pickup that is consumed on first contact with the actor
#[derive(Debug, Clone)]
pub struct Collectible {
    pub id: u32,
    pub shape: CollectibleShape,
    pub polygon: Polygon,
    /// Idle animation phase (radians); never moves the polygon
    pub phase: f32,
    /// Idle animation rate (radians per second)
    pub spin_rate: f32,
}

impl Collectible {
    pub fn new(id: u32, shape: CollectibleShape, polygon: Polygon) -> Self {
        Self {
            id,
            shape,
            polygon,
            phase: 0.0,
            spin_rate: std::f32::consts::TAU,
        }
    }

    /// Advance the idle animation
    pub fn advance(&mut self, dt: f32) {
        self.phase = (self.phase + self.spin_rate * dt).rem_euclid(std::f32::consts::TAU);
    }

    /// Brightness multiplier for the idle shimmer (0.75..=1.0)
    pub fn glow(&self) -> f32 {
        0.875 + 0.125 * self.phase.sin()
    }
}

impl Renderable for Collectible {
    fn outline(&self) -> Option<&Polygon> {
        Some(&self.polygon)
    }

    fn tint(&self) -> Color {
        let g = self.glow();
        let [r, gr, b, a] = self.polygon.color;
        [r * g, gr * g, b * g, a]
    }
}
