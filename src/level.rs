//! Level descriptions
//!
//! A level is plain data: play-field size, actor start, and a list of shape
//! definitions. `build_world` validates every polygon and produces the
//! runtime `World`; nothing malformed gets past it.

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LevelError;
use crate::renderer::vertex::colors;
use crate::settings::Settings;
use crate::sim::actor::Actor;
use crate::sim::geometry::{Color, Polygon};
use crate::sim::shape::{CollectibleShape, Motion};
use crate::sim::world::World;

/// One entry in a level's shape list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDef {
    /// Axis-aligned block; a platform is a block with a moving `motion`
    #[serde(alias = "obstacle", alias = "platform")]
    Rect {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        color: Color,
        #[serde(default)]
        motion: Motion,
    },
    /// Axis-aligned block with a texture stretched across it
    Textured {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        texture: String,
        #[serde(default = "default_textured_color")]
        color: Color,
        #[serde(default)]
        motion: Motion,
    },
    /// Arbitrary convex polygon, either winding
    Polygon {
        vertices: Vec<Vec2>,
        color: Color,
        #[serde(default)]
        motion: Motion,
    },
    /// Pickup standing on `base`, `size` meters tall
    Collectible {
        #[serde(default)]
        shape: CollectibleShape,
        base: Vec2,
        size: f32,
        #[serde(default = "default_collectible_color")]
        color: Color,
    },
}

fn default_textured_color() -> Color {
    colors::TRANSPARENT
}

fn default_collectible_color() -> Color {
    colors::GOLD
}

impl ShapeDef {
    /// Static axis-aligned block
    pub fn rect(left: f32, right: f32, bottom: f32, top: f32, color: Color) -> Self {
        ShapeDef::Rect {
            left,
            right,
            bottom,
            top,
            color,
            motion: Motion::Static,
        }
    }

    /// Gold triangle coin standing on `(x, y)`
    pub fn coin(x: f32, y: f32) -> Self {
        ShapeDef::Collectible {
            shape: CollectibleShape::Triangle,
            base: Vec2::new(x, y),
            size: 0.2,
            color: colors::GOLD,
        }
    }

    /// Replace the motion rule of a solid shape; collectibles are unchanged
    pub fn with_motion(mut self, rule: Motion) -> Self {
        match &mut self {
            ShapeDef::Rect { motion, .. }
            | ShapeDef::Textured { motion, .. }
            | ShapeDef::Polygon { motion, .. } => *motion = rule,
            ShapeDef::Collectible { .. } => {}
        }
        self
    }

    /// Validated polygon for this definition
    pub fn polygon(&self) -> Result<Polygon, crate::error::GeometryError> {
        match self {
            ShapeDef::Rect {
                left,
                right,
                bottom,
                top,
                color,
                ..
            } => Polygon::rect(*left, *right, *bottom, *top)
                .color(*color)
                .build(),
            ShapeDef::Textured {
                left,
                right,
                bottom,
                top,
                texture,
                color,
                ..
            } => Polygon::textured_rect(*left, *right, *bottom, *top)
                .color(*color)
                .texture(texture.clone())
                .build(),
            ShapeDef::Polygon {
                vertices, color, ..
            } => vertices
                .iter()
                .fold(Polygon::builder(), |b, &v| b.vertex(v))
                .color(*color)
                .build(),
            ShapeDef::Collectible {
                shape,
                base,
                size,
                color,
            } => {
                let builder = match shape {
                    CollectibleShape::Triangle => Polygon::triangle(
                        *base + Vec2::new(0.0, *size),
                        *base + Vec2::new(size * 0.5, 0.0),
                        *base - Vec2::new(size * 0.5, 0.0),
                    ),
                    CollectibleShape::Hexagon => {
                        let r = size * 0.5;
                        Polygon::regular(*base + Vec2::new(0.0, r), r, 6)
                    }
                };
                builder.color(*color).texture("coin").build()
            }
        }
    }
}

/// Complete level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Play field width; the actor is clamped to [0, width]
    #[serde(default = "default_width")]
    pub playing_width: f32,
    /// Visible height of the play field
    #[serde(default = "default_height")]
    pub playing_height: f32,
    /// Seeds the collectible idle animation
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_start")]
    pub actor_start: Vec2,
    pub shapes: Vec<ShapeDef>,
}

fn default_width() -> f32 {
    PLAYING_W
}

fn default_height() -> f32 {
    PLAYING_H
}

fn default_start() -> Vec2 {
    Vec2::new(ACTOR_START.0, ACTOR_START.1)
}

impl Level {
    /// The stock level: a long floor, five floating blocks, a lift, a
    /// stone block, and five coins
    pub fn builtin() -> Self {
        let shapes = vec![
            ShapeDef::rect(0.0, PLAYING_W, 0.9, 1.0, colors::CORNFLOWER_BLUE),
            ShapeDef::rect(2.0, 3.0, 1.7, 1.9, colors::CRIMSON),
            ShapeDef::rect(4.0, 4.2, 1.0, 2.1, colors::CORAL),
            ShapeDef::rect(5.0, 6.0, 2.2, 2.4, colors::BURLY_WOOD),
            ShapeDef::rect(5.5, 6.5, 3.2, 3.4, colors::PEACH_PUFF),
            ShapeDef::rect(6.5, 7.5, 2.5, 2.7, colors::CHOCOLATE),
            ShapeDef::rect(3.2, 3.9, 1.8, 2.0, colors::CORNFLOWER_BLUE)
                .with_motion(Motion::oscillate(Vec2::new(0.0, 0.5), 1.0)),
            ShapeDef::Textured {
                left: 1.2,
                right: 1.9,
                bottom: 3.3,
                top: 3.5,
                texture: "stone08".to_string(),
                color: colors::TRANSPARENT,
                motion: Motion::Static,
            },
            ShapeDef::coin(5.1, 1.0),
            ShapeDef::coin(2.6, 1.9),
            ShapeDef::coin(4.1, 2.1),
            ShapeDef::coin(7.4, 2.7),
            ShapeDef::coin(1.3, 3.5),
        ];

        Self {
            name: "builtin".to_string(),
            playing_width: PLAYING_W,
            playing_height: PLAYING_H,
            seed: 0,
            actor_start: default_start(),
            shapes,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        log::debug!("Parsed level '{}' ({} shapes)", level.name, level.shapes.len());
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a level from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("Loading level from {}", path.display());
        Self::from_json(&json)
    }

    /// Default settings with the clamp spanning this level's play field
    pub fn settings(&self) -> Settings {
        Settings::for_field_width(self.playing_width)
    }

    /// Validate every shape and build the runtime world
    ///
    /// Shapes keep their list order, so collision resolution order follows
    /// the level file.
    pub fn build_world(&self) -> Result<World, LevelError> {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let mut world = World::new();

        for (index, def) in self.shapes.iter().enumerate() {
            let polygon = def
                .polygon()
                .map_err(|source| LevelError::Geometry { index, source })?;

            match def {
                ShapeDef::Collectible { shape, .. } => {
                    let id = world.add_collectible(*shape, polygon);
                    if let Some(c) = world.collectibles.iter_mut().find(|c| c.id == id) {
                        c.phase = rng.random_range(0.0..std::f32::consts::TAU);
                        c.spin_rate *= rng.random_range(0.75f32..1.25);
                    }
                }
                ShapeDef::Rect { motion, .. }
                | ShapeDef::Textured { motion, .. }
                | ShapeDef::Polygon { motion, .. } => {
                    world.add_shape(polygon, *motion);
                }
            }
        }

        Ok(world)
    }

    /// The player actor at this level's start point
    pub fn spawn_actor(&self) -> Result<Actor, LevelError> {
        Actor::player(self.actor_start).map_err(LevelError::Actor)
    }
}
