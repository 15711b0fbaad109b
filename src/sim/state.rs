//! Game state and simulation events
//!
//! Everything the stepper mutates lives here; the host only reads it back
//! (render lists, score) and drains the event queue.

use super::actor::Actor;
use super::shape::CollectibleShape;
use super::world::World;
use crate::error::{LevelError, SettingsError};
use crate::level::Level;
use crate::settings::Settings;

/// Fire-and-forget notifications for the audio and UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A jump was started
    Jumped,
    /// The actor came to rest on top of a shape
    Landed { shape_id: u32 },
    /// The actor's head hit the underside of a shape
    Bumped { shape_id: u32 },
    /// A collectible was consumed
    Collected {
        id: u32,
        shape: CollectibleShape,
        score: u64,
    },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub actor: Actor,
    pub world: World,
    pub settings: Settings,
    /// Simulated seconds
    pub time: f64,
    /// Sub-steps taken since the session began
    pub substeps: u64,
    pub(super) events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(actor: Actor, world: World, settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            actor,
            world,
            settings,
            time: 0.0,
            substeps: 0,
            events: Vec::new(),
        })
    }

    /// Build the level and place the actor at its start point
    pub fn from_level(level: &Level, settings: Settings) -> Result<Self, LevelError> {
        let world = level.build_world()?;
        let actor = level.spawn_actor()?;
        log::info!(
            "Level '{}': {} shapes, {} collectibles",
            level.name,
            world.shapes.len(),
            world.collectibles.len()
        );
        Ok(Self::new(actor, world, settings)?)
    }

    /// Collectibles consumed so far
    pub fn score(&self) -> u64 {
        self.actor.score
    }

    /// Collectibles still live
    pub fn remaining(&self) -> usize {
        self.world.collectibles.len()
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events queued since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
