//! World containers: solid shapes and live collectibles

use super::geometry::Polygon;
use super::shape::{Collectible, CollectibleShape, Motion, Shape};

/// Every polygon the actor can collide with, in insertion order
#[derive(Debug, Clone)]
pub struct World {
    /// Obstacles and platforms
    pub shapes: Vec<Shape>,
    /// Collectibles not yet consumed
    pub collectibles: Vec<Collectible>,
    next_id: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            collectibles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an obstacle or platform, returning its ID
    pub fn add_shape(&mut self, polygon: Polygon, motion: Motion) -> u32 {
        let id = self.next_entity_id();
        self.shapes.push(Shape::new(id, polygon, motion));
        id
    }

    /// Add a collectible, returning its ID
    pub fn add_collectible(&mut self, shape: CollectibleShape, polygon: Polygon) -> u32 {
        let id = self.next_entity_id();
        self.collectibles.push(Collectible::new(id, shape, polygon));
        id
    }

    /// Remove the live collectible at `index`
    pub fn take_collectible(&mut self, index: usize) -> Collectible {
        self.collectibles.remove(index)
    }

    /// Advance every shape and collectible by `dt`
    pub fn advance(&mut self, dt: f32) {
        for shape in &mut self.shapes {
            shape.advance(dt);
        }
        for collectible in &mut self.collectibles {
            collectible.advance(dt);
        }
    }

    pub fn shape(&self, id: u32) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn test_ids_are_unique_across_containers() {
        let mut world = World::new();
        let a = world.add_shape(Polygon::rect(0.0, 1.0, 0.0, 1.0).build().unwrap(), Motion::Static);
        let b = world.add_collectible(
            CollectibleShape::Hexagon,
            Polygon::regular(Vec2::new(2.0, 2.0), 0.1, 6).build().unwrap(),
        );
        assert_ne!(a, b);
        assert!(world.shape(a).is_some());
        assert!(world.shape(b).is_none());
    }

    #[test]
    fn test_advance_moves_platforms_only() {
        let mut world = World::new();
        let rock = world.add_shape(Polygon::rect(0.0, 1.0, 0.0, 1.0).build().unwrap(), Motion::Static);
        let lift = world.add_shape(
            Polygon::rect(3.0, 4.0, 1.0, 1.2).build().unwrap(),
            Motion::oscillate(Vec2::new(0.0, 1.0), 0.0),
        );
        world.advance(0.5);
        assert_eq!(world.shape(rock).unwrap().polygon.project(Vec2::Y), (0.0, 1.0));
        assert_eq!(world.shape(lift).unwrap().polygon.project(Vec2::Y), (1.5, 1.7));
    }
}
