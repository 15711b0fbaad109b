//! The controllable actor

use glam::Vec2;

use super::geometry::Polygon;
use super::shape::Renderable;
use crate::consts::*;
use crate::error::GeometryError;

/// The player body: kinematic state, footing flags, and its bounding polygon
#[derive(Debug, Clone)]
pub struct Actor {
    pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    /// Resting on a surface whose contact normal points up
    pub standing: bool,
    /// A jump is in progress; cleared on landing
    pub jumped: bool,
    /// Collectibles consumed this session
    pub score: u64,
    /// Bounding shape relative to `pos`
    local: Polygon,
    /// `local` placed at `pos`
    world: Polygon,
}

impl Actor {
    /// Actor with the given local bounding shape, placed at `pos`
    pub fn new(pos: Vec2, local: Polygon) -> Self {
        let mut world = local.clone();
        world.place(&local, pos);
        Self {
            pos,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            standing: false,
            jumped: false,
            score: 0,
            local,
            world,
        }
    }

    /// Default player box (feet at `pos`) with sprite-sheet texture coordinates
    pub fn player(pos: Vec2) -> Result<Self, GeometryError> {
        let hw = ACTOR_HALF_WIDTH;
        let h = ACTOR_HEIGHT;
        let local = Polygon::builder()
            .textured_vertex(Vec2::new(-hw, 0.0), Vec2::new(0.0, 1.0))
            .textured_vertex(Vec2::new(-hw, h), Vec2::new(0.0, 0.0))
            .textured_vertex(Vec2::new(hw, h), Vec2::new(0.125, 0.0))
            .textured_vertex(Vec2::new(hw, 0.0), Vec2::new(0.125, 1.0))
            .color([1.0, 1.0, 1.0, 0.0])
            .texture("guy")
            .build()?;
        Ok(Self::new(pos, local))
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Move the actor; the bounding polygon follows immediately
    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
        self.world.place(&self.local, pos);
    }

    /// World-space bounding polygon, consistent with `pos()`
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.world
    }

    /// Semi-implicit Euler: velocity first, then position
    ///
    /// `advance(0.0)` leaves position and velocity alone and only re-syncs
    /// the bounding polygon.
    pub fn advance(&mut self, dt: f32) {
        if dt != 0.0 {
            self.vel += self.accel * dt;
            self.pos += self.vel * dt;
        }
        self.world.place(&self.local, self.pos);
    }

    /// Start a jump unless one is already in progress
    ///
    /// Returns true when the jump was taken.
    pub fn jump(&mut self, speed: f32, gravity: f32) -> bool {
        if self.jumped {
            return false;
        }
        self.jumped = true;
        self.standing = false;
        self.vel.y = speed;
        self.accel = Vec2::new(0.0, gravity);
        true
    }

    /// Set horizontal velocity (negative = left, zero = stop)
    pub fn walk(&mut self, speed: f32) {
        self.vel.x = speed;
    }

    /// Record a landing on a surface below
    pub fn land(&mut self) {
        self.jumped = false;
        self.standing = true;
    }
}

impl Renderable for Actor {
    fn outline(&self) -> Option<&Polygon> {
        Some(&self.world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semi_implicit_euler() {
        let mut actor = Actor::player(Vec2::ZERO).unwrap();
        actor.vel = Vec2::new(1.0, 2.0);
        actor.accel = Vec2::new(0.0, -10.0);
        actor.advance(0.5);
        // v = 2 - 5 = -3, p = 0 + (-3 * 0.5)
        assert_eq!(actor.vel, Vec2::new(1.0, -3.0));
        assert_eq!(actor.pos(), Vec2::new(0.5, -1.5));
    }

    #[test]
    fn test_advance_zero_keeps_state() {
        let mut actor = Actor::player(Vec2::new(0.5, 1.0)).unwrap();
        actor.vel = Vec2::new(1.5, 3.0);
        actor.accel = Vec2::new(0.0, GRAVITY);
        actor.advance(0.0);
        assert_eq!(actor.pos(), Vec2::new(0.5, 1.0));
        assert_eq!(actor.vel, Vec2::new(1.5, 3.0));
    }

    #[test]
    fn test_polygon_tracks_position() {
        let mut actor = Actor::player(Vec2::new(0.5, 1.0)).unwrap();
        assert_eq!(actor.polygon().project(Vec2::Y), (1.0, 2.0));

        actor.set_pos(Vec2::new(3.0, 2.0));
        assert_eq!(actor.polygon().project(Vec2::Y), (2.0, 3.0));

        actor.vel = Vec2::new(0.0, 1.0);
        actor.advance(0.5);
        assert_eq!(actor.polygon().project(Vec2::Y), (2.5, 3.5));
    }

    #[test]
    fn test_jump_only_once_until_landing() {
        let mut actor = Actor::player(Vec2::new(0.5, 1.0)).unwrap();
        actor.standing = true;
        assert!(actor.jump(JUMP_SPEED, GRAVITY));
        assert!(!actor.standing);
        assert_eq!(actor.vel.y, JUMP_SPEED);
        assert_eq!(actor.accel, Vec2::new(0.0, GRAVITY));

        actor.vel.y = 1.0;
        assert!(!actor.jump(JUMP_SPEED, GRAVITY));
        assert_eq!(actor.vel.y, 1.0);

        actor.land();
        assert!(actor.standing);
        assert!(actor.jump(JUMP_SPEED, GRAVITY));
    }
}
