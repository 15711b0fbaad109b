//! Convex polygon overlap and minimum translation
//!
//! Separating-axis test over the outward edge normals of both polygons.
//! Obstacle edges are tried before actor edges, each in vertex order, and
//! the first axis with the smallest overlap wins ties. Touching polygons
//! (shared edge or vertex, zero depth) count as overlapping.

use glam::Vec2;

use super::geometry::Polygon;

/// Which polygon supplied the axis of least overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// An obstacle edge: the actor reaches into the obstacle past that edge
    ActorInObstacle,
    /// An actor edge: the obstacle reaches into the actor past that edge
    ObstacleInActor,
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Whether the polygons overlap (touching included)
    pub overlap: bool,
    /// Minimum translation distance (non-negative)
    pub depth: f32,
    /// Unit normal pointing from the obstacle toward the actor
    pub normal: Vec2,
    /// Which polygon's edge the normal came from
    pub containment: Containment,
}

impl Contact {
    pub fn separate() -> Self {
        Self {
            overlap: false,
            depth: 0.0,
            normal: Vec2::ZERO,
            containment: Containment::ActorInObstacle,
        }
    }

    /// Depth signed by containment: positive along the winning edge's outward
    /// normal when that edge is the obstacle's, negative when it is the actor's
    pub fn signed_depth(&self) -> f32 {
        match self.containment {
            Containment::ActorInObstacle => self.depth,
            Containment::ObstacleInActor => -self.depth,
        }
    }

    /// Outward normal of the edge that produced this contact
    pub fn edge_normal(&self) -> Vec2 {
        match self.containment {
            Containment::ActorInObstacle => self.normal,
            Containment::ObstacleInActor => -self.normal,
        }
    }

    /// Translation that moves the actor out of the obstacle
    #[inline]
    pub fn correction(&self) -> Vec2 {
        self.edge_normal() * self.signed_depth()
    }
}

/// Test the actor polygon against an obstacle polygon
///
/// Returns as soon as any axis separates the two. Edges of zero length
/// carry no axis and are skipped.
///
/// # Panics
///
/// If either polygon has fewer than three vertices.
pub fn test(actor: &Polygon, obstacle: &Polygon) -> Contact {
    assert!(
        actor.len() >= 3 && obstacle.len() >= 3,
        "collision test needs polygons with at least 3 vertices (actor {}, obstacle {})",
        actor.len(),
        obstacle.len()
    );

    let mut best: Option<(f32, Vec2, Containment)> = None;

    for (owner, containment) in [
        (obstacle, Containment::ActorInObstacle),
        (actor, Containment::ObstacleInActor),
    ] {
        for (a, b) in owner.edges() {
            let n = Polygon::outward_normal(a, b);
            let len = n.length();
            if len <= f32::EPSILON {
                continue;
            }
            // Divide rather than multiply by the reciprocal so axis-aligned
            // edges give exact unit normals
            let axis = n / len;

            let (actor_min, actor_max) = actor.project(axis);
            let (obstacle_min, obstacle_max) = obstacle.project(axis);
            if actor_max < obstacle_min || obstacle_max < actor_min {
                return Contact::separate();
            }

            let (depth, normal) = match containment {
                Containment::ActorInObstacle => (obstacle_max - actor_min, axis),
                Containment::ObstacleInActor => (actor_max - obstacle_min, -axis),
            };
            if best.is_none_or(|(d, _, _)| depth < d) {
                best = Some((depth, normal, containment));
            }
        }
    }

    match best {
        Some((depth, normal, containment)) => Contact {
            overlap: true,
            depth,
            normal,
            containment,
        },
        None => Contact::separate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f32, right: f32, bottom: f32, top: f32) -> Polygon {
        Polygon::rect(left, right, bottom, top).build().unwrap()
    }

    fn actor_at(x: f32, y: f32) -> Polygon {
        rect(x - 0.2, x + 0.2, y, y + 1.0)
    }

    #[test]
    fn test_disjoint_polygons_miss() {
        let floor = rect(0.0, 32.0, 0.9, 1.0);
        let contact = test(&actor_at(0.5, 2.0), &floor);
        assert!(!contact.overlap);
        assert_eq!(contact.depth, 0.0);
    }

    #[test]
    fn test_touching_counts_as_overlap() {
        let floor = rect(0.0, 32.0, 0.9, 1.0);
        let contact = test(&actor_at(0.5, 1.0), &floor);
        assert!(contact.overlap);
        assert_eq!(contact.depth, 0.0);
        assert_eq!(contact.normal.y, 1.0);
    }

    #[test]
    fn test_small_gap_is_separate() {
        let floor = rect(0.0, 32.0, 0.9, 1.0);
        let contact = test(&actor_at(0.5, 1.001), &floor);
        assert!(!contact.overlap);

        // Same gap from the other side
        let ceiling = rect(0.0, 32.0, 2.001, 2.2);
        assert!(!test(&actor_at(0.5, 1.0), &ceiling).overlap);
        let ceiling = rect(0.0, 32.0, 2.0, 2.2);
        assert!(test(&actor_at(0.5, 1.0), &ceiling).overlap);
    }

    #[test]
    fn test_landing_normal_points_up() {
        let floor = rect(0.0, 32.0, 0.9, 1.0);
        let contact = test(&actor_at(0.5, 0.95), &floor);
        assert!(contact.overlap);
        assert_eq!(contact.containment, Containment::ActorInObstacle);
        assert_eq!(contact.normal, Vec2::new(0.0, 1.0));
        assert!((contact.depth - 0.05).abs() < 1e-6);
        assert!((contact.correction() - Vec2::new(0.0, 0.05)).length() < 1e-6);
    }

    #[test]
    fn test_wall_normal_points_back_at_actor() {
        let wall = rect(4.0, 4.2, 1.0, 2.1);
        // Walking right, front edge 0.05 into the wall
        let contact = test(&actor_at(3.85, 1.0), &wall);
        assert!(contact.overlap);
        assert_eq!(contact.normal, Vec2::new(-1.0, 0.0));
        assert!((contact.depth - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_head_bump_normal_points_down() {
        let ceiling = rect(2.0, 3.0, 1.7, 1.9);
        let contact = test(&actor_at(2.5, 0.8), &ceiling);
        assert!(contact.overlap);
        assert_eq!(contact.normal, Vec2::new(0.0, -1.0));
        assert!((contact.depth - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_actor_edge_axis_reports_obstacle_in_actor() {
        // Downward-pointing triangle poking into the actor's top edge. Its own
        // edges are slanted, so the actor's top edge gives the least overlap.
        let spike = Polygon::builder()
            .vertex(Vec2::new(0.0, 2.9))
            .vertex(Vec2::new(-1.0, 4.0))
            .vertex(Vec2::new(1.0, 4.0))
            .build()
            .unwrap();
        let contact = test(&actor_at(0.0, 2.0), &spike);
        assert!(contact.overlap);
        assert_eq!(contact.containment, Containment::ObstacleInActor);
        assert_eq!(contact.normal, Vec2::new(0.0, -1.0));
        assert_eq!(contact.edge_normal(), Vec2::new(0.0, 1.0));
        assert!(contact.signed_depth() < 0.0);
        // Correction still pushes the actor away (down)
        assert!(contact.correction().y < 0.0);
    }

    #[test]
    fn test_equal_overlap_prefers_obstacle_edge() {
        // Actor exactly the size of the obstacle and sunk halfway: the
        // obstacle's top edge and the actor's bottom edge tie
        let block = rect(0.0, 1.0, 0.0, 1.0);
        let actor = rect(0.0, 1.0, 0.5, 1.5);
        let contact = test(&actor, &block);
        assert_eq!(contact.containment, Containment::ActorInObstacle);
        assert_eq!(contact.normal, Vec2::new(0.0, 1.0));
        assert_eq!(contact.depth, 0.5);
    }

    #[test]
    fn test_correction_resolves_single_contact() {
        let floor = rect(0.0, 32.0, 0.9, 1.0);
        let mut actor = actor_at(0.5, 0.93);
        let contact = test(&actor, &floor);
        actor.translate(contact.correction());
        let again = test(&actor, &floor);
        assert!(!again.overlap || again.depth == 0.0);
    }

    #[test]
    fn test_degenerate_edge_is_ignored() {
        // Repeated vertex: one zero-length edge
        let poly = Polygon::builder()
            .vertex(Vec2::new(0.0, 1.0))
            .vertex(Vec2::new(1.0, 1.0))
            .vertex(Vec2::new(1.0, 1.0))
            .vertex(Vec2::new(1.0, 0.0))
            .vertex(Vec2::new(0.0, 0.0))
            .build()
            .unwrap();
        assert!(!test(&actor_at(3.0, 0.0), &poly).overlap);
        let contact = test(&actor_at(1.1, 0.0), &poly);
        assert!(contact.overlap);
        assert!(contact.normal.length() > 0.99);
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn test_two_vertex_obstacle_panics() {
        let segment = Polygon::unchecked(vec![Vec2::new(0.0, 1.0), Vec2::new(2.0, 1.0)]);
        test(&actor_at(1.0, 0.5), &segment);
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn test_two_vertex_actor_panics() {
        let segment = Polygon::unchecked(vec![Vec2::new(0.0, 1.0), Vec2::new(0.0, 2.0)]);
        test(&segment, &rect(0.0, 32.0, 0.9, 1.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn separated_boxes_never_overlap(
                x in -10.0f32..10.0,
                y in -10.0f32..10.0,
                w in 0.1f32..3.0,
                h in 0.1f32..3.0,
                gap in 0.01f32..2.0,
            ) {
                let obstacle = rect(x, x + w, y, y + h);
                // Actor fully to the right of the obstacle
                let actor = rect(x + w + gap, x + w + gap + 0.4, y, y + 1.0);
                prop_assert!(!test(&actor, &obstacle).overlap);
                // Actor fully above
                let actor = rect(x, x + 0.4, y + h + gap, y + h + gap + 1.0);
                prop_assert!(!test(&actor, &obstacle).overlap);
            }

            #[test]
            fn correction_leaves_no_penetration(
                ox in -5.0f32..5.0,
                oy in -5.0f32..5.0,
                dx in -0.35f32..0.35,
                dy in -0.9f32..0.9,
            ) {
                let obstacle = rect(ox - 0.5, ox + 0.5, oy - 0.5, oy + 0.5);
                let mut actor = rect(ox + dx - 0.2, ox + dx + 0.2, oy + dy - 0.5, oy + dy + 0.5);
                let contact = test(&actor, &obstacle);
                prop_assert!(contact.overlap);
                prop_assert!(contact.depth >= 0.0);
                prop_assert!((contact.normal.length() - 1.0).abs() < 1e-5);

                actor.translate(contact.correction());
                let again = test(&actor, &obstacle);
                prop_assert!(!again.overlap || again.depth < 1e-4, "residual {}", again.depth);
            }
        }
    }
}
