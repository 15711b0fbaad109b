//! Convex polygon geometry
//!
//! Polygons live in world coordinates with y pointing up. Every polygon is
//! stored clockwise; the collision tester derives outward edge normals from
//! that winding, so the builder normalizes counter-clockwise input.

use glam::Vec2;

use crate::error::GeometryError;
use crate::{cross, perp};

/// RGBA color tag (rendering only)
pub type Color = [f32; 4];

/// Cross products below this are treated as collinear
const COLLINEAR_EPS: f32 = 1e-6;

/// A convex polygon with optional per-vertex texture coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    tex_coords: Vec<Vec2>,
    pub color: Color,
    /// Texture name, resolved by the renderer
    pub texture: Option<String>,
}

impl Polygon {
    /// Start building a polygon
    pub fn builder() -> PolygonBuilder {
        PolygonBuilder::default()
    }

    /// Axis-aligned rectangle, emitted (left,top) (right,top) (right,bottom) (left,bottom)
    pub fn rect(left: f32, right: f32, bottom: f32, top: f32) -> PolygonBuilder {
        Polygon::builder()
            .vertex(Vec2::new(left, top))
            .vertex(Vec2::new(right, top))
            .vertex(Vec2::new(right, bottom))
            .vertex(Vec2::new(left, bottom))
    }

    /// Rectangle with the texture mapped across it
    pub fn textured_rect(left: f32, right: f32, bottom: f32, top: f32) -> PolygonBuilder {
        Polygon::builder()
            .textured_vertex(Vec2::new(left, top), Vec2::new(0.0, 1.0))
            .textured_vertex(Vec2::new(right, top), Vec2::new(0.0, 0.0))
            .textured_vertex(Vec2::new(right, bottom), Vec2::new(1.0, 0.0))
            .textured_vertex(Vec2::new(left, bottom), Vec2::new(1.0, 1.0))
    }

    /// Coin triangle from its apex and two base corners
    pub fn triangle(center: Vec2, right: Vec2, left: Vec2) -> PolygonBuilder {
        Polygon::builder()
            .textured_vertex(center, Vec2::new(0.5, 1.0))
            .textured_vertex(right, Vec2::new(1.0, 0.0))
            .textured_vertex(left, Vec2::new(0.0, 1.0))
    }

    /// Regular polygon, first vertex straight up, walking clockwise
    pub fn regular(center: Vec2, radius: f32, sides: usize) -> PolygonBuilder {
        let mut builder = Polygon::builder();
        for i in 0..sides {
            let theta = std::f32::consts::FRAC_PI_2 - i as f32 * std::f32::consts::TAU / sides as f32;
            let dir = Vec2::new(theta.cos(), theta.sin());
            let uv = Vec2::new(0.5 + dir.x * 0.5, 0.5 - dir.y * 0.5);
            builder = builder.textured_vertex(center + dir * radius, uv);
        }
        builder
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Texture coordinates, one per vertex, if the polygon is textured
    pub fn tex_coords(&self) -> Option<&[Vec2]> {
        if self.tex_coords.is_empty() {
            None
        } else {
            Some(&self.tex_coords)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges as (start, end) pairs, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Outward normal of the edge a→b (not normalized)
    ///
    /// Clockwise winding puts the interior on the right of each edge, so the
    /// outward side is the left-hand perpendicular.
    #[inline]
    pub fn outward_normal(a: Vec2, b: Vec2) -> Vec2 {
        perp(b - a)
    }

    /// Interval covered by the vertices projected onto `axis`
    pub fn project(&self, axis: Vec2) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for v in &self.vertices {
            let d = v.dot(axis);
            min = min.min(d);
            max = max.max(d);
        }
        (min, max)
    }

    /// Shoelace area; positive for counter-clockwise winding
    pub fn signed_area(&self) -> f32 {
        signed_area(&self.vertices)
    }

    /// Vertex average
    pub fn centroid(&self) -> Vec2 {
        let sum: Vec2 = self.vertices.iter().copied().sum();
        sum / self.vertices.len().max(1) as f32
    }

    /// Move every vertex by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Overwrite this polygon's vertices with `local` shifted by `offset`
    ///
    /// Reuses the vertex buffer. Both polygons must have the same vertex count.
    pub fn place(&mut self, local: &Polygon, offset: Vec2) {
        debug_assert_eq!(self.vertices.len(), local.vertices.len());
        for (dst, src) in self.vertices.iter_mut().zip(&local.vertices) {
            *dst = *src + offset;
        }
    }

    /// Polygon taken as-is, skipping validation
    #[cfg(test)]
    pub(crate) fn unchecked(vertices: Vec<Vec2>) -> Self {
        Polygon {
            vertices,
            tex_coords: Vec::new(),
            color: [1.0, 1.0, 1.0, 1.0],
            texture: None,
        }
    }
}

fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let mut twice = 0.0;
    for i in 0..n {
        twice += cross(vertices[i], vertices[(i + 1) % n]);
    }
    twice * 0.5
}

/// Builder that appends vertices (and matching texture coordinates) in order
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    vertices: Vec<Vec2>,
    tex_coords: Vec<Vec2>,
    color: Option<Color>,
    texture: Option<String>,
}

impl PolygonBuilder {
    pub fn vertex(mut self, v: Vec2) -> Self {
        self.vertices.push(v);
        self
    }

    pub fn tex(mut self, uv: Vec2) -> Self {
        self.tex_coords.push(uv);
        self
    }

    pub fn textured_vertex(self, v: Vec2, uv: Vec2) -> Self {
        self.vertex(v).tex(uv)
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn texture(mut self, name: impl Into<String>) -> Self {
        self.texture = Some(name.into());
        self
    }

    /// Validate and produce the polygon
    pub fn build(self) -> Result<Polygon, GeometryError> {
        let PolygonBuilder {
            mut vertices,
            mut tex_coords,
            color,
            texture,
        } = self;

        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        if !tex_coords.is_empty() && tex_coords.len() != vertices.len() {
            return Err(GeometryError::TexCoordMismatch {
                vertices: vertices.len(),
                tex_coords: tex_coords.len(),
            });
        }

        let area = signed_area(&vertices);
        if area.abs() <= f32::EPSILON {
            return Err(GeometryError::Degenerate);
        }
        if area > 0.0 {
            vertices.reverse();
            tex_coords.reverse();
        }

        let n = vertices.len();
        for i in 0..n {
            let e0 = vertices[(i + 1) % n] - vertices[i];
            let e1 = vertices[(i + 2) % n] - vertices[(i + 1) % n];
            if cross(e0, e1) > COLLINEAR_EPS {
                return Err(GeometryError::NonConvex);
            }
        }

        Ok(Polygon {
            vertices,
            tex_coords,
            color: color.unwrap_or([1.0, 1.0, 1.0, 1.0]),
            texture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_clockwise() {
        let poly = Polygon::rect(0.0, 2.0, 0.0, 1.0).build().unwrap();
        assert!(poly.signed_area() < 0.0);
        assert_eq!(poly.vertices()[0], Vec2::new(0.0, 1.0));
        assert_eq!(poly.len(), 4);
    }

    #[test]
    fn test_counter_clockwise_input_is_reversed() {
        let poly = Polygon::builder()
            .textured_vertex(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0))
            .textured_vertex(Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0))
            .textured_vertex(Vec2::new(0.0, 1.0), Vec2::new(0.0, 1.0))
            .build()
            .unwrap();
        assert!(poly.signed_area() < 0.0);
        // Texture coordinates follow their vertices
        let uvs = poly.tex_coords().unwrap();
        for (v, uv) in poly.vertices().iter().zip(uvs) {
            assert_eq!(v, uv);
        }
    }

    #[test]
    fn test_too_few_vertices() {
        let err = Polygon::builder()
            .vertex(Vec2::ZERO)
            .vertex(Vec2::X)
            .build()
            .unwrap_err();
        assert_eq!(err, GeometryError::TooFewVertices(2));
    }

    #[test]
    fn test_tex_coord_mismatch() {
        let err = Polygon::rect(0.0, 1.0, 0.0, 1.0)
            .tex(Vec2::ZERO)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GeometryError::TexCoordMismatch {
                vertices: 4,
                tex_coords: 1
            }
        );
    }

    #[test]
    fn test_degenerate_rejected() {
        let err = Polygon::builder()
            .vertex(Vec2::new(0.0, 0.0))
            .vertex(Vec2::new(1.0, 1.0))
            .vertex(Vec2::new(2.0, 2.0))
            .build()
            .unwrap_err();
        assert_eq!(err, GeometryError::Degenerate);
    }

    #[test]
    fn test_non_convex_rejected() {
        // Arrowhead, clockwise
        let err = Polygon::builder()
            .vertex(Vec2::new(0.0, 2.0))
            .vertex(Vec2::new(2.0, 0.0))
            .vertex(Vec2::new(0.0, 1.0))
            .vertex(Vec2::new(-2.0, 0.0))
            .build()
            .unwrap_err();
        assert_eq!(err, GeometryError::NonConvex);
    }

    #[test]
    fn test_outward_normals_point_away_from_centroid() {
        let poly = Polygon::regular(Vec2::new(3.0, 2.0), 0.5, 6).build().unwrap();
        let c = poly.centroid();
        for (a, b) in poly.edges() {
            let n = Polygon::outward_normal(a, b);
            assert!(n.dot((a + b) * 0.5 - c) > 0.0);
        }
    }

    #[test]
    fn test_project_interval() {
        let poly = Polygon::rect(1.0, 3.0, -1.0, 2.0).build().unwrap();
        assert_eq!(poly.project(Vec2::X), (1.0, 3.0));
        assert_eq!(poly.project(Vec2::Y), (-1.0, 2.0));
    }

    #[test]
    fn test_place_offsets_local_shape() {
        let local = Polygon::rect(-0.2, 0.2, 0.0, 1.0).build().unwrap();
        let mut world = local.clone();
        world.place(&local, Vec2::new(5.0, 1.0));
        assert!((world.vertices()[0] - Vec2::new(4.8, 2.0)).length() < 1e-6);
        world.place(&local, Vec2::ZERO);
        assert_eq!(world.vertices(), local.vertices());
    }
}
