//! Triangle generation for convex polygons

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::geometry::Polygon;
use crate::sim::shape::Renderable;
use crate::sim::state::GameState;

/// Triangles sharing one texture (or none)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub texture: Option<String>,
    pub vertices: Vec<Vertex>,
}

/// Fan-triangulate a convex polygon from its first vertex
///
/// Untextured polygons get UV (0,0) everywhere.
pub fn polygon_fan(polygon: &Polygon, color: [f32; 4]) -> Vec<Vertex> {
    let verts = polygon.vertices();
    if verts.len() < 3 {
        return Vec::new();
    }

    let uv_at = |i: usize| -> [f32; 2] {
        polygon
            .tex_coords()
            .map(|uv| uv[i].to_array())
            .unwrap_or([0.0, 0.0])
    };
    let vertex = |i: usize| {
        let p: Vec2 = verts[i];
        Vertex::new(p.x, p.y, color, uv_at(i))
    };

    let mut out = Vec::with_capacity((verts.len() - 2) * 3);
    for i in 1..verts.len() - 1 {
        out.push(vertex(0));
        out.push(vertex(i));
        out.push(vertex(i + 1));
    }
    out
}

/// Append a renderable to the batch for its texture
fn push(batches: &mut Vec<Batch>, item: &dyn Renderable) {
    let Some(polygon) = item.outline() else {
        return;
    };
    let tris = polygon_fan(polygon, item.tint());

    match batches.iter_mut().find(|b| b.texture == polygon.texture) {
        Some(batch) => batch.vertices.extend(tris),
        None => batches.push(Batch {
            texture: polygon.texture.clone(),
            vertices: tris,
        }),
    }
}

/// Everything visible this frame: shapes, then collectibles, then the actor
///
/// Batches appear in first-use order so draw order is stable.
pub fn scene(state: &GameState) -> Vec<Batch> {
    let mut batches = Vec::new();
    for shape in &state.world.shapes {
        push(&mut batches, shape);
    }
    for collectible in &state.world.collectibles {
        push(&mut batches, collectible);
    }
    push(&mut batches, &state.actor);
    batches
}
