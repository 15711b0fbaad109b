//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Textured, tinted 2D vertex in world coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4], uv: [f32; 2]) -> Self {
        Self {
            position: [x, y],
            color,
            uv,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Byte offsets of (position, color, uv) within a vertex
    pub const OFFSETS: [usize; 3] = [
        0,
        std::mem::size_of::<[f32; 2]>(),
        std::mem::size_of::<[f32; 2]>() + std::mem::size_of::<[f32; 4]>(),
    ];
}

/// Raw bytes of a vertex slice, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Named colors used by the built-in level
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TRANSPARENT: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
    pub const CORNFLOWER_BLUE: [f32; 4] = [100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0, 1.0];
    pub const CRIMSON: [f32; 4] = [220.0 / 255.0, 20.0 / 255.0, 60.0 / 255.0, 1.0];
    pub const CORAL: [f32; 4] = [1.0, 127.0 / 255.0, 80.0 / 255.0, 1.0];
    pub const BURLY_WOOD: [f32; 4] = [222.0 / 255.0, 184.0 / 255.0, 135.0 / 255.0, 1.0];
    pub const PEACH_PUFF: [f32; 4] = [1.0, 218.0 / 255.0, 185.0 / 255.0, 1.0];
    pub const CHOCOLATE: [f32; 4] = [210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0, 1.0];
    pub const GOLD: [f32; 4] = [1.0, 215.0 / 255.0, 0.0, 1.0]; // Coins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(Vertex::STRIDE, 32);
        assert_eq!(Vertex::OFFSETS, [0, 8, 24]);
    }

    #[test]
    fn test_as_bytes_matches_stride() {
        let verts = [
            Vertex::new(0.0, 0.0, colors::WHITE, [0.0, 0.0]),
            Vertex::new(1.0, 2.0, colors::GOLD, [1.0, 1.0]),
        ];
        let bytes = as_bytes(&verts);
        assert_eq!(bytes.len(), 2 * Vertex::STRIDE);
        let back: &[Vertex] = bytemuck::cast_slice(bytes);
        assert_eq!(back[1].position, [1.0, 2.0]);
    }
}
