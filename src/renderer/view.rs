//! Follow camera

use glam::Vec2;

/// Visible world rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl ViewWindow {
    /// Window `height` tall and `height * aspect` wide, centered on `focus.x`
    /// and clamped to the field [0, field_width]
    ///
    /// When the window is wider than the field it is pinned to the left edge.
    pub fn follow(focus: Vec2, field_width: f32, height: f32, aspect: f32) -> Self {
        let width = height * aspect;
        let max_left = (field_width - width).max(0.0);
        let left = (focus.x - width * 0.5).clamp(0.0, max_left);
        Self {
            left,
            right: left + width,
            bottom: 0.0,
            top: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Column-major orthographic projection onto clip space
    pub fn projection(&self) -> [[f32; 4]; 4] {
        glam::Mat4::orthographic_rh(self.left, self.right, self.bottom, self.top, -1.0, 1.0)
            .to_cols_array_2d()
    }
}
