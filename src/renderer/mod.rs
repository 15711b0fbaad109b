//! Render export
//!
//! CPU-side only: triangulated, tinted vertices grouped by texture, plus the
//! follow-camera window. Uploading and drawing is the host's job.

pub mod shapes;
pub mod vertex;
pub mod view;

pub use shapes::{Batch, polygon_fan, scene};
pub use vertex::Vertex;
pub use view::ViewWindow;
