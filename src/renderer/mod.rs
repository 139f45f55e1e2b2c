//! Rendering module
//!
//! CPU-side tessellation only: a frame is a flat triangle list plus HUD text,
//! left for whatever backend presents it.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, build_frame};
pub use vertex::Vertex;
