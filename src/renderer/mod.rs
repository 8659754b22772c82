//! Backend-agnostic rendering
//!
//! Turns game state into a draw list; submitting it to a GPU or window is up to
//! the platform layer.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawList, SpriteInstance, TextLabel, build_scene};
pub use vertex::Vertex;
