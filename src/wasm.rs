//! JavaScript bindings for the two-dimensional kernel.

pub mod d2;
mod utils;

pub use d2::{BoundingBox2D, Point2D, Transform2D};
#[cfg(target_arch = "wasm32")]
pub use utils::init_threads;
