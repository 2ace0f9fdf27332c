//! # pivot-lattice
//!
//! `pivot-lattice` is the geometry kernel behind a pivot-algorithm Monte Carlo
//! sampler of self-avoiding walks on the integer lattice. It is usable from Rust
//! as well as compiled to WebAssembly (WASM).
//!
//! ## Features
//!
//! - **Batched lanes**: every type is a fixed-width vector of `i32` lanes, and all
//!   operations are lane-wise min/max/select/permute without per-axis branching.
//! - **Bounding boxes**: union and intersection share a single min/max pass.
//! - **Lattice symmetries**: signed axis permutations that apply to points and
//!   boxes, compose, invert, and sample uniformly from any `rand` generator.
//! - **Dimension-generic**: `D` is a const parameter from 1 up to [`MAX_DIM`];
//!   anything larger is rejected at compile time.
//!
//! ## Example
//!
//! See `demos/pivot_walk.rs` for a toy pivot loop built on the kernel.
//!
//! ## Main Interface
//!
//! [`Point`], [`BoundingBox`] and [`Transform`], together with [`Interval`] for
//! per-axis projections.

mod bounds;
mod config;
mod error;
mod interval;
pub mod lanes;
mod point;
mod sampler;
mod transform;
pub mod wasm;

pub use bounds::BoundingBox;
pub use config::LatticeConfig;
pub use config::check_dimension;
pub use error::LatticeError;
pub use error::Result;
pub use interval::Interval;
pub use lanes::MAX_DIM;
pub use point::Point;
pub use sampler::TransformSampler;
pub use sampler::par_sample;
pub use transform::Transform;
