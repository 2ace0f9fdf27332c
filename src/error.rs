use thiserror::Error;

use crate::lanes::MAX_DIM;

/// Errors raised by the checked constructors and the configuration layer.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// An axis index was outside `0..dim`.
    #[error("axis {axis} is out of range for dimension {dim}")]
    AxisOutOfRange { axis: usize, dim: usize },

    /// The requested dimension does not fit the lane width.
    #[error("unsupported dimension {dim}, expected 1..={}", MAX_DIM)]
    UnsupportedDimension { dim: usize },

    #[error("configured for dimension {configured}, but dimension {requested} was requested")]
    DimensionMismatch { configured: usize, requested: usize },

    /// A bounding box was requested for zero points.
    #[error("cannot bound an empty point set")]
    EmptyPointSet,

    /// The permutation array is not a permutation of `0..dim`.
    #[error("{perm:?} is not a permutation of 0..{dim}")]
    InvalidPermutation { perm: Vec<usize>, dim: usize },

    /// A sign other than +1 or -1.
    #[error("sign {sign} on axis {axis} must be +1 or -1")]
    InvalidSign { axis: usize, sign: i32 },

    /// No signed permutation maps the first point onto the second.
    #[error("no lattice symmetry maps {from} onto {to}")]
    NoSymmetry { from: String, to: String },

    /// A flat coordinate list whose length is not a multiple of the dimension.
    #[error("{len} coordinates do not split into points of dimension {dim}")]
    RaggedCoordinates { len: usize, dim: usize },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, LatticeError>;
