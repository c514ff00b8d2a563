#![forbid(unsafe_code)]
//! open_grid: Grid partitioning and sampling for procedural 2D compositions.
//!
//! Modules:
//! - grid: coordinate grids with closed-interval slicing, rebuilding, and point sampling
//! - sampling: random region carving and quadrant-constrained 4-point shapes
//! - scene: generation passes producing dot layers and masked shapes
//!
//! All randomness goes through an explicit RNG so runs can be reproduced from a seed.
pub mod error;
pub mod grid;
pub mod sampling;
pub mod scene;

/// Convenient re-exports for common types. Import with `use open_grid::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Axis, Error, Result};
    pub use crate::grid::{CoordinateSpace, Grid, GridPoint, Rows, SliceBounds};
    pub use crate::sampling::{
        random_quadrant_shape, sample_region, QuadShape, Quadrant, RegionBounds, RegionSampler,
    };
    pub use crate::scene::{
        Composition, DotLayer, EventSink, Fill, FnSink, Hsb, SceneConfig, SceneEvent,
        SceneGenerator, ShapeLayer, VecSink,
    };
}
