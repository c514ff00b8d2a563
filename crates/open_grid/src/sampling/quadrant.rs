//! Four-point polygons drawn from grid quadrants.
use rand::Rng as RngCore;

use crate::error::Result;
use crate::grid::{Grid, GridPoint, SliceBounds};

/// Polygon vertices in traversal order: top-left, top-right, bottom-right, bottom-left.
pub type QuadShape = [GridPoint; 4];

/// One of the four index regions produced by splitting a grid at its midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Quadrant {
    /// Quadrants in polygon traversal order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
    ];

    /// Index block of this quadrant for an `amount_x` by `amount_y` grid.
    ///
    /// With `mid = amount / 2`, the low half is `[0, mid - 1]` and the high half
    /// `[mid, amount - 1]` on each axis. Grids smaller than 2x2 have an empty
    /// half and fail with `IndexOutOfRange`, reporting that half as `1..=0`.
    pub fn bounds(self, amount_x: usize, amount_y: usize) -> Result<SliceBounds> {
        let (start_row, stop_row) = match self {
            Quadrant::TopLeft | Quadrant::TopRight => low_half(amount_y),
            Quadrant::BottomRight | Quadrant::BottomLeft => high_half(amount_y),
        };
        let (start_col, stop_col) = match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => low_half(amount_x),
            Quadrant::TopRight | Quadrant::BottomRight => high_half(amount_x),
        };

        let bounds = SliceBounds::new(start_row, stop_row, start_col, stop_col);
        bounds.validate(amount_x, amount_y)?;
        Ok(bounds)
    }
}

const EMPTY_HALF: (usize, usize) = (1, 0);

fn low_half(amount: usize) -> (usize, usize) {
    (amount / 2)
        .checked_sub(1)
        .map_or(EMPTY_HALF, |stop| (0, stop))
}

fn high_half(amount: usize) -> (usize, usize) {
    amount
        .checked_sub(1)
        .map_or(EMPTY_HALF, |last| (amount / 2, last))
}

/// Draw one point from each quadrant of `grid`, returned in traversal order.
///
/// Each point is confined to its own quadrant, so the resulting polygon is simple.
pub fn random_quadrant_shape<R: RngCore + ?Sized>(grid: &Grid, rng: &mut R) -> Result<QuadShape> {
    let mut shape = [GridPoint::ORIGIN; 4];
    for (vertex, quadrant) in shape.iter_mut().zip(Quadrant::ALL) {
        let bounds = quadrant.bounds(grid.amount_x(), grid.amount_y())?;
        *vertex = grid.rebuild_slice(bounds)?.random_point(rng)?;
    }
    Ok(shape)
}
