//! Coordinate grids that can be sliced, rebuilt, and sampled.
//!
//! A [`Grid`] holds `amount_y` rows of `amount_x` [`GridPoint`]s in row-major order.
//! Grids built over a canvas place their cells at cell centres; grids rebuilt from a
//! slice are [`CoordinateSpace::Detached`] and keep the coordinates inherited from
//! their origin grid without rescaling them.
use rand::Rng as RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::random_index;

pub mod point;
pub mod slice;

pub use point::GridPoint;
pub use slice::SliceBounds;

/// Rows of points as returned by [`Grid::slice`] and accepted by [`Grid::replace_cells`].
pub type Rows = Vec<Vec<GridPoint>>;

/// Where a grid's coordinates come from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateSpace {
    /// Cells were laid out over a `width` by `height` canvas.
    Canvas { width: f32, height: f32 },
    /// Cells carry coordinates inherited from another grid.
    Detached,
}

/// A 2D arrangement of [`GridPoint`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    amount_x: usize,
    amount_y: usize,
    space: CoordinateSpace,
    cells: Vec<GridPoint>,
}

impl Grid {
    /// Build an `amount_x` by `amount_y` grid spread over `[0, canvas_width] x [0, canvas_height]`.
    ///
    /// Cell `(row, col)` sits at `((col + 0.5) * w / amount_x, (row + 0.5) * h / amount_y)`.
    /// A `0 x 0` canvas yields a detached placeholder grid with every cell at the origin,
    /// meant to be filled through [`Grid::replace_cells`].
    pub fn new(
        amount_x: usize,
        amount_y: usize,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Result<Self> {
        if amount_x < 1 || amount_y < 1 {
            return Err(Error::InvalidDimension(format!(
                "grid needs at least one column and row, got {amount_x}x{amount_y}"
            )));
        }
        let valid_extent = |v: f32| v.is_finite() && v >= 0.0;
        if !valid_extent(canvas_width) || !valid_extent(canvas_height) {
            return Err(Error::InvalidDimension(format!(
                "canvas extent must be finite and >= 0, got {canvas_width}x{canvas_height}"
            )));
        }

        if canvas_width == 0.0 && canvas_height == 0.0 {
            return Ok(Self {
                amount_x,
                amount_y,
                space: CoordinateSpace::Detached,
                cells: vec![GridPoint::ORIGIN; amount_x * amount_y],
            });
        }

        let cell_w = canvas_width / amount_x as f32;
        let cell_h = canvas_height / amount_y as f32;
        let mut cells = Vec::with_capacity(amount_x * amount_y);
        for row in 0..amount_y {
            let y = (row as f32 + 0.5) * cell_h;
            for col in 0..amount_x {
                cells.push(GridPoint::new((col as f32 + 0.5) * cell_w, y));
            }
        }

        Ok(Self {
            amount_x,
            amount_y,
            space: CoordinateSpace::Canvas {
                width: canvas_width,
                height: canvas_height,
            },
            cells,
        })
    }

    /// Placeholder grid detached from any canvas.
    pub fn detached(amount_x: usize, amount_y: usize) -> Result<Self> {
        Self::new(amount_x, amount_y, 0.0, 0.0)
    }

    /// Rebuild a standalone detached grid from sliced rows.
    pub fn from_rows(rows: Rows) -> Result<Self> {
        let mut grid = Self::detached(1, 1)?;
        grid.replace_cells(rows)?;
        Ok(grid)
    }

    pub fn amount_x(&self) -> usize {
        self.amount_x
    }

    pub fn amount_y(&self) -> usize {
        self.amount_y
    }

    pub fn space(&self) -> CoordinateSpace {
        self.space
    }

    pub fn is_detached(&self) -> bool {
        matches!(self.space, CoordinateSpace::Detached)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Point at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<GridPoint> {
        if row >= self.amount_y || col >= self.amount_x {
            return None;
        }
        self.cells.get(row * self.amount_x + col).copied()
    }

    /// All points in row-major order.
    pub fn points(&self) -> &[GridPoint] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridPoint> + '_ {
        self.cells.iter()
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[GridPoint]> + '_ {
        self.cells.chunks_exact(self.amount_x.max(1))
    }

    /// Copy of the cell storage as nested rows.
    pub fn to_rows(&self) -> Rows {
        self.rows().map(<[GridPoint]>::to_vec).collect()
    }

    /// Copy the closed-interval block `rows start_row..=stop_row`, `cols start_col..=stop_col`.
    pub fn slice(
        &self,
        start_row: usize,
        stop_row: usize,
        start_col: usize,
        stop_col: usize,
    ) -> Result<Rows> {
        self.slice_bounds(SliceBounds::new(start_row, stop_row, start_col, stop_col))
    }

    /// [`Grid::slice`] taking a [`SliceBounds`].
    pub fn slice_bounds(&self, bounds: SliceBounds) -> Result<Rows> {
        bounds.validate(self.amount_x, self.amount_y)?;
        let rows = self
            .rows()
            .skip(bounds.start_row)
            .take(bounds.rows())
            .map(|row| row[bounds.start_col..=bounds.stop_col].to_vec())
            .collect();
        Ok(rows)
    }

    /// Slice and rebuild the block as a standalone detached grid.
    pub fn rebuild_slice(&self, bounds: SliceBounds) -> Result<Grid> {
        Self::from_rows(self.slice_bounds(bounds)?)
    }

    /// Replace the cell storage and recompute `amount_x`/`amount_y` from its shape.
    ///
    /// The grid becomes [`CoordinateSpace::Detached`]. On error it is left unchanged.
    pub fn replace_cells(&mut self, rows: Rows) -> Result<()> {
        let amount_y = rows.len();
        let amount_x = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => return Err(Error::InvalidShape("first row is empty".into())),
            None => return Err(Error::InvalidShape("no rows".into())),
        };
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != amount_x) {
            return Err(Error::InvalidShape(format!(
                "row {i} has {} cells, expected {amount_x}",
                row.len()
            )));
        }

        self.cells = rows.into_iter().flatten().collect();
        self.amount_x = amount_x;
        self.amount_y = amount_y;
        self.space = CoordinateSpace::Detached;
        Ok(())
    }

    /// Pick one existing point, uniformly over the cells.
    pub fn random_point<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<GridPoint> {
        if self.cells.is_empty() {
            return Err(Error::EmptyGrid);
        }
        Ok(self.cells[random_index(rng, self.cells.len())])
    }

    /// Call `visitor(x, y)` once per cell in row-major order.
    pub fn for_each_point<F: FnMut(f32, f32)>(&self, mut visitor: F) {
        for p in &self.cells {
            visitor(p.x, p.y);
        }
    }
}
