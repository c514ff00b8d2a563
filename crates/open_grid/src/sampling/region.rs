//! Random rectangular sub-grid sampling.
//!
//! [`sample_region`] picks a random block of grid indices whose size lies within
//! [`RegionBounds`] and rebuilds it as a detached [`Grid`]. Index `0` and the last index
//! of each axis are never selected, so sampled regions keep off the source grid's border.
use rand::Rng as RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Axis, Error, Result};
use crate::grid::{Grid, SliceBounds};
use crate::sampling::random_int;

/// Size constraints for a sampled region, in grid cells beyond the first.
///
/// A region sampled with these bounds spans `min_width + 1 ..= max_width + 1` columns
/// and `min_height + 1 ..= max_height + 1` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionBounds {
    pub min_width: usize,
    pub max_width: usize,
    pub min_height: usize,
    pub max_height: usize,
}

impl RegionBounds {
    pub const fn new(min_width: usize, max_width: usize, min_height: usize, max_height: usize) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Checks that each maximum is at least its minimum.
    pub fn validate(&self) -> Result<()> {
        if self.max_width < self.min_width {
            return Err(Error::InvalidConfig(format!(
                "max_width {} < min_width {}",
                self.max_width, self.min_width
            )));
        }
        if self.max_height < self.min_height {
            return Err(Error::InvalidConfig(format!(
                "max_height {} < min_height {}",
                self.max_height, self.min_height
            )));
        }
        Ok(())
    }

    /// Checks that the minimum region fits an `amount_x` by `amount_y` grid with its margins.
    pub fn check_fits(&self, amount_x: usize, amount_y: usize) -> Result<()> {
        start_range_end(amount_y, self.min_height, Axis::Y)?;
        start_range_end(amount_x, self.min_width, Axis::X)?;
        Ok(())
    }

    /// Draw the closed-interval index block for a grid of the given size.
    ///
    /// Rows are drawn before columns.
    pub fn pick<R: RngCore + ?Sized>(
        &self,
        amount_x: usize,
        amount_y: usize,
        rng: &mut R,
    ) -> Result<SliceBounds> {
        self.validate()?;
        let (start_row, stop_row) = pick_axis(amount_y, self.min_height, self.max_height, Axis::Y, rng)?;
        let (start_col, stop_col) = pick_axis(amount_x, self.min_width, self.max_width, Axis::X, rng)?;
        Ok(SliceBounds::new(start_row, stop_row, start_col, stop_col))
    }
}

/// Exclusive upper end of the start draw `[1, amount - min - 1)`.
///
/// Fails when that range is empty, since the region would then reach the last index.
fn start_range_end(amount: usize, min: usize, axis: Axis) -> Result<usize> {
    amount
        .checked_sub(min.saturating_add(1))
        .filter(|&end| end > 1)
        .ok_or(Error::RegionTooLarge { axis, min, amount })
}

fn pick_axis<R: RngCore + ?Sized>(
    amount: usize,
    min: usize,
    max: usize,
    axis: Axis,
    rng: &mut R,
) -> Result<(usize, usize)> {
    let start = random_int(rng, 1, start_range_end(amount, min, axis)?);
    let min_end = start + min;
    let max_end = start.saturating_add(max).min(amount - 1);
    let end = random_int(rng, min_end, max_end);
    Ok((start, end))
}

/// Carve a random region of `grid` within `bounds` and rebuild it as a detached grid.
pub fn sample_region<R: RngCore + ?Sized>(
    grid: &Grid,
    bounds: &RegionBounds,
    rng: &mut R,
) -> Result<Grid> {
    let block = bounds.pick(grid.amount_x(), grid.amount_y(), rng)?;
    trace!(
        "Region rows {}..={}, cols {}..={} of {}x{} grid.",
        block.start_row,
        block.stop_row,
        block.start_col,
        block.stop_col,
        grid.amount_x(),
        grid.amount_y()
    );
    grid.rebuild_slice(block)
}

/// Region sampler bound to a fixed set of [`RegionBounds`].
#[derive(Debug, Clone)]
pub struct RegionSampler {
    pub bounds: RegionBounds,
}

impl RegionSampler {
    pub fn new(bounds: RegionBounds) -> Self {
        Self { bounds }
    }

    pub fn sample<R: RngCore + ?Sized>(&self, grid: &Grid, rng: &mut R) -> Result<Grid> {
        sample_region(grid, &self.bounds, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn sampled_region_respects_size_bounds() {
        let grid = Grid::new(40, 40, 500.0, 500.0).unwrap();
        let bounds = RegionBounds::new(4, 8, 20, 36);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let region = sample_region(&grid, &bounds, &mut rng).unwrap();
            assert!(region.is_detached());
            assert!((5..=9).contains(&region.amount_x()), "{}", region.amount_x());
            assert!((21..=37).contains(&region.amount_y()), "{}", region.amount_y());
        }
    }

    #[test]
    fn picked_block_never_touches_border() {
        let bounds = RegionBounds::new(2, 6, 3, 9);
        let mut rng = StdRng::seed_from_u64(3);
        for &(ax, ay) in &[(5, 6), (10, 10), (12, 30)] {
            for _ in 0..300 {
                let b = bounds.pick(ax, ay, &mut rng).unwrap();
                assert!(b.start_row >= 1 && b.stop_row <= ay - 2, "{b:?} in {ax}x{ay}");
                assert!(b.start_col >= 1 && b.stop_col <= ax - 2, "{b:?} in {ax}x{ay}");
                assert!(b.rows() > bounds.min_height && b.rows() <= bounds.max_height + 1);
                assert!(b.cols() > bounds.min_width && b.cols() <= bounds.max_width + 1);
            }
        }
    }

    #[test]
    fn region_points_come_from_inner_source_cells() {
        let grid = Grid::new(20, 20, 500.0, 500.0).unwrap();
        let bounds = RegionBounds::new(4, 8, 4, 8);
        let mut rng = StdRng::seed_from_u64(8);
        let inner: Vec<_> = (1..19)
            .flat_map(|r| (1..19).map(move |c| (r, c)))
            .map(|(r, c)| grid.get(r, c).unwrap())
            .collect();
        for _ in 0..100 {
            let region = sample_region(&grid, &bounds, &mut rng).unwrap();
            assert!(region.iter().all(|p| inner.contains(p)));
        }
    }

    #[test]
    fn smallest_fitting_grid_pins_region_to_first_inner_index() {
        let bounds = RegionBounds::new(4, 4, 4, 4);
        let mut rng = StdRng::seed_from_u64(0);
        let b = bounds.pick(7, 7, &mut rng).unwrap();
        assert_eq!(b, SliceBounds::new(1, 5, 1, 5));

        assert!(matches!(
            bounds.pick(6, 7, &mut rng),
            Err(Error::RegionTooLarge { axis: Axis::X, min: 4, amount: 6 })
        ));
    }

    #[test]
    fn min_height_at_grid_size_is_too_large() {
        let grid = Grid::new(20, 20, 500.0, 500.0).unwrap();
        let bounds = RegionBounds::new(4, 8, 20, 36);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sample_region(&grid, &bounds, &mut rng),
            Err(Error::RegionTooLarge { axis: Axis::Y, min: 20, amount: 20 })
        ));
        assert!(bounds.check_fits(20, 20).is_err());
        assert!(bounds.check_fits(40, 40).is_ok());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let grid = Grid::new(20, 20, 500.0, 500.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let sampler = RegionSampler::new(RegionBounds::new(8, 4, 4, 8));
        assert!(matches!(
            sampler.sample(&grid, &mut rng),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn determinism_for_same_seed() {
        let grid = Grid::new(20, 20, 500.0, 500.0).unwrap();
        let sampler = RegionSampler::new(RegionBounds::new(8, 16, 16, 20));
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        assert_eq!(
            sampler.sample(&grid, &mut a).unwrap(),
            sampler.sample(&grid, &mut b).unwrap()
        );
    }
}
