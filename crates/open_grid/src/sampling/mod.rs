//! Random sampling over grids.
//!
//! This module holds the random draw helpers shared by the grid and the two samplers:
//! - [`region`]: carve a randomly sized and positioned sub-grid within size bounds.
//! - [`quadrant`]: split a grid into quadrants and draw one point per quadrant.
//!
//! Every entry point takes the RNG explicitly so callers can seed it.
use rand::Rng as RngCore;

pub mod quadrant;
pub mod region;

pub use quadrant::{random_quadrant_shape, QuadShape, Quadrant};
pub use region::{sample_region, RegionBounds, RegionSampler};

/// Uniform index in `[0, len)`.
///
/// `len` must be non-zero.
#[inline]
pub fn random_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "len must be > 0");
    ((rng.next_u64() as u128 * len as u128) >> 64) as usize
}

/// Uniform integer in the half-open range `[min, max)`, or `min` when the range is empty.
#[inline]
pub fn random_int<R: RngCore + ?Sized>(rng: &mut R, min: usize, max: usize) -> usize {
    if max <= min {
        return min;
    }
    min + random_index(rng, max - min)
}
