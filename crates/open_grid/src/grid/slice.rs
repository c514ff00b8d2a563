//! Closed-interval index ranges used to carve sub-grids.
use crate::error::{Error, Result};

/// A rectangular range of grid indices, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBounds {
    pub start_row: usize,
    pub stop_row: usize,
    pub start_col: usize,
    pub stop_col: usize,
}

impl SliceBounds {
    pub fn new(start_row: usize, stop_row: usize, start_col: usize, stop_col: usize) -> Self {
        Self {
            start_row,
            stop_row,
            start_col,
            stop_col,
        }
    }

    /// Bounds covering every cell of an `amount_x` by `amount_y` grid.
    ///
    /// Returns `None` when either amount is zero.
    pub fn full(amount_x: usize, amount_y: usize) -> Option<Self> {
        Some(Self::new(0, amount_y.checked_sub(1)?, 0, amount_x.checked_sub(1)?))
    }

    /// Number of rows selected; zero when `stop_row < start_row`.
    pub fn rows(&self) -> usize {
        inclusive_len(self.start_row, self.stop_row)
    }

    /// Number of columns selected; zero when `stop_col < start_col`.
    pub fn cols(&self) -> usize {
        inclusive_len(self.start_col, self.stop_col)
    }

    /// Checks that the bounds are ordered and lie inside an `amount_x` by `amount_y` grid.
    pub fn validate(&self, amount_x: usize, amount_y: usize) -> Result<()> {
        let ordered = self.start_row <= self.stop_row && self.start_col <= self.stop_col;
        let inside = self.stop_row < amount_y && self.stop_col < amount_x;
        if ordered && inside {
            Ok(())
        } else {
            Err(self.out_of_range(amount_x, amount_y))
        }
    }

    pub(crate) fn out_of_range(&self, amount_x: usize, amount_y: usize) -> Error {
        Error::IndexOutOfRange {
            start_row: self.start_row,
            stop_row: self.stop_row,
            start_col: self.start_col,
            stop_col: self.stop_col,
            amount_x,
            amount_y,
        }
    }
}

fn inclusive_len(start: usize, stop: usize) -> usize {
    if stop < start {
        0
    } else {
        stop - start + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_covers_every_index() {
        let b = SliceBounds::full(4, 3).unwrap();
        assert_eq!(b, SliceBounds::new(0, 2, 0, 3));
        assert_eq!((b.rows(), b.cols()), (3, 4));
        assert!(SliceBounds::full(0, 3).is_none());
    }

    #[test]
    fn validate_rejects_inverted_and_overflowing_ranges() {
        assert!(SliceBounds::new(0, 2, 0, 2).validate(3, 3).is_ok());
        assert!(SliceBounds::new(2, 1, 0, 0).validate(3, 3).is_err());
        assert!(SliceBounds::new(0, 0, 2, 1).validate(3, 3).is_err());
        assert!(SliceBounds::new(0, 3, 0, 0).validate(3, 3).is_err());
        assert!(matches!(
            SliceBounds::new(0, 0, 0, 3).validate(3, 3),
            Err(Error::IndexOutOfRange { stop_col: 3, .. })
        ));
    }

    #[test]
    fn inverted_ranges_select_nothing() {
        let b = SliceBounds::new(3, 1, 0, 0);
        assert_eq!((b.rows(), b.cols()), (0, 1));
        let b = SliceBounds::new(0, 0, 5, 2);
        assert_eq!((b.rows(), b.cols()), (1, 0));
        assert_eq!(SliceBounds::new(1, 0, 1, 0).rows(), 0);
    }
}
