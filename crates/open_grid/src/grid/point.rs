//! Canvas-space coordinate value held by every grid cell.
use glam::Vec2;
use mint::Point2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable 2D coordinate of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPoint {
    pub x: f32,
    pub y: f32,
}

impl GridPoint {
    /// Placeholder coordinate used by detached grids before their cells are replaced.
    pub const ORIGIN: GridPoint = GridPoint { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for Vec2 {
    fn from(p: GridPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for GridPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<GridPoint> for Point2<f32> {
    fn from(p: GridPoint) -> Self {
        Point2 { x: p.x, y: p.y }
    }
}

impl From<Point2<f32>> for GridPoint {
    fn from(p: Point2<f32>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<(f32, f32)> for GridPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
