//! Output of a scene generation pass.
//!
//! A [`Composition`] describes what to draw, not how: dot positions, 4-point mask polygons,
//! and the fills to show through them. Rendering is left to the consumer.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::GridPoint;
use crate::sampling::QuadShape;

/// Color in hue/saturation/brightness, hue in degrees `[0, 360]`, the rest in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub const BLACK: Hsb = Hsb::new(0.0, 0.0, 0.0);
    pub const WHITE: Hsb = Hsb::new(0.0, 0.0, 100.0);

    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

/// What shows through a shape's mask.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Fill {
    /// Uniform color over the whole canvas.
    Solid(Hsb),
    /// Horizontal bands `thickness` pixels tall, starting at the top edge and
    /// separated by gaps of the same height.
    Stripes { color: Hsb, thickness: f32 },
}

impl Fill {
    pub fn color(&self) -> Hsb {
        match *self {
            Fill::Solid(color) | Fill::Stripes { color, .. } => color,
        }
    }
}

/// Points of one sampled dot region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DotLayer {
    pub points: Vec<GridPoint>,
    pub diameter: f32,
    pub color: Hsb,
}

/// A fill masked by a 4-point polygon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeLayer {
    pub polygon: QuadShape,
    pub fill: Fill,
    /// Whether this is the scene's main shape.
    pub main: bool,
}

/// Everything a renderer needs to draw one frame, in draw order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Composition {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub background: Hsb,
    /// Drawn first.
    pub dots: Vec<DotLayer>,
    /// Drawn over the dots, in order.
    pub shapes: Vec<ShapeLayer>,
}

impl Composition {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            background: Hsb::WHITE,
            dots: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Total number of dots over all dot layers.
    pub fn dot_count(&self) -> usize {
        self.dots.iter().map(|d| d.points.len()).sum()
    }

    pub fn main_shape(&self) -> Option<&ShapeLayer> {
        self.shapes.iter().find(|s| s.main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_composition_is_blank_on_white() {
        let c = Composition::new(100.0, 50.0);
        assert_eq!(c.background, Hsb::WHITE);
        assert_eq!(c.dot_count(), 0);
        assert!(c.main_shape().is_none());
    }

    #[test]
    fn dot_count_sums_layers() {
        let mut c = Composition::new(10.0, 10.0);
        for n in [3, 4] {
            c.dots.push(DotLayer {
                points: vec![GridPoint::ORIGIN; n],
                diameter: 1.0,
                color: Hsb::BLACK,
            });
        }
        assert_eq!(c.dot_count(), 7);
    }

    #[test]
    fn fill_color_reads_either_variant() {
        let red = Hsb::new(0.0, 100.0, 100.0);
        assert_eq!(Fill::Solid(red).color(), red);
        assert_eq!(
            Fill::Stripes {
                color: red,
                thickness: 2.0
            }
            .color(),
            red
        );
    }
}
