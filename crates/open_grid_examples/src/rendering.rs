//! Reference raster renderer for [`Composition`]s, and tracing setup for the executables.
use std::path::Path;

use image::{Rgb, RgbImage};
use open_grid::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Output image settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels; the canvas is scaled to fit.
    pub image_size: (u32, u32),
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self { image_size }
    }

    /// One image pixel per canvas unit.
    pub fn for_composition(c: &Composition) -> Self {
        Self::new((c.canvas_width.round() as u32, c.canvas_height.round() as u32))
    }
}

/// Convert hue/saturation/brightness to 8-bit RGB.
pub fn hsb_to_rgb(color: Hsb) -> [u8; 3] {
    let s = (color.saturation / 100.0).clamp(0.0, 1.0);
    let v = (color.brightness / 100.0).clamp(0.0, 1.0);
    let h = color.hue.rem_euclid(360.0) / 60.0;
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b)]
}

/// Whether `fill` paints canvas row `y` of a canvas `canvas_height` tall.
///
/// Stripes cover `[2 i t, 2 i t + t)` for `i` in `0..floor(canvas_height / t)`.
pub fn fill_covers(fill: &Fill, y: f32, canvas_height: f32) -> bool {
    match *fill {
        Fill::Solid(_) => true,
        Fill::Stripes { thickness, .. } => {
            if thickness <= 0.0 || y < 0.0 {
                return false;
            }
            let band = (y / thickness).floor() as u64;
            let stripes = (canvas_height / thickness).floor() as u64;
            band % 2 == 0 && band / 2 < stripes
        }
    }
}

/// Even-odd point-in-polygon test.
pub fn polygon_contains(polygon: &[GridPoint], x: f32, y: f32) -> bool {
    let mut inside = false;
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + n - 1) % n];
        if (a.y > y) != (b.y > y) {
            let cross_x = (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x;
            if x < cross_x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Rasterize a composition: background, then dots, then each masked shape in order.
pub fn render_composition(c: &Composition, rc: &RenderConfig) -> RgbImage {
    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(hsb_to_rgb(c.background)));
    if w == 0 || h == 0 || c.canvas_width <= 0.0 || c.canvas_height <= 0.0 {
        return img;
    }

    let sx = c.canvas_width / w as f32;
    let sy = c.canvas_height / h as f32;
    let to_canvas = |px: u32, py: u32| ((px as f32 + 0.5) * sx, (py as f32 + 0.5) * sy);
    let to_pixel_range = |lo: f32, hi: f32, scale: f32, max: u32| {
        let start = (lo / scale).floor().max(0.0) as u32;
        let end = ((hi / scale).ceil().max(0.0) as u32).min(max);
        start..end
    };

    for layer in &c.dots {
        let color = Rgb(hsb_to_rgb(layer.color));
        let r = layer.diameter * 0.5;
        for p in &layer.points {
            for py in to_pixel_range(p.y - r, p.y + r, sy, h) {
                for px in to_pixel_range(p.x - r, p.x + r, sx, w) {
                    let (x, y) = to_canvas(px, py);
                    let (dx, dy) = (x - p.x, y - p.y);
                    if dx * dx + dy * dy <= r * r {
                        img.put_pixel(px, py, color);
                    }
                }
            }
        }
    }

    for shape in &c.shapes {
        let color = Rgb(hsb_to_rgb(shape.fill.color()));
        let xs = shape.polygon.iter().map(|p| p.x);
        let ys = shape.polygon.iter().map(|p| p.y);
        let (min_x, max_x) = xs.fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let (min_y, max_y) = ys.fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));

        for py in to_pixel_range(min_y, max_y, sy, h) {
            for px in to_pixel_range(min_x, max_x, sx, w) {
                let (x, y) = to_canvas(px, py);
                if fill_covers(&shape.fill, y, c.canvas_height)
                    && polygon_contains(&shape.polygon, x, y)
                {
                    img.put_pixel(px, py, color);
                }
            }
        }
    }

    img
}

/// Render and write a PNG to `path`.
pub fn render_composition_to_png(
    c: &Composition,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let img = render_composition(c, rc);
    img.save(path)?;
    info!(
        "Wrote {}x{} image to '{}'.",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [GridPoint; 4] {
        [
            GridPoint::new(2.0, 2.0),
            GridPoint::new(8.0, 2.0),
            GridPoint::new(8.0, 8.0),
            GridPoint::new(2.0, 8.0),
        ]
    }

    #[test]
    fn hsb_primaries_convert() {
        assert_eq!(hsb_to_rgb(Hsb::WHITE), [255, 255, 255]);
        assert_eq!(hsb_to_rgb(Hsb::BLACK), [0, 0, 0]);
        assert_eq!(hsb_to_rgb(Hsb::new(0.0, 100.0, 100.0)), [255, 0, 0]);
        assert_eq!(hsb_to_rgb(Hsb::new(120.0, 100.0, 100.0)), [0, 255, 0]);
        assert_eq!(hsb_to_rgb(Hsb::new(240.0, 100.0, 100.0)), [0, 0, 255]);
        assert_eq!(hsb_to_rgb(Hsb::new(360.0, 100.0, 100.0)), [255, 0, 0]);
    }

    #[test]
    fn stripes_alternate_bands() {
        let fill = Fill::Stripes {
            color: Hsb::BLACK,
            thickness: 20.0,
        };
        assert!(fill_covers(&fill, 0.0, 500.0));
        assert!(fill_covers(&fill, 19.9, 500.0));
        assert!(!fill_covers(&fill, 20.0, 500.0));
        assert!(fill_covers(&fill, 45.0, 500.0));
        assert!(fill_covers(&Fill::Solid(Hsb::BLACK), 30.0, 500.0));
    }

    #[test]
    fn polygon_contains_inside_points_only() {
        let sq = square();
        assert!(polygon_contains(&sq, 5.0, 5.0));
        assert!(!polygon_contains(&sq, 1.0, 5.0));
        assert!(!polygon_contains(&sq, 5.0, 9.0));
    }

    #[test]
    fn render_paints_shape_over_background() {
        let mut c = Composition::new(10.0, 10.0);
        c.shapes.push(ShapeLayer {
            polygon: square(),
            fill: Fill::Solid(Hsb::new(0.0, 100.0, 100.0)),
            main: false,
        });
        let img = render_composition(&c, &RenderConfig::for_composition(&c));
        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn render_draws_dots() {
        let mut c = Composition::new(10.0, 10.0);
        c.dots.push(DotLayer {
            points: vec![GridPoint::new(5.0, 5.0)],
            diameter: 3.0,
            color: Hsb::BLACK,
        });
        let img = render_composition(&c, &RenderConfig::for_composition(&c));
        assert_eq!(img.get_pixel(4, 4).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(9, 9).0, [255, 255, 255]);
    }
}
