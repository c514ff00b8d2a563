//! Configuration for a scene generation pass.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::RegionBounds;

/// Parameters of a composition: canvas, base grid densities, and region bounds.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Canvas width in pixels.
    pub canvas_width: f32,
    /// Canvas height in pixels.
    pub canvas_height: f32,
    /// Columns and rows of the coarse grid shapes are carved from.
    pub shape_grid_density: usize,
    /// Columns and rows of the dense grid dots are carved from.
    pub dot_grid_density: usize,
    /// Number of shapes per pass.
    pub shape_count: usize,
    /// Number of dot regions per pass.
    pub dot_region_count: usize,
    /// Index of the shape drawn with the main bounds and a striped fill.
    pub main_shape_index: Option<usize>,
    /// Stripe thickness of the main shape's fill, in pixels.
    pub stripe_thickness: f32,
    /// Dot diameter in pixels.
    pub dot_diameter: f32,
    /// Saturation of solid shape fills, in `[0, 100]`.
    pub solid_saturation: f32,
    /// Brightness of shape fills, in `[0, 100]`.
    pub fill_brightness: f32,
    pub dot_bounds: RegionBounds,
    pub shape_bounds: RegionBounds,
    pub main_shape_bounds: RegionBounds,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500.0,
            canvas_height: 500.0,
            shape_grid_density: 20,
            dot_grid_density: 40,
            shape_count: 3,
            dot_region_count: 1,
            main_shape_index: Some(1),
            stripe_thickness: 20.0,
            dot_diameter: 3.0,
            solid_saturation: 75.0,
            fill_brightness: 100.0,
            dot_bounds: RegionBounds::new(4, 8, 20, 36),
            shape_bounds: RegionBounds::new(4, 8, 4, 8),
            main_shape_bounds: RegionBounds::new(8, 16, 16, 20),
        }
    }
}

impl SceneConfig {
    /// Creates a default configuration over a `width` by `height` canvas.
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Default::default()
        }
    }

    /// Sets the shape and dot grid densities.
    pub fn with_densities(mut self, shape_grid_density: usize, dot_grid_density: usize) -> Self {
        self.shape_grid_density = shape_grid_density;
        self.dot_grid_density = dot_grid_density;
        self
    }

    /// Sets the number of shapes and dot regions drawn per pass.
    pub fn with_counts(mut self, shape_count: usize, dot_region_count: usize) -> Self {
        self.shape_count = shape_count;
        self.dot_region_count = dot_region_count;
        self
    }

    /// Sets which shape, if any, is the main shape.
    pub fn with_main_shape_index(mut self, index: Option<usize>) -> Self {
        self.main_shape_index = index;
        self
    }

    pub fn with_stripe_thickness(mut self, thickness: f32) -> Self {
        self.stripe_thickness = thickness;
        self
    }

    pub fn with_dot_diameter(mut self, diameter: f32) -> Self {
        self.dot_diameter = diameter;
        self
    }

    pub fn with_dot_bounds(mut self, bounds: RegionBounds) -> Self {
        self.dot_bounds = bounds;
        self
    }

    pub fn with_shape_bounds(mut self, bounds: RegionBounds) -> Self {
        self.shape_bounds = bounds;
        self
    }

    pub fn with_main_shape_bounds(mut self, bounds: RegionBounds) -> Self {
        self.main_shape_bounds = bounds;
        self
    }

    /// Bounds used for the shape at `index`.
    pub fn bounds_for_shape(&self, index: usize) -> &RegionBounds {
        if self.is_main_shape(index) {
            &self.main_shape_bounds
        } else {
            &self.shape_bounds
        }
    }

    pub fn is_main_shape(&self, index: usize) -> bool {
        self.main_shape_index == Some(index)
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Region bounds are checked against the grid densities, and shape bounds must
    /// have a minimum of at least 1 on both axes so every shape region is at least
    /// 2x2. A config that passes never fails to sample.
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.canvas_width) || !positive(self.canvas_height) {
            return Err(Error::InvalidConfig(
                "canvas size must be > 0 in both components".into(),
            ));
        }
        if self.shape_grid_density == 0 || self.dot_grid_density == 0 {
            return Err(Error::InvalidConfig("grid densities must be > 0".into()));
        }
        if !positive(self.stripe_thickness) {
            return Err(Error::InvalidConfig("stripe_thickness must be > 0".into()));
        }
        if !positive(self.dot_diameter) {
            return Err(Error::InvalidConfig("dot_diameter must be > 0".into()));
        }
        let percent = 0.0..=100.0;
        if !percent.contains(&self.solid_saturation) || !percent.contains(&self.fill_brightness) {
            return Err(Error::InvalidConfig(
                "saturation and brightness must be within [0, 100]".into(),
            ));
        }
        if let Some(index) = self.main_shape_index {
            if index >= self.shape_count {
                return Err(Error::InvalidConfig(format!(
                    "main_shape_index {index} out of range for {} shapes",
                    self.shape_count
                )));
            }
        }

        let checks = [
            ("dot_bounds", &self.dot_bounds, self.dot_grid_density),
            ("shape_bounds", &self.shape_bounds, self.shape_grid_density),
            (
                "main_shape_bounds",
                &self.main_shape_bounds,
                self.shape_grid_density,
            ),
        ];
        for (name, bounds, density) in checks {
            bounds
                .validate()
                .and_then(|_| bounds.check_fits(density, density))
                .map_err(|e| Error::InvalidConfig(format!("{name}: {e}")))?;
        }

        let shape_checks = [
            ("shape_bounds", &self.shape_bounds),
            ("main_shape_bounds", &self.main_shape_bounds),
        ];
        for (name, bounds) in shape_checks {
            if bounds.min_width < 1 || bounds.min_height < 1 {
                return Err(Error::InvalidConfig(format!(
                    "{name}: min_width and min_height must be >= 1 for quadrant shapes"
                )));
            }
        }

        Ok(())
    }
}
