//! Scene generation: carve dot regions and mask shapes from two long-lived base grids.
use rand::Rng as RngCore;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::grid::Grid;
use crate::sampling::{random_int, random_quadrant_shape, sample_region};
use crate::scene::composition::{Composition, DotLayer, Fill, Hsb, ShapeLayer};
use crate::scene::config::SceneConfig;
use crate::scene::events::{EventSink, SceneEvent};

/// Exclusive upper end of the hue draw.
const HUE_RANGE_END: usize = 361;

/// Holds the base grids and runs generation passes over them.
///
/// The base grids are only read during a pass, so one generator serves any number of passes.
#[derive(Debug, Clone)]
pub struct SceneGenerator {
    config: SceneConfig,
    dot_grid: Grid,
    shape_grid: Grid,
}

impl SceneGenerator {
    /// Validates `config` and builds the dense dot grid and the coarse shape grid.
    pub fn try_new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let dot_grid = Grid::new(
            config.dot_grid_density,
            config.dot_grid_density,
            config.canvas_width,
            config.canvas_height,
        )?;
        let shape_grid = Grid::new(
            config.shape_grid_density,
            config.shape_grid_density,
            config.canvas_width,
            config.canvas_height,
        )?;
        Ok(Self {
            config,
            dot_grid,
            shape_grid,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn dot_grid(&self) -> &Grid {
        &self.dot_grid
    }

    pub fn shape_grid(&self) -> &Grid {
        &self.shape_grid
    }

    /// Runs one generation pass.
    pub fn generate<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<Composition> {
        self.generate_with_events(rng, &mut ())
    }

    /// Runs one generation pass, reporting each step to `sink`.
    pub fn generate_with_events<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<Composition> {
        let config = &self.config;
        info!(
            "Generating scene | dot regions: {} | shapes: {}.",
            config.dot_region_count, config.shape_count
        );
        if config.dot_region_count == 0 && config.shape_count == 0 {
            warn!("Scene has no dot regions and no shapes.");
        }
        sink.send(SceneEvent::PassStarted {
            dot_region_count: config.dot_region_count,
            shape_count: config.shape_count,
        });

        let mut composition = Composition::new(config.canvas_width, config.canvas_height);

        for index in 0..config.dot_region_count {
            let region = sample_region(&self.dot_grid, &config.dot_bounds, rng)?;
            let region_size = (region.amount_x(), region.amount_y());
            debug!(
                "Dot region {}: {}x{} cells.",
                index, region_size.0, region_size.1
            );
            sink.send(SceneEvent::DotsPlaced {
                index,
                region_size,
                count: region.len(),
            });
            composition.dots.push(DotLayer {
                points: region.points().to_vec(),
                diameter: config.dot_diameter,
                color: Hsb::BLACK,
            });
        }

        for index in 0..config.shape_count {
            let main = config.is_main_shape(index);
            let region = sample_region(&self.shape_grid, config.bounds_for_shape(index), rng)?;
            let region_size = (region.amount_x(), region.amount_y());
            let fill = self.random_fill(main, rng);
            let polygon = random_quadrant_shape(&region, rng)?;
            debug!(
                "Shape {}{}: {}x{} cells, fill {:?}.",
                index,
                if main { " (main)" } else { "" },
                region_size.0,
                region_size.1,
                fill
            );
            sink.send(SceneEvent::ShapePlaced {
                index,
                main,
                region_size,
                polygon,
                fill,
            });
            composition.shapes.push(ShapeLayer {
                polygon,
                fill,
                main,
            });
        }

        sink.send(SceneEvent::PassFinished {
            dot_count: composition.dot_count(),
            shape_count: composition.shapes.len(),
        });
        Ok(composition)
    }

    fn random_fill<R: RngCore + ?Sized>(&self, main: bool, rng: &mut R) -> Fill {
        let hue = random_int(rng, 0, HUE_RANGE_END) as f32;
        if main {
            Fill::Stripes {
                color: Hsb::new(hue, 100.0, self.config.fill_brightness),
                thickness: self.config.stripe_thickness,
            }
        } else {
            Fill::Solid(Hsb::new(
                hue,
                self.config.solid_saturation,
                self.config.fill_brightness,
            ))
        }
    }
}
