use clap::Parser;
use open_grid::prelude::*;
use open_grid_examples::{init_tracing, render_composition_to_png, Args, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or(7));

    let (width, height) = (500.0, 500.0);
    let grid = Grid::new(20, 20, width, height)?;
    let bounds = RegionBounds::new(6, 12, 6, 12);

    // Each shape: carve a region, then pick one vertex per quadrant of it.
    let mut composition = Composition::new(width, height);
    for i in 0..6 {
        let region = sample_region(&grid, &bounds, &mut rng)?;
        let polygon = random_quadrant_shape(&region, &mut rng)?;
        composition.shapes.push(ShapeLayer {
            polygon,
            fill: Fill::Solid(Hsb::new(i as f32 * 60.0, 60.0, 95.0)),
            main: false,
        });
        composition.dots.push(DotLayer {
            points: polygon.to_vec(),
            diameter: 8.0,
            color: Hsb::BLACK,
        });
    }

    let rc = RenderConfig::new((1000, 1000));
    let out = args.out_dir().join("grid-quadrant-shapes.png");
    render_composition_to_png(&composition, &rc, out)?;

    Ok(())
}
