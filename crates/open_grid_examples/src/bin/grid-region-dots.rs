use clap::Parser;
use open_grid::prelude::*;
use open_grid_examples::{init_tracing, render_composition_to_png, Args, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or(2025));

    // Dense dot grid with a handful of narrow, tall regions carved from it.
    let (width, height) = (500.0, 500.0);
    let grid = Grid::new(40, 40, width, height)?;
    let sampler = RegionSampler::new(RegionBounds::new(4, 8, 20, 36));

    let mut composition = Composition::new(width, height);
    for hue in [0.0, 90.0, 180.0, 270.0] {
        let region = sampler.sample(&grid, &mut rng)?;
        composition.dots.push(DotLayer {
            points: region.points().to_vec(),
            diameter: 4.0,
            color: Hsb::new(hue, 80.0, 70.0),
        });
    }

    // The full grid in light grey underneath, for reference.
    let mut all = Vec::with_capacity(grid.len());
    grid.for_each_point(|x, y| all.push(GridPoint::new(x, y)));
    composition.dots.insert(
        0,
        DotLayer {
            points: all,
            diameter: 2.0,
            color: Hsb::new(0.0, 0.0, 80.0),
        },
    );

    let rc = RenderConfig::new((1000, 1000));
    let out = args.out_dir().join("grid-region-dots.png");
    render_composition_to_png(&composition, &rc, out)?;

    Ok(())
}
