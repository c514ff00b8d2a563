use clap::Parser;
use open_grid::prelude::*;
use open_grid_examples::{
    init_tracing, load_scene_config, render_composition_to_png, Args, RenderConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_scene_config(path)?,
        None => SceneConfig::default(),
    };

    // Base grids are built once; every frame is an independent regeneration over them.
    let generator = SceneGenerator::try_new(config)?;

    let seed = args.seed_or_random();
    info!("Seed: {}.", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let out_dir = args.out_dir();
    std::fs::create_dir_all(out_dir)?;

    for frame in 0..args.frames.unwrap_or(1) {
        let composition = generator.generate(&mut rng)?;
        let rc = RenderConfig::for_composition(&composition);
        let path = out_dir.join(format!("open-grid-{seed}-{frame:03}.png"));
        render_composition_to_png(&composition, &rc, &path)?;
    }

    Ok(())
}
