#![forbid(unsafe_code)]

mod args;
mod rendering;

pub use args::{load_scene_config, Args};
pub use rendering::{
    fill_covers, hsb_to_rgb, init_tracing, polygon_contains, render_composition,
    render_composition_to_png, RenderConfig,
};
