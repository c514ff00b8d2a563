//! Command-line arguments and config loading shared by the executables.
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Parser;
use open_grid::prelude::SceneConfig;

/// Options accepted by the executables.
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(version, about = "Render open_grid compositions to PNG")]
pub struct Args {
    /// RON file overriding fields of the default scene config.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Seed for the random generator; fresh entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of frames to render.
    #[arg(long)]
    pub frames: Option<usize>,
    /// Directory the PNG files are written to.
    #[arg(long = "out", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

impl Args {
    /// Seed from the arguments, or fresh entropy.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Output directory, defaulting to the working directory.
    pub fn out_dir(&self) -> &Path {
        self.out_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }
}

/// Load a [`SceneConfig`] from a RON file; missing fields keep their defaults.
pub fn load_scene_config(path: impl AsRef<Path>) -> anyhow::Result<SceneConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config '{}'", path.display()))?;
    let config: SceneConfig = ron::from_str(&text)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("parsing config '{}'", path.display()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("open-grid").chain(args.iter().copied()))
    }

    #[test]
    fn parses_all_flags() {
        let args = parse(&[
            "--config", "scene.ron", "--seed", "42", "--frames", "3", "--out", "frames",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("scene.ron")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.frames, Some(3));
        assert_eq!(args.out_dir(), Path::new("frames"));
        assert_eq!(args.seed_or_random(), 42);
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--seed", "abc"]).is_err());
        assert!(parse(&["--frames", "-1"]).is_err());
    }

    #[test]
    fn accepts_equals_form() {
        let args = parse(&["--seed=7", "--out=renders"]).unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.out_dir(), Path::new("renders"));
    }

    #[test]
    fn help_flag_reports_display_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn empty_args_use_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, Args::default());
        assert_eq!(args.out_dir(), Path::new("."));
    }

    #[test]
    fn ron_overrides_selected_fields() {
        let config: SceneConfig =
            ron::from_str("(shape_count: 2, main_shape_index: Some(0), stripe_thickness: 10.0)")
                .unwrap();
        assert_eq!(config.shape_count, 2);
        assert_eq!(config.main_shape_index, Some(0));
        assert_eq!(config.stripe_thickness, 10.0);
        assert_eq!(config.dot_grid_density, SceneConfig::default().dot_grid_density);
        assert!(config.validate().is_ok());
    }
}
