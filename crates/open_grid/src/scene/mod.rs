//! Scene generation on top of the grid engine.
//!
//! A pass samples dot regions from a dense grid and mask shapes from a coarse grid, and
//! returns a [`composition::Composition`] for an external renderer to draw.
pub mod composition;
pub mod config;
pub mod events;
pub mod runner;

pub use composition::{Composition, DotLayer, Fill, Hsb, ShapeLayer};
pub use config::SceneConfig;
pub use events::{EventSink, FnSink, SceneEvent, VecSink};
pub use runner::SceneGenerator;
