//! Cubic Hermite easing curves.
//!
//! An easing curve maps normalized time `t ∈ [0, 1]` to interpolation
//! progress. A cubic Hermite curve is pinned down by its start position
//! and velocity and its end position and velocity, which makes it a
//! compact way to describe and share curve shapes.
//!
//! The crate ships a table of named presets, evaluates them and plots
//! them for visual reference.
//!
//! # Examples
//! ```
//! use hermite_easing::{default_presets, evaluate_hermite, SampleGrid};
//!
//! let grid = SampleGrid::unit();
//! let bump = default_presets().get("bump").copied().unwrap();
//! let ys = evaluate_hermite(&grid, &bump);
//!
//! assert_eq!(ys.first(), Some(&0.0));
//! assert_eq!(ys.last(), Some(&0.0));
//! ```
//!
//! Rendering goes through a [`PlotBackend`]. [`SvgBackend`] writes an
//! SVG document; implement the trait to hand curves to anything else.
//!
//! ## Cargo Features
#![doc = document_features::document_features!()]

#[macro_use]
mod basis_macros;
pub mod basis;

mod error;
mod grid;
mod hermite;
mod preset;
mod render;
#[cfg(feature = "svg")]
mod svg;

pub use error::{EasingError, Result};
pub use grid::{SampleGrid, DEFAULT_SAMPLES};
pub use hermite::{evaluate_hermite, evaluate_hermite_into, HermiteParams};
pub use preset::{default_presets, PresetTable, DEFAULT_PRESETS};
pub use render::{
    build_figure, render, render_default, render_with, Color, Curve, Figure,
    PlotBackend, RecordingBackend, Style, DARK_PALETTE,
};
#[cfg(feature = "svg")]
pub use svg::SvgBackend;
