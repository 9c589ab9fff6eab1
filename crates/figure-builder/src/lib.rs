//! Figure construction for 3D surface comparisons.
//!
//! Turns loaded [`surface_common::SurfaceProperties`] into renderer-ready
//! figure descriptions: band colorscales, surface traces with automatic
//! visual-emphasis selection, fixed-camera scene layouts, and
//! percentage-difference figures. All outputs are plain values serialized
//! as Plotly-compatible JSON.

pub mod camera;
pub mod colorscale;
pub mod comparison;
pub mod diff;
pub mod figure;
pub mod layout;
pub mod trace;

pub use camera::{Camera, Coord3};
pub use comparison::{comparison_figure, emphasis_for};
pub use diff::{difference_figure, difference_grid, percentage_difference, DifferenceSurface};
pub use figure::Figure;
pub use layout::{Annotation, Layout, Scene, SceneAxis};
pub use trace::{Emphasis, SurfaceTrace};
