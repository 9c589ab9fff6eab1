//! Common types shared across the marine surface visualization crates.

pub mod axis;
pub mod color;
pub mod error;
pub mod grid;
pub mod palette;
pub mod surface;

pub use axis::{Axis, AxisSet, DatasetGroup, YAxisKind, ZIndexKind};
pub use color::{ColorBand, ColorStop, Colorscale};
pub use error::{VizError, VizResult};
pub use grid::Grid2d;
pub use palette::{palette_colors, palette_names};
pub use surface::{Surface, SurfaceKey, SurfaceProperties};
