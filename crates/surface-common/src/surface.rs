//! Surface descriptors pairing coordinate vectors with elevation grids.

use serde::{Deserialize, Serialize};

use crate::axis::DatasetGroup;
use crate::color::Colorscale;
use crate::error::{VizError, VizResult};
use crate::grid::Grid2d;

/// Unique identifier for a loaded surface, e.g. "25m@15s".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceKey(pub String);

impl SurfaceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SurfaceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SurfaceKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A rectangular elevation grid with its coordinate vectors.
///
/// `x` spans the columns of `z`, `y` the rows. Both coordinate vectors are
/// strictly monotonic (ascending or descending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Grid2d,
}

impl Surface {
    /// Create a surface, validating coordinate/grid consistency.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Grid2d) -> VizResult<Self> {
        if x.len() != z.cols() {
            return Err(VizError::MalformedSurface(format!(
                "x has {} values but grid has {} columns",
                x.len(),
                z.cols()
            )));
        }
        if y.len() != z.rows() {
            return Err(VizError::MalformedSurface(format!(
                "y has {} values but grid has {} rows",
                y.len(),
                z.rows()
            )));
        }
        if !strictly_monotonic(&x) {
            return Err(VizError::MalformedSurface(
                "x coordinates are not strictly monotonic".to_string(),
            ));
        }
        if !strictly_monotonic(&y) {
            return Err(VizError::MalformedSurface(
                "y coordinates are not strictly monotonic".to_string(),
            ));
        }
        Ok(Self { x, y, z })
    }

    /// Maximum elevation, the input to emphasis selection and band counts.
    pub fn max_z(&self) -> f64 {
        self.z.max()
    }

    /// Minimum elevation.
    pub fn min_z(&self) -> f64 {
        self.z.min()
    }

    /// The last-corner data point `(x[last], y[last], z[last][last])`,
    /// where surface-name annotations attach.
    pub fn annotation_point(&self) -> Option<(f64, f64, f64)> {
        let x = *self.x.last()?;
        let y = *self.y.last()?;
        let z = self.z.last_corner()?;
        Some((x, y, z))
    }
}

fn strictly_monotonic(values: &[f64]) -> bool {
    if values.len() < 2 {
        return true;
    }
    values.windows(2).all(|w| w[0] < w[1]) || values.windows(2).all(|w| w[0] > w[1])
}

/// A surface with its render properties, computed once at load and
/// immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceProperties {
    pub key: SurfaceKey,
    /// Human-readable name shown in annotations
    pub name: String,
    pub group: DatasetGroup,
    pub surface: Surface,
    pub colorscale: Colorscale,
    /// Number of discrete color bands, `ceil(max(z) / k)`
    pub n_colors: usize,
}
