//! Scene camera description.

use serde::{Deserialize, Serialize};

/// UI slider range for camera coordinates.
pub const CAMERA_COORD_MIN: f64 = -3.0;
pub const CAMERA_COORD_MAX: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(CAMERA_COORD_MIN, CAMERA_COORD_MAX),
            y: self.y.clamp(CAMERA_COORD_MIN, CAMERA_COORD_MAX),
            z: self.z.clamp(CAMERA_COORD_MIN, CAMERA_COORD_MAX),
        }
    }
}

/// Viewpoint of a 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Coord3,
    pub center: Coord3,
}

impl Camera {
    /// Initial viewpoint of comparison figures, restored by the UI reset
    /// action.
    pub fn comparison_default() -> Self {
        Self {
            eye: Coord3::new(0.96, -1.12, 0.26),
            center: Coord3::new(0.1, 0.1, 0.0),
        }
    }

    /// Initial viewpoint of difference figures.
    pub fn difference_default() -> Self {
        Self {
            eye: Coord3::new(0.96, -1.12, 0.26),
            center: Coord3::new(0.0, 0.0, 0.0),
        }
    }

    /// A copy with both coordinates clamped to the UI input range.
    pub fn clamped(self) -> Self {
        Self {
            eye: self.eye.clamped(),
            center: self.center.clamped(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::comparison_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_ui_range() {
        let camera = Camera {
            eye: Coord3::new(5.0, -7.0, 0.0),
            center: Coord3::new(0.0, 0.0, 3.5),
        };
        let clamped = camera.clamped();
        assert_eq!(clamped.eye.x, 3.0);
        assert_eq!(clamped.eye.y, -3.0);
        assert_eq!(clamped.center.z, 3.0);
    }

    #[test]
    fn test_defaults() {
        let camera = Camera::default();
        assert_eq!(camera.eye.x, 0.96);
        assert_eq!(camera.center.x, 0.1);
        assert_eq!(Camera::difference_default().center.x, 0.0);
    }
}
