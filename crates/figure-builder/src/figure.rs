//! Complete figure descriptions and their functional display patches.

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::layout::Layout;
use crate::trace::SurfaceTrace;

/// A renderer-ready figure: traces plus layout.
///
/// Figures are values; display adjustments (camera moves, annotation
/// nudges) produce new figures rather than mutating shared state, so
/// interleaved UI updates cannot race each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<SurfaceTrace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<SurfaceTrace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to human-readable JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// A copy viewing every scene from `camera`, clamped to the UI range.
    pub fn with_camera(&self, camera: Camera) -> Self {
        let camera = camera.clamped();
        let mut out = self.clone();
        for scene in out.layout.scenes_mut() {
            scene.camera = camera;
        }
        out
    }

    /// A copy with one annotation of the primary scene shifted in screen
    /// space. Out-of-range indices return the figure unchanged.
    pub fn with_annotation_shift(&self, index: usize, dx: f64, dy: f64) -> Self {
        let mut out = self.clone();
        if let Some(annotation) = out.layout.scene.annotations.get_mut(index) {
            *annotation = annotation.shifted(dx, dy);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Coord3;
    use crate::layout::{Scene, SceneAxis};
    use surface_common::DatasetGroup;

    fn empty_figure() -> Figure {
        let axes = DatasetGroup::CurrentSee.axes();
        let scene = Scene::new(
            SceneAxis::from_axis(&axes.x),
            SceneAxis::from_axis(&axes.y),
            SceneAxis::from_axis(&axes.z),
            Camera::default(),
        );
        Figure::new(Vec::new(), Layout::single(scene))
    }

    #[test]
    fn test_with_camera_clamps_and_preserves_original() {
        let fig = empty_figure();
        let moved = fig.with_camera(Camera {
            eye: Coord3::new(9.0, 0.0, 0.0),
            center: Coord3::new(0.0, 0.0, 0.0),
        });
        assert_eq!(moved.layout.scene.camera.eye.x, 3.0);
        assert_eq!(fig.layout.scene.camera, Camera::default());
    }

    #[test]
    fn test_annotation_shift_out_of_range_is_noop() {
        let fig = empty_figure();
        assert_eq!(fig.with_annotation_shift(3, 1.0, 1.0), fig);
    }
}
