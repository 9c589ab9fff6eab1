//! Percentage-difference surfaces and their figures.

use tracing::debug;

use surface_common::{
    DatasetGroup, Grid2d, Surface, SurfaceProperties, VizError, VizResult,
};

use crate::camera::Camera;
use crate::figure::Figure;
use crate::layout::{
    axis_label_annotations, Annotation, Domain, Layout, Margin, Scene, SceneAxis, Title,
};
use crate::trace::{ContourAxis, Contours, Font, SurfaceTrace};

/// Vertical arrow offsets of difference-surface name annotations, by trace
/// position.
const DIFF_NAME_AY: [f64; 4] = [50.0, -50.0, -20.0, 25.0];
const DIFF_NAME_FONT_SIZE: u32 = 20;

/// Index of the one difference trace whose colorbar is shown.
const DIFF_COLORBAR_INDEX: usize = 1;

/// Percentage difference of two grids of identical shape, normalized by
/// the value span of the *reference* grid:
///
/// `diff[i][j] = |ref[i][j] - cmp[i][j]| / (max(ref) - min(ref)) * 100`
///
/// The normalization makes the transform non-commutative; which operand is
/// the reference must be documented per configured pair.
pub fn percentage_difference(reference: &Grid2d, compare: &Grid2d) -> VizResult<Grid2d> {
    let span = reference.max() - reference.min();
    if span == 0.0 {
        return Err(VizError::DegenerateRange(reference.max()));
    }
    reference.zip_map(compare, |a, b| (a - b).abs() / span * 100.0)
}

/// A computed difference surface ready for figure assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceSurface {
    pub label: String,
    pub group: DatasetGroup,
    pub surface: Surface,
}

impl DifferenceSurface {
    /// Compute the difference of two base surfaces; `reference` normalizes.
    pub fn compute(
        label: impl Into<String>,
        reference: &SurfaceProperties,
        compare: &SurfaceProperties,
    ) -> VizResult<Self> {
        if reference.group != compare.group {
            return Err(VizError::GroupMismatch {
                left: reference.group.to_string(),
                right: compare.group.to_string(),
            });
        }
        let z = percentage_difference(&reference.surface.z, &compare.surface.z)?;
        let surface = Surface::new(reference.surface.x.clone(), reference.surface.y.clone(), z)?;
        Ok(Self {
            label: label.into(),
            group: reference.group,
            surface,
        })
    }
}

fn diff_contours(group: DatasetGroup) -> Contours {
    let axes = group.axes();
    Contours {
        x: ContourAxis::from_axis(&axes.x),
        y: ContourAxis::from_axis(&axes.y),
    }
}

fn diff_traces(surfaces: &[DifferenceSurface]) -> Vec<SurfaceTrace> {
    surfaces
        .iter()
        .enumerate()
        .map(|(i, diff)| {
            SurfaceTrace::difference(
                &diff.surface.x,
                &diff.surface.y,
                &diff.surface.z,
                diff_contours(diff.group),
                i == DIFF_COLORBAR_INDEX.min(surfaces.len() - 1),
            )
        })
        .collect()
}

fn common_group(surfaces: &[DifferenceSurface]) -> VizResult<DatasetGroup> {
    let first = surfaces
        .first()
        .ok_or_else(|| VizError::Load("no difference surfaces configured".to_string()))?;
    for other in &surfaces[1..] {
        if other.group != first.group {
            return Err(VizError::GroupMismatch {
                left: first.group.to_string(),
                right: other.group.to_string(),
            });
        }
    }
    Ok(first.group)
}

/// One 3D scene holding every difference surface, with the fixed [0, 180]
/// vertical range and recentered tick labels.
pub fn difference_figure(surfaces: &[DifferenceSurface], title: &str) -> VizResult<Figure> {
    let group = common_group(surfaces)?;
    debug!(count = surfaces.len(), %group, "building combined difference figure");

    let axes = group.axes();
    let mut scene = Scene::new(
        SceneAxis::from_axis(&axes.x),
        SceneAxis::from_axis(&axes.y),
        SceneAxis::difference_z(),
        Camera::difference_default(),
    );

    scene.annotations = axis_label_annotations(group, Some("Difference [%]"), Some(80.0));
    for (i, diff) in surfaces.iter().enumerate() {
        let point = diff.surface.annotation_point().ok_or_else(|| {
            VizError::MalformedSurface(format!("difference surface {} is empty", diff.label))
        })?;
        scene.annotations.push(Annotation::surface_name(
            &diff.label,
            point,
            DIFF_NAME_AY[i % DIFF_NAME_AY.len()],
            DIFF_NAME_FONT_SIZE,
        ));
    }

    let layout = Layout {
        template: Some("ggplot2".to_string()),
        autosize: false,
        height: 1000,
        width: Some(1400),
        margin: Margin {
            r: 50.0,
            b: 10.0,
            l: 10.0,
            t: 10.0,
        },
        title: Some(Title {
            text: title.to_string(),
            x: 0.5,
            y: 0.825,
            xanchor: "center".to_string(),
            yanchor: "middle".to_string(),
            font: Font::sized(30),
        }),
        scene,
        scene2: None,
        scene3: None,
        scene4: None,
    };

    Ok(Figure::new(diff_traces(surfaces), layout))
}

/// 2x2 grid of independent scenes, one difference surface per cell.
pub fn difference_grid(surfaces: &[DifferenceSurface], title: &str) -> VizResult<Figure> {
    let group = common_group(surfaces)?;
    debug!(count = surfaces.len(), %group, "building difference subplot grid");

    let axes = group.axes();
    let cell = |x: [f64; 2], y: [f64; 2]| {
        let mut scene = Scene::new(
            SceneAxis::from_axis(&axes.x),
            SceneAxis::from_axis(&axes.y),
            SceneAxis::difference_z(),
            Camera::difference_default(),
        );
        scene.domain = Some(Domain { x, y });
        scene
    };

    let mut traces = diff_traces(surfaces);
    let scene_ids = ["scene", "scene2", "scene3", "scene4"];
    for (trace, id) in traces.iter_mut().zip(scene_ids) {
        *trace = trace.clone().in_scene(id);
    }

    let layout = Layout {
        template: Some("ggplot2".to_string()),
        autosize: false,
        height: 1000,
        width: Some(1400),
        margin: Margin {
            r: 50.0,
            b: 10.0,
            l: 10.0,
            t: 10.0,
        },
        title: Some(Title {
            text: title.to_string(),
            x: 0.5,
            y: 0.98,
            xanchor: "center".to_string(),
            yanchor: "top".to_string(),
            font: Font::sized(30),
        }),
        scene: cell([0.0, 0.45], [0.55, 1.0]),
        scene2: Some(cell([0.55, 1.0], [0.55, 1.0])),
        scene3: Some(cell([0.0, 0.45], [0.0, 0.45])),
        scene4: Some(cell([0.55, 1.0], [0.0, 0.45])),
    };

    Ok(Figure::new(traces, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_common::Grid2d;

    fn grid(rows: Vec<Vec<f64>>) -> Grid2d {
        Grid2d::from_rows(rows).unwrap()
    }

    #[test]
    fn test_self_difference_is_zero() {
        let a = grid(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let diff = percentage_difference(&a, &a).unwrap();
        assert!(diff.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_difference_normalizes_by_reference_span() {
        let a = grid(vec![vec![0.0, 10.0]]);
        let b = grid(vec![vec![5.0, 10.0]]);
        let diff = percentage_difference(&a, &b).unwrap();
        // |0 - 5| / (10 - 0) * 100
        assert_eq!(diff.get(0, 0), Some(50.0));
        assert_eq!(diff.get(0, 1), Some(0.0));
    }

    #[test]
    fn test_difference_is_non_commutative() {
        let a = grid(vec![vec![0.0, 10.0]]);
        let b = grid(vec![vec![2.0, 6.0]]);
        let ab = percentage_difference(&a, &b).unwrap();
        let ba = percentage_difference(&b, &a).unwrap();
        // Same absolute differences, different normalizing spans (10 vs 4)
        assert_ne!(ab, ba);
        assert_eq!(ab.get(0, 0), Some(20.0));
        assert_eq!(ba.get(0, 0), Some(50.0));
    }

    #[test]
    fn test_difference_shape_mismatch() {
        let a = grid(vec![vec![0.0, 10.0]]);
        let b = grid(vec![vec![0.0], vec![10.0]]);
        let err = percentage_difference(&a, &b).unwrap_err();
        assert!(matches!(err, VizError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_difference_degenerate_reference() {
        let a = grid(vec![vec![5.0, 5.0]]);
        let b = grid(vec![vec![1.0, 2.0]]);
        let err = percentage_difference(&a, &b).unwrap_err();
        assert!(matches!(err, VizError::DegenerateRange(_)));
    }

    fn diff_surfaces(n: usize) -> Vec<DifferenceSurface> {
        let group = DatasetGroup::CurrentSee;
        let axes = group.axes();
        let (rows, cols) = group.expected_shape();
        (0..n)
            .map(|i| {
                let data = (0..rows * cols).map(|j| (i + j % 7) as f64).collect();
                DifferenceSurface {
                    label: format!("pair-{}", i),
                    group,
                    surface: Surface::new(
                        axes.x.values.clone(),
                        axes.y.values.clone(),
                        Grid2d::new(rows, cols, data).unwrap(),
                    )
                    .unwrap(),
                }
            })
            .collect()
    }

    #[test]
    fn test_combined_figure_z_range_and_colorbar() {
        let fig = difference_figure(&diff_surfaces(4), "pairwise differences").unwrap();
        assert_eq!(fig.data.len(), 4);
        assert_eq!(fig.layout.scene.zaxis.range, [0.0, 180.0]);
        // Colorbar on exactly one trace
        let shown: Vec<bool> = fig.data.iter().map(|t| t.showscale).collect();
        assert_eq!(shown.iter().filter(|&&s| s).count(), 1);
        assert!(shown[1]);
        // Three axis labels + four name annotations
        assert_eq!(fig.layout.scene.annotations.len(), 7);
    }

    #[test]
    fn test_grid_figure_scene_assignment() {
        let fig = difference_grid(&diff_surfaces(4), "pairwise differences").unwrap();
        let scenes: Vec<Option<&str>> = fig.data.iter().map(|t| t.scene.as_deref()).collect();
        assert_eq!(
            scenes,
            vec![Some("scene"), Some("scene2"), Some("scene3"), Some("scene4")]
        );
        assert!(fig.layout.scene2.is_some());
        assert!(fig.layout.scene4.as_ref().unwrap().domain.is_some());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(difference_figure(&[], "empty").is_err());
    }
}
