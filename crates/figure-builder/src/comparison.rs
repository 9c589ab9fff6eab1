//! Comparison figure assembly: two surfaces, one scene.

use tracing::debug;

use surface_common::{SurfaceProperties, VizError, VizResult};

use crate::camera::Camera;
use crate::figure::Figure;
use crate::layout::{axis_label_annotations, Annotation, Layout, Scene, SceneAxis};
use crate::trace::{Emphasis, SurfaceTrace};

/// Vertical arrow offsets of the two surface-name annotations.
const NAME_AY: [f64; 2] = [-20.0, 20.0];
const NAME_FONT_SIZE: u32 = 21;

/// Decide which of two surfaces is visually emphasized.
///
/// The surface with the strictly larger maximum elevation is emphasized:
/// from the fixed camera it sits behind the other, and drawing it
/// semi-transparent keeps the shorter surface visible. On a tie the first
/// operand wins no special treatment and the second is emphasized; the
/// rule is deterministic and depends only on the grids, not on argument
/// order for unequal maxima.
pub fn emphasis_for(first: &SurfaceProperties, second: &SurfaceProperties) -> (Emphasis, Emphasis) {
    if first.surface.max_z() > second.surface.max_z() {
        (Emphasis::Emphasized, Emphasis::Base)
    } else {
        (Emphasis::Base, Emphasis::Emphasized)
    }
}

/// Build the comparison figure for two surfaces of the same dataset group.
pub fn comparison_figure(
    first: &SurfaceProperties,
    second: &SurfaceProperties,
) -> VizResult<Figure> {
    if first.group != second.group {
        return Err(VizError::GroupMismatch {
            left: first.group.to_string(),
            right: second.group.to_string(),
        });
    }

    let (first_emphasis, second_emphasis) = emphasis_for(first, second);
    let emphasized = if first_emphasis == Emphasis::Emphasized {
        &first.key
    } else {
        &second.key
    };
    debug!(
        first = %first.key,
        second = %second.key,
        emphasized = %emphasized,
        "building comparison figure"
    );

    let traces = vec![
        SurfaceTrace::comparison(first, first_emphasis),
        SurfaceTrace::comparison(second, second_emphasis),
    ];

    let axes = first.group.axes();
    let mut scene = Scene::new(
        SceneAxis::from_axis(&axes.x),
        SceneAxis::from_axis(&axes.y),
        SceneAxis::from_axis(&axes.z),
        Camera::comparison_default(),
    );

    scene.annotations = axis_label_annotations(first.group, None, None);
    for (i, props) in [first, second].into_iter().enumerate() {
        let point = props.surface.annotation_point().ok_or_else(|| {
            VizError::MalformedSurface(format!("surface {} has no data points", props.key))
        })?;
        scene.annotations.push(Annotation::surface_name(
            &props.name,
            point,
            NAME_AY[i],
            NAME_FONT_SIZE,
        ));
    }

    Ok(Figure::new(traces, Layout::single(scene)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorscale;
    use surface_common::{DatasetGroup, Grid2d, Surface, SurfaceKey};
    use test_utils::group_grid;

    fn props(key: &str, group: DatasetGroup, grid: Grid2d) -> SurfaceProperties {
        let axes = group.axes();
        let surface = Surface::new(axes.x.values.clone(), axes.y.values.clone(), grid).unwrap();
        let n_colors = colorscale::band_count(surface.max_z(), group.color_scale_factor());
        let colorscale = colorscale::distinct(n_colors, "Set3").unwrap();
        SurfaceProperties {
            key: SurfaceKey::new(key),
            name: key.to_string(),
            group,
            surface,
            colorscale,
            n_colors,
        }
    }

    fn see_props(key: &str, fill: f64) -> SurfaceProperties {
        props(key, DatasetGroup::CurrentSee, group_grid(DatasetGroup::CurrentSee, fill))
    }

    #[test]
    fn test_taller_surface_is_emphasized() {
        let tall = see_props("tall", 12.0);
        let short = see_props("short", 4.0);

        let fig = comparison_figure(&tall, &short).unwrap();
        assert_eq!(fig.data[0].opacity, 0.8);
        assert!(fig.data[0].showscale);
        assert_eq!(fig.data[0].lighting.as_ref().unwrap().ambient, 0.5);
        assert_eq!(fig.data[1].opacity, 1.0);
        assert!(!fig.data[1].showscale);
        assert_eq!(fig.data[1].lighting.as_ref().unwrap().ambient, 0.9);
    }

    #[test]
    fn test_emphasis_follows_physical_surface_on_swap() {
        let tall = see_props("tall", 12.0);
        let short = see_props("short", 4.0);

        let swapped = comparison_figure(&short, &tall).unwrap();
        // Same physical surface (the tall one, now second) gets emphasis
        assert_eq!(swapped.data[0].opacity, 1.0);
        assert_eq!(swapped.data[1].opacity, 0.8);
        assert!(swapped.data[1].showscale);
    }

    #[test]
    fn test_tie_emphasizes_second_operand() {
        let a = see_props("a", 6.0);
        let b = see_props("b", 6.0);

        let fig = comparison_figure(&a, &b).unwrap();
        assert_eq!(fig.data[0].opacity, 1.0);
        assert_eq!(fig.data[1].opacity, 0.8);
    }

    #[test]
    fn test_group_mismatch_rejected() {
        let a = see_props("a", 6.0);
        let b = props(
            "b",
            DatasetGroup::PeriodSee,
            group_grid(DatasetGroup::PeriodSee, 6.0),
        );

        let err = comparison_figure(&a, &b).unwrap_err();
        assert!(matches!(err, VizError::GroupMismatch { .. }));
    }

    #[test]
    fn test_figure_has_five_annotations() {
        let fig = comparison_figure(&see_props("a", 6.0), &see_props("b", 3.0)).unwrap();
        let annotations = &fig.layout.scene.annotations;
        assert_eq!(annotations.len(), 5);
        // Three axis labels without arrows, two named arrows at data corners
        assert!(annotations[..3].iter().all(|a| !a.showarrow));
        assert!(annotations[3..].iter().all(|a| a.showarrow));
        assert_eq!(annotations[3].text, "a");
        assert_eq!(annotations[4].text, "b");
        assert_eq!(annotations[3].x, 10.0);
        assert_eq!(annotations[3].y, 1.5);
    }

    #[test]
    fn test_zero_surface_has_empty_colorscale() {
        // All-zero grid: n_colors = 0, empty colorscale, figure still builds
        let zero = see_props("zero", 0.0);
        assert_eq!(zero.n_colors, 0);
        assert!(zero.colorscale.is_empty());

        let fig = comparison_figure(&zero, &see_props("b", 2.0)).unwrap();
        assert_eq!(fig.data.len(), 2);
    }
}
