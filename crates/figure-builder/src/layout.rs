//! Scene layout descriptions: axes, annotations, margins, subplot domains.

use serde::{Deserialize, Serialize};

use surface_common::{Axis, DatasetGroup, ZIndexKind};

use crate::camera::Camera;
use crate::trace::Font;

/// Manual aspect ratio of every 3D scene.
pub const ASPECT_RATIO: [f64; 3] = [1.0, 0.5, 0.5];

/// Pixel height of a single-scene figure.
pub const FIGURE_HEIGHT: u32 = 900;

/// Axis styling within a 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneAxis {
    pub backgroundcolor: String,
    pub linecolor: String,
    pub linewidth: f64,
    pub mirror: bool,
    pub range: [f64; 2],
    pub showbackground: bool,
    pub showgrid: bool,
    pub showline: bool,
    pub showticklabels: bool,
    pub tickcolor: String,
    pub tickfont: Font,
    pub ticklen: f64,
    pub tickmode: String,
    pub ticks: String,
    pub ticktext: Vec<String>,
    pub tickvals: Vec<f64>,
    pub tickwidth: f64,
    pub title: String,
}

impl SceneAxis {
    /// Scene axis with the shared dark-backed styling, ticks and range
    /// taken from an axis descriptor. Axis titles are drawn as scene
    /// annotations instead of axis titles so they can be repositioned.
    pub fn from_axis(axis: &Axis) -> Self {
        Self {
            backgroundcolor: "#999".to_string(),
            linecolor: "black".to_string(),
            linewidth: 5.0,
            mirror: true,
            range: axis.range,
            showbackground: true,
            showgrid: true,
            showline: true,
            showticklabels: true,
            tickcolor: "white".to_string(),
            tickfont: Font {
                size: 21,
                color: Some("black".to_string()),
                family: Some("Arial".to_string()),
            },
            ticklen: 20.0,
            tickmode: "array".to_string(),
            ticks: "outside".to_string(),
            ticktext: axis.ticktext.clone(),
            tickvals: axis.tickvals.clone(),
            tickwidth: 5.0,
            title: String::new(),
        }
    }

    /// The fixed z axis of percentage-difference scenes: differences are
    /// bounded to [0, 100] by construction, the range keeps headroom and
    /// the tick labels re-center zero.
    pub fn difference_z() -> Self {
        let tickvals: Vec<f64> = (0..9).map(|i| i as f64 * 20.0).collect();
        let ticktext = vec![
            "-100", "-80", "-60", "-40", "-20", "0", "+20", "+40", "+60",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        Self {
            range: [0.0, 180.0],
            tickvals,
            ticktext,
            tickfont: Font::sized(13),
            ..Self::from_axis(&Axis {
                title: "Difference [%]".to_string(),
                values: Vec::new(),
                range: [0.0, 180.0],
                tickvals: Vec::new(),
                ticktext: Vec::new(),
            })
        }
    }
}

/// A text annotation placed in scene coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub text: String,
    pub showarrow: bool,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textangle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xshift: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yshift: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bordercolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowhead: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ay: Option<f64>,
}

impl Annotation {
    fn axis_label(text: &str, position: [f64; 3]) -> Self {
        Self {
            x: position[0],
            y: position[1],
            z: position[2],
            text: text.to_string(),
            showarrow: false,
            font: Font::sized(25),
            textangle: None,
            xshift: None,
            yshift: None,
            xanchor: None,
            yanchor: None,
            bgcolor: None,
            bordercolor: None,
            arrowhead: None,
            ax: None,
            ay: None,
        }
    }

    /// A labeled arrow pointing at a surface's last-corner data point.
    pub fn surface_name(name: &str, point: (f64, f64, f64), ay: f64, font_size: u32) -> Self {
        Self {
            x: point.0,
            y: point.1,
            z: point.2,
            text: name.to_string(),
            showarrow: true,
            font: Font::sized(font_size),
            textangle: None,
            xshift: None,
            yshift: None,
            xanchor: Some("left".to_string()),
            yanchor: None,
            bgcolor: Some("white".to_string()),
            bordercolor: Some("black".to_string()),
            arrowhead: Some(6),
            ax: Some(70.0),
            ay: Some(ay),
        }
    }

    /// A copy shifted by screen-space offsets, for annotation placement
    /// controls.
    pub fn shifted(&self, dx: f64, dy: f64) -> Self {
        let mut out = self.clone();
        out.xshift = Some(out.xshift.unwrap_or(0.0) + dx);
        out.yshift = Some(out.yshift.unwrap_or(0.0) + dy);
        out
    }
}

/// Literal anchor coordinates for the three axis-title annotations.
///
/// Not derived from data; the period-family values place the labels at the
/// same fractional positions along the reversed wave-period axis.
struct LabelAnchors {
    x_label: [f64; 3],
    y_label: [f64; 3],
    z_label: [f64; 3],
}

fn label_anchors(group: DatasetGroup, z_override: Option<f64>) -> LabelAnchors {
    let (xy, yy, zy) = match group {
        DatasetGroup::CurrentSee | DatasetGroup::CurrentEvrd => (0.45, 0.25, 0.02),
        DatasetGroup::PeriodSee | DatasetGroup::PeriodEvrd => (12.3, 13.5, 14.9),
    };
    let zh = z_override.unwrap_or(match group.z_kind() {
        ZIndexKind::See => 7.0,
        ZIndexKind::Evrd => 3.0,
    });
    LabelAnchors {
        x_label: [3.0, xy, 0.0],
        y_label: [9.8, yy, 0.0],
        z_label: [0.05, zy, zh],
    }
}

/// The three axis-title annotations for a dataset group. `z_label` and
/// `z_anchor` let difference scenes relabel and raise the vertical axis.
pub fn axis_label_annotations(
    group: DatasetGroup,
    z_label: Option<&str>,
    z_anchor: Option<f64>,
) -> Vec<Annotation> {
    let axes = group.axes();
    let anchors = label_anchors(group, z_anchor);

    let mut x = Annotation::axis_label(&axes.x.title, anchors.x_label);
    x.textangle = Some(21.0);
    x.xshift = Some(20.0);
    x.yshift = Some(-71.0);
    x.xanchor = Some("center".to_string());
    x.yanchor = Some("top".to_string());

    let mut y = Annotation::axis_label(&axes.y.title, anchors.y_label);
    y.textangle = Some(-43.0);
    y.xshift = Some(78.0);
    y.xanchor = Some("left".to_string());
    y.yanchor = Some("middle".to_string());

    let mut z = Annotation::axis_label(z_label.unwrap_or(&axes.z.title), anchors.z_label);
    z.textangle = Some(-94.0);
    z.xshift = Some(-60.0);
    z.xanchor = Some("right".to_string());
    z.yanchor = Some("middle".to_string());

    vec![x, y, z]
}

/// Fraction of the figure a subplot scene occupies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            x: ASPECT_RATIO[0],
            y: ASPECT_RATIO[1],
            z: ASPECT_RATIO[2],
        }
    }
}

/// One 3D scene: axes, annotations, camera, optional subplot domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub aspectmode: String,
    pub aspectratio: AspectRatio,
    pub xaxis: SceneAxis,
    pub yaxis: SceneAxis,
    pub zaxis: SceneAxis,
    pub annotations: Vec<Annotation>,
    pub camera: Camera,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

impl Scene {
    pub fn new(xaxis: SceneAxis, yaxis: SceneAxis, zaxis: SceneAxis, camera: Camera) -> Self {
        Self {
            aspectmode: "manual".to_string(),
            aspectratio: AspectRatio::default(),
            xaxis,
            yaxis,
            zaxis,
            annotations: Vec::new(),
            camera,
            domain: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub r: f64,
    pub b: f64,
    pub l: f64,
    pub t: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub font: Font,
}

/// Figure layout: page-level settings plus up to four scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub autosize: bool,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub scene: Scene,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene2: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene3: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene4: Option<Scene>,
}

impl Layout {
    /// Single-scene layout with the comparison figure's page settings.
    pub fn single(scene: Scene) -> Self {
        Self {
            template: None,
            autosize: false,
            height: FIGURE_HEIGHT,
            width: None,
            margin: Margin {
                r: 0.0,
                b: 0.0,
                l: 0.0,
                t: 0.0,
            },
            title: None,
            scene,
            scene2: None,
            scene3: None,
            scene4: None,
        }
    }

    /// Every scene present in the layout.
    pub fn scenes_mut(&mut self) -> Vec<&mut Scene> {
        let mut scenes = vec![&mut self.scene];
        scenes.extend(self.scene2.as_mut());
        scenes.extend(self.scene3.as_mut());
        scenes.extend(self.scene4.as_mut());
        scenes
    }
}
