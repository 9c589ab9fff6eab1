//! Surface trace descriptions, the renderer-facing data half of a figure.

use serde::{Deserialize, Serialize};

use surface_common::color::Colorscale;
use surface_common::{Axis, SurfaceProperties};

/// Opacity of the visually emphasized (taller) surface.
pub const EMPHASIS_OPACITY: f64 = 0.8;
/// Ambient light of the emphasized surface.
pub const EMPHASIS_AMBIENT: f64 = 0.5;
/// Opacity of the non-emphasized surface.
pub const BASE_OPACITY: f64 = 1.0;
/// Ambient light of the non-emphasized surface.
pub const BASE_AMBIENT: f64 = 0.9;
/// Diffuse light shared by all surfaces.
pub const SURFACE_DIFFUSE: f64 = 0.5;

/// Rendering treatment of one surface in a comparison figure.
///
/// The taller surface sits behind the shorter one from the fixed camera;
/// reducing its opacity and showing only its colorbar keeps the shorter
/// surface readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Reduced opacity, colorbar shown, dimmer ambient light.
    Emphasized,
    /// Fully opaque, colorbar hidden.
    Base,
}

impl Emphasis {
    pub fn opacity(self) -> f64 {
        match self {
            Emphasis::Emphasized => EMPHASIS_OPACITY,
            Emphasis::Base => BASE_OPACITY,
        }
    }

    pub fn ambient(self) -> f64 {
        match self {
            Emphasis::Emphasized => EMPHASIS_AMBIENT,
            Emphasis::Base => BASE_AMBIENT,
        }
    }

    pub fn show_colorbar(self) -> bool {
        matches!(self, Emphasis::Emphasized)
    }
}

/// Colorscale reference on a trace: either generated stops or a scale name
/// known to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceColorscale {
    Stops(Colorscale),
    Named(String),
}

/// Colorbar placement and tick settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colorbar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
    pub orientation: String,
    pub x: f64,
    pub y: f64,
    pub len: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
}

/// Font settings for ticks and annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl Font {
    pub fn sized(size: u32) -> Self {
        Self {
            size,
            color: None,
            family: None,
        }
    }
}

/// Contour line settings along one axis of a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourAxis {
    pub show: bool,
    pub start: f64,
    pub end: f64,
    pub size: f64,
    pub color: String,
    pub width: f64,
}

impl ContourAxis {
    /// Contour lines at the axis tick spacing across its physical range.
    pub fn from_axis(axis: &Axis) -> Self {
        let start = axis.range[0].min(axis.range[1]);
        let end = axis.range[0].max(axis.range[1]);
        Self {
            show: true,
            start,
            end,
            size: axis.tick_interval(),
            color: "black".to_string(),
            width: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contours {
    pub x: ContourAxis,
    pub y: ContourAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub ambient: f64,
    pub diffuse: f64,
}

/// A 3D surface trace in renderer form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub opacity: f64,
    pub colorscale: TraceColorscale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmax: Option<f64>,
    pub showscale: bool,
    pub colorbar: Colorbar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contours: Option<Contours>,
    pub hoverinfo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting: Option<Lighting>,
    /// Scene id for subplot figures ("scene", "scene2", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

impl SurfaceTrace {
    /// Build the trace for one surface of a comparison figure.
    pub fn comparison(props: &SurfaceProperties, emphasis: Emphasis) -> Self {
        let axes = props.group.axes();
        let k = props.group.color_scale_factor();
        let cmax = props.n_colors as f64 * k;

        // Colorbar ticks every k index units over the banded range
        let tick_count = (cmax / k) as usize + 1;
        let tickvals: Vec<f64> = (0..tick_count).map(|i| i as f64 * k).collect();
        let ticktext = tickvals.iter().map(|v| format!("{}", v)).collect();

        Self {
            trace_type: "surface".to_string(),
            x: props.surface.x.clone(),
            y: props.surface.y.clone(),
            z: grid_rows(&props.surface),
            opacity: emphasis.opacity(),
            colorscale: TraceColorscale::Stops(props.colorscale.clone()),
            cmin: Some(0.0),
            cmax: Some(cmax),
            showscale: emphasis.show_colorbar(),
            colorbar: Colorbar {
                tickmode: Some("array".to_string()),
                tickvals: Some(tickvals),
                ticktext: Some(ticktext),
                orientation: "v".to_string(),
                x: 0.9,
                y: 0.5,
                len: 0.5,
                xanchor: None,
                tickfont: Some(Font::sized(20)),
            },
            contours: Some(Contours {
                x: ContourAxis::from_axis(&axes.x),
                y: ContourAxis::from_axis(&axes.y),
            }),
            hoverinfo: "skip".to_string(),
            lighting: Some(Lighting {
                ambient: emphasis.ambient(),
                diffuse: SURFACE_DIFFUSE,
            }),
            scene: None,
        }
    }

    /// Build a percentage-difference trace. The diverging named scale keeps
    /// zero-difference regions neutral.
    pub fn difference(
        x: &[f64],
        y: &[f64],
        z: &surface_common::Grid2d,
        contours: Contours,
        show_colorbar: bool,
    ) -> Self {
        Self {
            trace_type: "surface".to_string(),
            x: x.to_vec(),
            y: y.to_vec(),
            z: z.iter_rows().map(|row| row.to_vec()).collect(),
            opacity: BASE_OPACITY,
            colorscale: TraceColorscale::Named("RdBu_r".to_string()),
            cmin: None,
            cmax: None,
            showscale: show_colorbar,
            colorbar: Colorbar {
                tickmode: None,
                tickvals: None,
                ticktext: None,
                orientation: "v".to_string(),
                x: 0.1,
                y: 0.5,
                len: 0.5,
                xanchor: Some("center".to_string()),
                tickfont: None,
            },
            contours: Some(contours),
            hoverinfo: "skip".to_string(),
            lighting: None,
            scene: None,
        }
    }

    /// Assign the trace to a named subplot scene.
    pub fn in_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = Some(scene.into());
        self
    }
}

fn grid_rows(surface: &surface_common::Surface) -> Vec<Vec<f64>> {
    surface.z.iter_rows().map(|row| row.to_vec()).collect()
}
