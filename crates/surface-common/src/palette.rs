//! Named discrete color palettes for band colorscales.

use crate::error::{VizError, VizResult};

/// Look up a palette by name.
pub fn palette_colors(name: &str) -> VizResult<&'static [&'static str]> {
    PALETTES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, colors)| *colors)
        .ok_or_else(|| VizError::UnknownPalette(name.to_string()))
}

/// All known palette names.
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|(n, _)| *n)
}

/// Default palette for distinct band colorscales.
pub const DEFAULT_PALETTE: &str = "Set3";

const PALETTES: &[(&str, &[&str])] = &[
    (
        "Set3",
        &[
            "#8DD3C7", "#FFFFB3", "#BEBADA", "#FB8072", "#80B1D3", "#FDB462", "#B3DE69",
            "#FCCDE5", "#D9D9D9", "#BC80BD", "#CCEBC5", "#FFED6F",
        ],
    ),
    (
        "R_rainbow_10",
        &[
            "#FF0000", "#FF9900", "#CCFF00", "#33FF00", "#00FF66", "#00FFFF", "#0066FF",
            "#3300FF", "#CC00FF", "#FF0099",
        ],
    ),
    (
        "D3",
        &[
            "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
            "#7f7f7f", "#bcbd22", "#17becf",
        ],
    ),
    (
        "Plotly",
        &[
            "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692",
            "#B6E880", "#FF97FF", "#FECB52",
        ],
    ),
    (
        "G10",
        &[
            "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099", "#3B3EAC", "#0099C6",
            "#DD4477", "#66AA00", "#B82E2E",
        ],
    ),
    (
        "Set1",
        &[
            "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628",
            "#f781bf", "#999999",
        ],
    ),
    (
        "Light24",
        &[
            "#FD3216", "#00FE35", "#6A76FC", "#FED4C4", "#FE00CE", "#0DF9FF", "#F6F926",
            "#FF9616", "#479B55", "#EEA6FB", "#DC587D", "#D626FF", "#6E899C", "#00B5F7",
            "#B68E00", "#C9FBE5", "#FF0092", "#22FFA7", "#E3EE9E", "#86CE00", "#BC7196",
            "#7E7DCD", "#FC6955", "#E48F72",
        ],
    ),
    (
        "Vivid",
        &[
            "#E58606", "#5D69B1", "#52BCA3", "#99C945", "#CC61B0", "#24796C", "#DAA51B",
            "#2F8AC4", "#764E9F", "#ED645A", "#A5AA99",
        ],
    ),
    (
        "Pastel",
        &[
            "#66C5CC", "#F6CF71", "#F89C74", "#DCB0F2", "#87C55F", "#9EB9F3", "#FE88B1",
            "#C9DB74", "#8BE0A4", "#B497E7", "#B3B3B3",
        ],
    ),
];

/// Parse hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}
