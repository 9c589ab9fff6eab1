//! Axis descriptors and dataset group tags.
//!
//! Every loaded surface carries an explicit [`DatasetGroup`]; axis ranges,
//! tick sets and colorscale scale factors are derived from the tag, never
//! from naming conventions at render time.

use serde::{Deserialize, Serialize};

/// An ordered sequence of tick positions with a physical range and title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Display title, e.g. "Wave Height [m]"
    pub title: String,
    /// Coordinate values, strictly monotonic
    pub values: Vec<f64>,
    /// Physical range [min, max] (may be descending for reversed axes)
    pub range: [f64; 2],
    /// Tick positions
    pub tickvals: Vec<f64>,
    /// Tick labels, parallel to `tickvals`
    pub ticktext: Vec<String>,
}

impl Axis {
    /// Number of coordinate values along this axis.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Tick spacing, used for surface contour line intervals.
    pub fn tick_interval(&self) -> f64 {
        if self.tickvals.len() < 2 {
            return 0.0;
        }
        (self.tickvals[1] - self.tickvals[0]).abs()
    }
}

/// The three fixed axes of a dataset group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSet {
    pub x: Axis,
    pub y: Axis,
    pub z: Axis,
}

/// Physical quantity on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YAxisKind {
    CurrentSpeed,
    WavePeriod,
}

/// Operability index on the z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZIndexKind {
    See,
    Evrd,
}

/// Dataset group: one of the two physical axis configurations crossed with
/// one of the two operability indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetGroup {
    /// Wave height x current speed x SEE index (21x16 tables)
    CurrentSee,
    /// Wave height x current speed x EVRD index (21x16 tables)
    CurrentEvrd,
    /// Wave height x wave period x SEE index (20x10 tables)
    PeriodSee,
    /// Wave height x wave period x EVRD index (20x10 tables)
    PeriodEvrd,
}

impl DatasetGroup {
    pub fn y_kind(&self) -> YAxisKind {
        match self {
            DatasetGroup::CurrentSee | DatasetGroup::CurrentEvrd => YAxisKind::CurrentSpeed,
            DatasetGroup::PeriodSee | DatasetGroup::PeriodEvrd => YAxisKind::WavePeriod,
        }
    }

    pub fn z_kind(&self) -> ZIndexKind {
        match self {
            DatasetGroup::CurrentSee | DatasetGroup::PeriodSee => ZIndexKind::See,
            DatasetGroup::CurrentEvrd | DatasetGroup::PeriodEvrd => ZIndexKind::Evrd,
        }
    }

    /// Divisor applied to the grid maximum when deriving the color band
    /// count: SEE tables band every two index units, EVRD tables every one.
    pub fn color_scale_factor(&self) -> f64 {
        match self.z_kind() {
            ZIndexKind::See => 2.0,
            ZIndexKind::Evrd => 1.0,
        }
    }

    /// The fixed axis descriptors for this group.
    pub fn axes(&self) -> AxisSet {
        let x = match self.y_kind() {
            YAxisKind::CurrentSpeed => Axis {
                title: "Wave Height [m]".to_string(),
                values: linspace(0.0, 10.0, 21),
                range: [0.0, 10.0],
                tickvals: linspace(0.0, 10.0, 6),
                ticktext: tick_labels(&["0", "2", "4", "6", "8", "10"]),
            },
            YAxisKind::WavePeriod => Axis {
                title: "Wave Height [m]".to_string(),
                values: linspace(0.5, 10.0, 20),
                range: [0.5, 10.0],
                tickvals: vec![0.5, 2.5, 5.0, 7.5, 10.0],
                ticktext: tick_labels(&["0.5", "2.5", "5", "7.5", "10"]),
            },
        };

        let y = match self.y_kind() {
            YAxisKind::CurrentSpeed => Axis {
                title: "Current Speed [m/s]".to_string(),
                values: linspace(0.0, 1.5, 16),
                range: [0.0, 1.5],
                tickvals: vec![0.0, 0.5, 1.0, 1.5],
                ticktext: tick_labels(&["0", "0.5", "1", "1.5"]),
            },
            YAxisKind::WavePeriod => Axis {
                title: "Wave Period [s]".to_string(),
                values: linspace(15.0, 6.0, 10),
                range: [15.0, 6.0],
                tickvals: vec![15.0, 12.0, 9.0, 6.0],
                ticktext: tick_labels(&["15", "12", "9", "6"]),
            },
        };

        let z = match self {
            DatasetGroup::CurrentSee => Axis {
                title: "SEE Index".to_string(),
                values: linspace(0.0, 14.0, 15),
                range: [0.0, 14.0],
                tickvals: linspace(0.0, 14.0, 8),
                ticktext: tick_labels(&["0", "2", "4", "6", "8", "10", "12", "14"]),
            },
            DatasetGroup::PeriodSee => Axis {
                title: "SEE Index".to_string(),
                values: linspace(0.0, 18.0, 19),
                range: [0.0, 18.0],
                tickvals: linspace(0.0, 18.0, 10),
                ticktext: tick_labels(&[
                    "0", "2", "4", "6", "8", "10", "12", "14", "16", "18",
                ]),
            },
            DatasetGroup::CurrentEvrd | DatasetGroup::PeriodEvrd => Axis {
                title: "EVRD Index".to_string(),
                values: linspace(0.0, 6.0, 7),
                range: [0.0, 6.0],
                tickvals: linspace(0.0, 6.0, 7),
                ticktext: tick_labels(&["0", "1", "2", "3", "4", "5", "6"]),
            },
        };

        AxisSet { x, y, z }
    }

    /// Expected (rows, cols) shape of a grid in this group.
    pub fn expected_shape(&self) -> (usize, usize) {
        let axes = self.axes();
        (axes.y.len(), axes.x.len())
    }
}

impl std::fmt::Display for DatasetGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DatasetGroup::CurrentSee => "current-see",
            DatasetGroup::CurrentEvrd => "current-evrd",
            DatasetGroup::PeriodSee => "period-see",
            DatasetGroup::PeriodEvrd => "period-evrd",
        };
        write!(f, "{}", name)
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

fn tick_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let vals = linspace(0.0, 10.0, 21);
        assert_eq!(vals.len(), 21);
        assert_eq!(vals[0], 0.0);
        assert!((vals[20] - 10.0).abs() < 1e-12);
        assert!((vals[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_descending() {
        let vals = linspace(15.0, 6.0, 10);
        assert_eq!(vals.len(), 10);
        assert_eq!(vals[0], 15.0);
        assert!((vals[9] - 6.0).abs() < 1e-12);
        assert!(vals.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_group_shapes() {
        assert_eq!(DatasetGroup::CurrentSee.expected_shape(), (16, 21));
        assert_eq!(DatasetGroup::PeriodEvrd.expected_shape(), (10, 20));
    }

    #[test]
    fn test_scale_factors() {
        assert_eq!(DatasetGroup::CurrentSee.color_scale_factor(), 2.0);
        assert_eq!(DatasetGroup::PeriodSee.color_scale_factor(), 2.0);
        assert_eq!(DatasetGroup::CurrentEvrd.color_scale_factor(), 1.0);
        assert_eq!(DatasetGroup::PeriodEvrd.color_scale_factor(), 1.0);
    }

    #[test]
    fn test_tick_sets_are_parallel() {
        for group in [
            DatasetGroup::CurrentSee,
            DatasetGroup::CurrentEvrd,
            DatasetGroup::PeriodSee,
            DatasetGroup::PeriodEvrd,
        ] {
            let axes = group.axes();
            for axis in [&axes.x, &axes.y, &axes.z] {
                assert_eq!(axis.tickvals.len(), axis.ticktext.len());
            }
        }
    }
}
