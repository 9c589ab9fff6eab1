//! Colorscale value types.
//!
//! A colorscale is an ordered list of stops in normalized [0, 1] space,
//! the form consumed by 3D surface renderers. Band generation lives in the
//! figure-builder crate; these are the shared data types.

use serde::{Deserialize, Serialize};

/// A single colorscale stop: normalized position plus color string.
///
/// Serializes as a `[position, color]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop(pub f64, pub String);

impl ColorStop {
    pub fn new(position: f64, color: impl Into<String>) -> Self {
        Self(position, color.into())
    }

    pub fn position(&self) -> f64 {
        self.0
    }

    pub fn color(&self) -> &str {
        &self.1
    }
}

/// A discrete visual category: a half-open interval [lo, hi) in normalized
/// space with a flat color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub lo: f64,
    pub hi: f64,
    pub color: String,
}

impl ColorBand {
    /// The two stops a distinct-band renderer needs: one at each end of the
    /// interval, both carrying the band color, producing a step function
    /// instead of interpolation.
    pub fn stops(&self) -> [ColorStop; 2] {
        [
            ColorStop::new(self.lo, self.color.clone()),
            ColorStop::new(self.hi, self.color.clone()),
        ]
    }

    /// Whether a normalized value falls inside [lo, hi).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value < self.hi
    }
}

/// An ordered sequence of color stops spanning [0, 1].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colorscale(pub Vec<ColorStop>);

impl Colorscale {
    pub fn stops(&self) -> &[ColorStop] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ColorStop>> for Colorscale {
    fn from(stops: Vec<ColorStop>) -> Self {
        Self(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_stops_share_color() {
        let band = ColorBand {
            lo: 0.0,
            hi: 0.5,
            color: "#FF0000".to_string(),
        };
        let [a, b] = band.stops();
        assert_eq!(a.color(), b.color());
        assert_eq!(a.position(), 0.0);
        assert_eq!(b.position(), 0.5);
    }

    #[test]
    fn test_band_half_open() {
        let band = ColorBand {
            lo: 0.0,
            hi: 0.5,
            color: "#FF0000".to_string(),
        };
        assert!(band.contains(0.0));
        assert!(band.contains(0.499));
        assert!(!band.contains(0.5));
    }

    #[test]
    fn test_stop_serializes_as_pair() {
        let stop = ColorStop::new(0.25, "#8DD3C7");
        let json = serde_json::to_string(&stop).unwrap();
        assert_eq!(json, r##"[0.25,"#8DD3C7"]"##);
    }
}
