//! Band colorscale generation.
//!
//! Surface renderers consume a stop list rather than discrete bands. The
//! distinct form emits two stops per band (band start and band end, same
//! color) so the rendered scale is a step function; the continuous form
//! emits one stop per band and lets the renderer interpolate.

use surface_common::color::{ColorBand, ColorStop, Colorscale};
use surface_common::palette::palette_colors;
use surface_common::{VizError, VizResult};

/// Number of color bands for a grid maximum and group scale factor:
/// `ceil(max_z / k)`. An all-zero grid yields zero bands.
pub fn band_count(max_z: f64, scale_factor: f64) -> usize {
    if max_z <= 0.0 {
        return 0;
    }
    (max_z / scale_factor).ceil() as usize
}

/// The `n` half-open bands `[i/n, (i+1)/n)` colored from a named palette.
pub fn bands(n_colors: usize, palette: &str) -> VizResult<Vec<ColorBand>> {
    let colors = palette_colors(palette)?;
    if n_colors > colors.len() {
        return Err(VizError::PaletteExhausted {
            requested: n_colors,
            available: colors.len(),
        });
    }

    let n = n_colors as f64;
    Ok((0..n_colors)
        .map(|i| ColorBand {
            lo: i as f64 / n,
            hi: (i + 1) as f64 / n,
            color: colors[i].to_string(),
        })
        .collect())
}

/// Distinct (flat-band) colorscale: `2n` stops, each consecutive pair
/// sharing a color. `n = 0` yields an empty scale.
pub fn distinct(n_colors: usize, palette: &str) -> VizResult<Colorscale> {
    let stops = bands(n_colors, palette)?
        .into_iter()
        .flat_map(|band| band.stops())
        .collect::<Vec<_>>();
    Ok(Colorscale(stops))
}

/// Continuous colorscale: one stop per band at the band start, colors
/// interpolated between stops by the renderer.
pub fn continuous(n_colors: usize, palette: &str) -> VizResult<Colorscale> {
    let stops = bands(n_colors, palette)?
        .into_iter()
        .map(|band| ColorStop::new(band.lo, band.color))
        .collect::<Vec<_>>();
    Ok(Colorscale(stops))
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_common::palette_names;

    #[test]
    fn test_band_count_rounds_up() {
        assert_eq!(band_count(13.2, 2.0), 7);
        assert_eq!(band_count(14.0, 2.0), 7);
        assert_eq!(band_count(5.1, 1.0), 6);
    }

    #[test]
    fn test_band_count_zero_grid() {
        assert_eq!(band_count(0.0, 2.0), 0);
        assert_eq!(band_count(-3.0, 1.0), 0);
    }

    #[test]
    fn test_distinct_shape_for_all_palettes() {
        for palette in palette_names() {
            let len = palette_colors(palette).unwrap().len();
            for n in 1..=len {
                let scale = distinct(n, palette).unwrap();
                assert_eq!(scale.len(), 2 * n, "palette {} n {}", palette, n);

                // Positions ascend and consecutive stop pairs share a color
                let stops = scale.stops();
                for pair in stops.windows(2) {
                    assert!(pair[0].position() <= pair[1].position());
                }
                for i in 0..n {
                    assert_eq!(stops[2 * i].color(), stops[2 * i + 1].color());
                }
                assert_eq!(stops[0].position(), 0.0);
                assert!((stops[2 * n - 1].position() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_distinct_zero_bands_is_empty() {
        let scale = distinct(0, "Set3").unwrap();
        assert!(scale.is_empty());
    }

    #[test]
    fn test_unknown_palette() {
        let err = distinct(3, "NoSuchPalette").unwrap_err();
        assert!(matches!(err, VizError::UnknownPalette(_)));
    }

    #[test]
    fn test_palette_exhausted() {
        // Set1 has 9 colors
        let err = distinct(10, "Set1").unwrap_err();
        match err {
            VizError::PaletteExhausted {
                requested,
                available,
            } => {
                assert_eq!(requested, 10);
                assert_eq!(available, 9);
            }
            other => panic!("expected PaletteExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_continuous_single_stops() {
        let scale = continuous(4, "Set3").unwrap();
        assert_eq!(scale.len(), 4);
        assert_eq!(scale.stops()[0].position(), 0.0);
        assert_eq!(scale.stops()[1].position(), 0.25);
    }

    #[test]
    fn test_pure_function_of_inputs() {
        assert_eq!(distinct(5, "Set3").unwrap(), distinct(5, "Set3").unwrap());
    }
}
