//! Load-once, immutable surface store.
//!
//! All table files are parsed and validated at startup; render properties
//! (colorscales, band counts) and difference surfaces are computed here
//! once. Figure construction afterward only reads.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use figure_builder::{
    colorscale, comparison_figure, difference_figure, difference_grid, DifferenceSurface, Figure,
};
use surface_common::{Surface, SurfaceKey, SurfaceProperties, VizError, VizResult};
use table_parser::{load_grid_file, Orientation};

use crate::config::{ColorscaleStyle, ComparisonSpec, DatasetConfig, SurfaceEntry};

/// In-memory dataset: every configured surface with its precomputed render
/// properties, plus the precomputed difference surfaces.
#[derive(Debug)]
pub struct SurfaceStore {
    properties: HashMap<String, SurfaceProperties>,
    /// Manifest order, for deterministic iteration.
    order: Vec<SurfaceKey>,
    comparisons: Vec<ComparisonSpec>,
    diff_title: Option<String>,
    diff_surfaces: Vec<DifferenceSurface>,
}

impl SurfaceStore {
    /// Load every surface named by the manifest from `data_dir`. Any
    /// missing file, malformed table, wrong grid shape, or unresolvable
    /// key fails the whole load.
    pub fn load(config: &DatasetConfig, data_dir: &Path) -> VizResult<Self> {
        let mut properties = HashMap::with_capacity(config.surfaces.len());
        let mut order = Vec::with_capacity(config.surfaces.len());

        for entry in &config.surfaces {
            let props = load_entry(entry, data_dir, &config.palette)?;
            info!(
                key = %props.key,
                group = %props.group,
                max_z = props.surface.max_z(),
                n_colors = props.n_colors,
                "loaded surface"
            );
            if properties.insert(entry.key.clone(), props).is_some() {
                return Err(VizError::Load(format!(
                    "duplicate surface key in manifest: {}",
                    entry.key
                )));
            }
            order.push(SurfaceKey::new(&entry.key));
        }

        let store = Self {
            properties,
            order,
            comparisons: config.comparisons.clone(),
            diff_title: config.diff.as_ref().map(|d| d.title.clone()),
            diff_surfaces: Vec::new(),
        };

        // Comparison specs must resolve even though their figures are
        // built lazily.
        for cmp in &store.comparisons {
            store.get(&cmp.first)?;
            store.get(&cmp.second)?;
        }

        let mut diff_surfaces = Vec::new();
        if let Some(diff) = &config.diff {
            for pair in &diff.pairs {
                let reference = store.get(&pair.reference)?;
                let compare = store.get(&pair.compare)?;
                debug!(
                    label = %pair.label,
                    reference = %pair.reference,
                    compare = %pair.compare,
                    "computing difference surface"
                );
                diff_surfaces.push(DifferenceSurface::compute(&pair.label, reference, compare)?);
            }
        }

        Ok(Self {
            diff_surfaces,
            ..store
        })
    }

    /// Look up a surface by key.
    pub fn get(&self, key: &str) -> VizResult<&SurfaceProperties> {
        self.properties
            .get(key)
            .ok_or_else(|| VizError::UnknownKey(key.to_string()))
    }

    /// Surface keys in manifest order.
    pub fn keys(&self) -> impl Iterator<Item = &SurfaceKey> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The configured comparison figures.
    pub fn comparisons(&self) -> &[ComparisonSpec] {
        &self.comparisons
    }

    /// All same-group key pairs in manifest order, whether configured as
    /// comparisons or not.
    pub fn comparison_keys(&self) -> Vec<(SurfaceKey, SurfaceKey)> {
        let mut pairs = Vec::new();
        for (i, a) in self.order.iter().enumerate() {
            for b in &self.order[i + 1..] {
                let same_group = match (self.properties.get(a.as_str()), self.properties.get(b.as_str())) {
                    (Some(pa), Some(pb)) => pa.group == pb.group,
                    _ => false,
                };
                if same_group {
                    pairs.push((a.clone(), b.clone()));
                }
            }
        }
        pairs
    }

    /// Build the comparison figure for two stored surfaces.
    pub fn comparison_figure(&self, first: &str, second: &str) -> VizResult<Figure> {
        comparison_figure(self.get(first)?, self.get(second)?)
    }

    /// Precomputed difference surfaces, in configured pair order.
    pub fn difference_surfaces(&self) -> &[DifferenceSurface] {
        &self.diff_surfaces
    }

    pub fn difference_title(&self) -> Option<&str> {
        self.diff_title.as_deref()
    }

    /// Combined single-scene difference figure over all configured pairs.
    pub fn difference_figure(&self) -> VizResult<Figure> {
        difference_figure(&self.diff_surfaces, self.diff_title())
    }

    /// 2x2 subplot difference figure over all configured pairs.
    pub fn difference_grid(&self) -> VizResult<Figure> {
        difference_grid(&self.diff_surfaces, self.diff_title())
    }

    fn diff_title(&self) -> &str {
        self.diff_title.as_deref().unwrap_or("")
    }
}

fn load_entry(
    entry: &SurfaceEntry,
    data_dir: &Path,
    palette: &str,
) -> VizResult<SurfaceProperties> {
    let path = data_dir.join(&entry.file);
    let orientation = if entry.transpose {
        Orientation::Transposed
    } else {
        Orientation::AsStored
    };

    let grid = load_grid_file(&path, orientation)
        .map_err(|e| VizError::Load(format!("{}: {}", path.display(), e)))?;

    let expected = entry.group.expected_shape();
    if grid.shape() != expected {
        return Err(VizError::Load(format!(
            "{}: grid is {}x{} but group {} expects {}x{}",
            path.display(),
            grid.shape().0,
            grid.shape().1,
            entry.group,
            expected.0,
            expected.1
        )));
    }

    let axes = entry.group.axes();
    let surface = Surface::new(axes.x.values.clone(), axes.y.values.clone(), grid)?;

    let n_colors = colorscale::band_count(surface.max_z(), entry.group.color_scale_factor());
    let scale = match entry.style {
        ColorscaleStyle::Distinct => colorscale::distinct(n_colors, palette)?,
        ColorscaleStyle::Continuous => colorscale::continuous(n_colors, palette)?,
    };

    Ok(SurfaceProperties {
        key: SurfaceKey::new(&entry.key),
        name: entry.display_name().to_string(),
        group: entry.group,
        surface,
        colorscale: scale,
        n_colors,
    })
}
