//! Dataset manifest: which table files to load, how to label them, and
//! which figures to build from them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use surface_common::palette::DEFAULT_PALETTE;
use surface_common::{DatasetGroup, VizError, VizResult};

/// File-name marker for tables stored with their axes swapped. Applied
/// when a manifest is constructed from a directory walk; the loaded
/// manifest always carries the explicit `transpose` flag.
const TRANSPOSE_MARKER: &str = "WPI";

/// Colorscale style of one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorscaleStyle {
    /// Flat color per band (two stops per band).
    #[default]
    Distinct,
    /// One stop per band, interpolated by the renderer.
    Continuous,
}

/// One table file to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceEntry {
    /// Lookup key, e.g. "25m@15s"
    pub key: String,
    /// Annotation label; defaults to the key
    #[serde(default)]
    pub name: Option<String>,
    pub group: DatasetGroup,
    /// Path relative to the data directory
    pub file: String,
    /// Transpose the table after load
    #[serde(default)]
    pub transpose: bool,
    #[serde(default)]
    pub style: ColorscaleStyle,
}

impl SurfaceEntry {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.key)
    }
}

/// A configured comparison figure: two surface keys plus a display title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSpec {
    /// Output identifier, e.g. "25m50m@10s"
    pub id: String,
    pub title: String,
    pub first: String,
    pub second: String,
}

/// A configured difference pair. `reference` is the first operand of the
/// percentage difference and supplies the normalizing span; the transform
/// is non-commutative, so the roles are explicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffPairSpec {
    pub label: String,
    pub reference: String,
    pub compare: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffConfig {
    pub title: String,
    pub pairs: Vec<DiffPairSpec>,
}

/// Top-level dataset manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_palette")]
    pub palette: String,
    pub surfaces: Vec<SurfaceEntry>,
    #[serde(default)]
    pub comparisons: Vec<ComparisonSpec>,
    #[serde(default)]
    pub diff: Option<DiffConfig>,
}

fn default_palette() -> String {
    DEFAULT_PALETTE.to_string()
}

impl DatasetConfig {
    /// Load a manifest from a YAML file.
    pub fn from_yaml(path: &Path) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VizError::Load(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| VizError::Load(format!("{}: {}", path.display(), e)))
    }

    /// The built-in SEE-index dataset: four tables (25 m and 50 m
    /// platforms at 10 s and 15 s wave period), their pairwise comparison
    /// figures, and the four difference pairs normalized against the
    /// "50m@15s" reference.
    pub fn builtin() -> Self {
        let surface = |key: &str| SurfaceEntry {
            key: key.to_string(),
            name: None,
            group: DatasetGroup::CurrentSee,
            file: format!("{}.txt", key),
            transpose: false,
            style: ColorscaleStyle::Distinct,
        };

        let comparison = |id: &str, title: &str, first: &str, second: &str| ComparisonSpec {
            id: id.to_string(),
            title: title.to_string(),
            first: first.to_string(),
            second: second.to_string(),
        };

        let pair = |label: &str, reference: &str, compare: &str| DiffPairSpec {
            label: label.to_string(),
            reference: reference.to_string(),
            compare: compare.to_string(),
        };

        Self {
            palette: default_palette(),
            surfaces: vec![
                surface("25m@10s"),
                surface("50m@10s"),
                surface("25m@15s"),
                surface("50m@15s"),
            ],
            comparisons: vec![
                comparison(
                    "25m50m@10s",
                    "SEE index at 25m and 50m <br> Influence of current and wave (10s wave period)",
                    "25m@10s",
                    "50m@10s",
                ),
                comparison(
                    "25m50m@15s",
                    "SEE index at 25m and 50m <br> Influence of current and wave (15s wave period)",
                    "25m@15s",
                    "50m@15s",
                ),
                comparison(
                    "25m@10s15s",
                    "SEE index at 25m <br> Influence of current and wave (10s and 15s wave period)",
                    "25m@10s",
                    "25m@15s",
                ),
                comparison(
                    "50m@10s15s",
                    "SEE index at 50m <br> Influence of current and wave (10s and 15s wave period)",
                    "50m@10s",
                    "50m@15s",
                ),
            ],
            // Every surface diffed against the same reference; the
            // reference's own pair renders as the zero plane.
            diff: Some(DiffConfig {
                title: "%-Difference between the four surfaces, using 50m at 15s wave period as reference"
                    .to_string(),
                pairs: vec![
                    pair("25m@10s", "50m@15s", "25m@10s"),
                    pair("50m@10s", "50m@15s", "50m@10s"),
                    pair("25m@15s", "50m@15s", "25m@15s"),
                    pair("50m@15s", "50m@15s", "50m@15s"),
                ],
            }),
        }
    }

    /// Build a manifest by walking a data directory: every `.txt` file
    /// becomes one entry of `group`, keyed by its file stem. The transpose
    /// flag is set here, from the file naming convention, so nothing
    /// downstream ever inspects names.
    pub fn discover(data_dir: &Path, group: DatasetGroup) -> VizResult<Self> {
        let mut surfaces = Vec::new();

        for entry in WalkDir::new(data_dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| VizError::Load(e.to_string()))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| VizError::Load(format!("unreadable file name: {}", path.display())))?;

            let file = path
                .strip_prefix(data_dir)
                .unwrap_or(path)
                .to_string_lossy()
                .into_owned();

            surfaces.push(SurfaceEntry {
                key: stem.to_string(),
                name: None,
                group,
                file,
                transpose: stem.contains(TRANSPOSE_MARKER),
                style: ColorscaleStyle::Distinct,
            });
        }

        if surfaces.is_empty() {
            return Err(VizError::Load(format!(
                "no table files found under {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            palette: default_palette(),
            surfaces,
            comparisons: Vec::new(),
            diff: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_manifest_is_consistent() {
        let config = DatasetConfig::builtin();
        assert_eq!(config.surfaces.len(), 4);
        let keys: Vec<&str> = config.surfaces.iter().map(|s| s.key.as_str()).collect();

        for cmp in &config.comparisons {
            assert!(keys.contains(&cmp.first.as_str()), "{}", cmp.first);
            assert!(keys.contains(&cmp.second.as_str()), "{}", cmp.second);
        }
        let diff = config.diff.as_ref().unwrap();
        assert_eq!(diff.pairs.len(), 4);
        for pair in &diff.pairs {
            assert!(keys.contains(&pair.reference.as_str()));
            assert!(keys.contains(&pair.compare.as_str()));
        }
    }

    #[test]
    fn test_manifest_yaml_roundtrip() {
        let config = DatasetConfig::builtin();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: DatasetConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.surfaces.len(), config.surfaces.len());
        assert_eq!(back.palette, config.palette);
    }

    #[test]
    fn test_yaml_defaults() {
        let yaml = r#"
surfaces:
  - key: 25m@10s
    group: current-see
    file: 25m@10s.txt
"#;
        let config: DatasetConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.palette, "Set3");
        assert!(!config.surfaces[0].transpose);
        assert_eq!(config.surfaces[0].style, ColorscaleStyle::Distinct);
        assert!(config.comparisons.is_empty());
        assert!(config.diff.is_none());
    }
}
