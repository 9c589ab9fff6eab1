//! Figure export service.
//!
//! Loads a surface dataset from flat table files and writes every
//! configured figure as a Plotly-compatible JSON document: one file per
//! comparison pair plus the percentage-difference figure.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use figure_builder::Figure;
use surface_store::{DatasetConfig, SurfaceStore};

#[derive(Parser, Debug)]
#[command(name = "figure-export")]
#[command(about = "Export surface comparison figures as Plotly JSON")]
struct Args {
    /// Directory holding the tab-delimited table files
    #[arg(short, long)]
    data_dir: PathBuf,

    /// Dataset manifest (YAML); defaults to the built-in SEE dataset
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the figure JSON files
    #[arg(short, long, default_value = "figures")]
    out_dir: PathBuf,

    /// Layout of the difference figure
    #[arg(long, value_enum, default_value_t = DiffForm::Figure)]
    diff_form: DiffForm,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DiffForm {
    /// All difference surfaces in one scene
    Figure,
    /// One scene per difference surface, 2x2
    Grid,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting figure export");

    let config = match &args.config {
        Some(path) => DatasetConfig::from_yaml(path)
            .with_context(|| format!("loading manifest {}", path.display()))?,
        None => DatasetConfig::builtin(),
    };
    info!(
        surfaces = config.surfaces.len(),
        comparisons = config.comparisons.len(),
        "Loaded manifest"
    );

    let store = SurfaceStore::load(&config, &args.data_dir)
        .with_context(|| format!("loading tables from {}", args.data_dir.display()))?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut written = 0usize;

    for cmp in store.comparisons() {
        let figure = match store.comparison_figure(&cmp.first, &cmp.second) {
            Ok(figure) => figure,
            Err(e) => {
                warn!(id = %cmp.id, error = %e, "Skipping comparison figure");
                continue;
            }
        };
        let path = args.out_dir.join(format!("comparison-{}.json", cmp.id));
        write_figure(&figure, &path, args.pretty)?;
        info!(id = %cmp.id, path = %path.display(), "Wrote comparison figure");
        written += 1;
    }

    if !store.difference_surfaces().is_empty() {
        let figure = match args.diff_form {
            DiffForm::Figure => store.difference_figure()?,
            DiffForm::Grid => store.difference_grid()?,
        };
        let path = args.out_dir.join("difference.json");
        write_figure(&figure, &path, args.pretty)?;
        info!(
            pairs = store.difference_surfaces().len(),
            path = %path.display(),
            "Wrote difference figure"
        );
        written += 1;
    }

    info!(figures = written, "Figure export completed");
    Ok(())
}

fn write_figure(figure: &Figure, path: &std::path::Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        figure.to_json_pretty()?
    } else {
        figure.to_json()?
    };
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
