//! Shared test utilities for the marine-surface-viz workspace.
//!
//! Provides grid fixtures and temporary on-disk table directories used by
//! the parser and store tests.
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

use std::fs;
use std::path::PathBuf;

use surface_common::{DatasetGroup, Grid2d};
use tempfile::TempDir;

/// A grid whose value at (row, col) is `row * cols + col`, handy for
/// asserting orientation after transposes.
pub fn ramp_grid(rows: usize, cols: usize) -> Grid2d {
    let data = (0..rows * cols).map(|i| i as f64).collect();
    Grid2d::new(rows, cols, data).expect("ramp grid dimensions")
}

/// A grid of the exact shape a dataset group expects, filled with `value`.
pub fn group_grid(group: DatasetGroup, value: f64) -> Grid2d {
    let (rows, cols) = group.expected_shape();
    Grid2d::filled(rows, cols, value)
}

/// Serialize a grid to the tab-delimited flat-file format.
pub fn grid_to_table(grid: &Grid2d) -> String {
    let mut out = String::new();
    for row in grid.iter_rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join("\t"));
        out.push('\n');
    }
    out
}

/// Temporary directory holding named grid table files.
pub struct TableDir {
    dir: TempDir,
}

impl TableDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write a grid as `<name>.txt` and return its path.
    pub fn write_table(&self, name: &str, grid: &Grid2d) -> PathBuf {
        let path = self.dir.path().join(format!("{}.txt", name));
        fs::write(&path, grid_to_table(grid)).expect("write table file");
        path
    }

    /// Write raw text as `<name>.txt`, for malformed-input tests.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(format!("{}.txt", name));
        fs::write(&path, content).expect("write raw file");
        path
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for TableDir {
    fn default() -> Self {
        Self::new()
    }
}
