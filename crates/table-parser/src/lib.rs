//! Tab-delimited numeric grid table parser.
//!
//! The flat-file inputs are plain-text rectangular tables: one grid row per
//! line, fields separated by tabs, no header. Parsing is strict; a ragged
//! row or unparseable field aborts the load (startup failures are fatal,
//! there is no partial dataset).

pub mod error;

use std::fs;
use std::path::Path;

use surface_common::Grid2d;

pub use error::{TableError, TableResult};

/// Whether a table file's rows already follow the dataset's physical axis
/// convention or must be transposed after load.
///
/// The decision is carried explicitly by the dataset manifest; it is keyed
/// by a file naming convention when the manifest is constructed, never
/// inferred from the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Rows in the file are grid rows.
    #[default]
    AsStored,
    /// Rows in the file are grid columns; transpose after parsing.
    Transposed,
}

impl Orientation {
    fn apply(self, grid: Grid2d) -> Grid2d {
        match self {
            Orientation::AsStored => grid,
            Orientation::Transposed => grid.transposed(),
        }
    }
}

/// Parse a tab-delimited grid from text.
pub fn parse_grid(input: &str) -> TableResult<Grid2d> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut expected_cols = 0usize;

    for (line_idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(expected_cols);
        for (col_idx, field) in line.split('\t').enumerate() {
            let field = field.trim();
            let value: f64 = field.parse().map_err(|_| TableError::Parse {
                line: line_idx + 1,
                column: col_idx + 1,
                value: field.to_string(),
            })?;
            row.push(value);
        }

        if rows.is_empty() {
            expected_cols = row.len();
        } else if row.len() != expected_cols {
            return Err(TableError::RaggedRow {
                line: line_idx + 1,
                found: row.len(),
                expected: expected_cols,
            });
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(TableError::Empty);
    }

    // from_rows cannot fail here, row lengths were checked above
    Grid2d::from_rows(rows).map_err(|_| TableError::Empty)
}

/// Load a grid table from a file, applying the orientation rule.
pub fn load_grid_file(path: &Path, orientation: Orientation) -> TableResult<Grid2d> {
    let content = fs::read_to_string(path)?;
    let grid = parse_grid(&content)?;
    Ok(orientation.apply(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangular() {
        let grid = parse_grid("1\t2\t3\n4\t5\t6\n").unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.get(1, 2), Some(6.0));
    }

    #[test]
    fn test_parse_floats_and_negatives() {
        let grid = parse_grid("0.5\t-1.25\n1e2\t0\n").unwrap();
        assert_eq!(grid.get(0, 1), Some(-1.25));
        assert_eq!(grid.get(1, 0), Some(100.0));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid = parse_grid("1\t2\n\n3\t4\n\n").unwrap();
        assert_eq!(grid.shape(), (2, 2));
    }

    #[test]
    fn test_parse_ragged() {
        let err = parse_grid("1\t2\t3\n4\t5\n").unwrap_err();
        match err {
            TableError::RaggedRow {
                line,
                found,
                expected,
            } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("expected RaggedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bad_field() {
        let err = parse_grid("1\tx\n").unwrap_err();
        match err {
            TableError::Parse { line, column, value } => {
                assert_eq!(line, 1);
                assert_eq!(column, 2);
                assert_eq!(value, "x");
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_grid(""), Err(TableError::Empty)));
        assert!(matches!(parse_grid("\n  \n"), Err(TableError::Empty)));
    }

    #[test]
    fn test_orientation_transpose() {
        let grid = parse_grid("1\t2\t3\n4\t5\t6\n").unwrap();
        let transposed = Orientation::Transposed.apply(grid.clone());
        assert_eq!(transposed.shape(), (3, 2));
        assert_eq!(transposed.get(2, 1), Some(6.0));
        assert_eq!(Orientation::AsStored.apply(grid.clone()), grid);
    }
}
