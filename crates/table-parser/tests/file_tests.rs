//! File-level tests for grid table loading.

use table_parser::{load_grid_file, Orientation, TableError};
use test_utils::{ramp_grid, TableDir};

#[test]
fn test_load_file_as_stored() {
    let dir = TableDir::new();
    let grid = ramp_grid(4, 6);
    let path = dir.write_table("25m@10s", &grid);

    let loaded = load_grid_file(&path, Orientation::AsStored).unwrap();
    assert_eq!(loaded, grid);
}

#[test]
fn test_load_file_transposed() {
    let dir = TableDir::new();
    // Period-indexed tables are stored with axes swapped on disk
    let grid = ramp_grid(20, 10);
    let path = dir.write_table("50m_WPI", &grid);

    let loaded = load_grid_file(&path, Orientation::Transposed).unwrap();
    assert_eq!(loaded.shape(), (10, 20));
    assert_eq!(loaded.get(0, 1), grid.get(1, 0));
}

#[test]
fn test_load_missing_file() {
    let dir = TableDir::new();
    let path = dir.path().join("missing.txt");

    let err = load_grid_file(&path, Orientation::AsStored).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let dir = TableDir::new();
    let path = dir.write_raw("bad", "1\t2\n3\n");

    let err = load_grid_file(&path, Orientation::AsStored).unwrap_err();
    assert!(matches!(err, TableError::RaggedRow { .. }));
}
