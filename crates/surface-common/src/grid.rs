//! Rectangular 2D value grids for scalar-field tables.

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// A rectangular grid of f64 values in row-major order.
///
/// Rows correspond to the y coordinate vector of a surface, columns to x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2d {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2d {
    /// Create a grid from row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> VizResult<Self> {
        if data.len() != rows * cols {
            return Err(VizError::MalformedSurface(format!(
                "expected {}x{} = {} values, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a grid from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> VizResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(VizError::MalformedSurface(format!(
                    "ragged grid: row {} has {} values, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
        }

        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Grid filled with a constant value.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols) pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Raw row-major values.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Rows as slices, outermost first.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols.max(1))
    }

    /// Maximum value in the grid. Empty grids report 0.
    pub fn max(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Minimum value in the grid. Empty grids report 0.
    pub fn min(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Value at the last row/column corner, the anchor point for
    /// surface-name annotations.
    pub fn last_corner(&self) -> Option<f64> {
        self.data.last().copied()
    }

    /// A new grid with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Element-wise combination of two grids of identical shape.
    pub fn zip_map<F>(&self, other: &Grid2d, f: F) -> VizResult<Grid2d>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(VizError::ShapeMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Grid2d {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rectangular() {
        let grid = Grid2d::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(grid.shape(), (2, 2));
        assert_eq!(grid.get(1, 0), Some(3.0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Grid2d::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, VizError::MalformedSurface(_)));
    }

    #[test]
    fn test_transpose() {
        let grid = Grid2d::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = grid.transposed();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(0, 1), Some(4.0));
        assert_eq!(t.get(2, 0), Some(3.0));
    }

    #[test]
    fn test_max_min() {
        let grid = Grid2d::from_rows(vec![vec![-1.0, 2.0], vec![7.5, 0.0]]).unwrap();
        assert_eq!(grid.max(), 7.5);
        assert_eq!(grid.min(), -1.0);
    }

    #[test]
    fn test_zip_map_shape_mismatch() {
        let a = Grid2d::filled(2, 2, 1.0);
        let b = Grid2d::filled(2, 3, 1.0);
        let err = a.zip_map(&b, |x, y| x - y).unwrap_err();
        assert!(matches!(err, VizError::ShapeMismatch { .. }));
    }
}
