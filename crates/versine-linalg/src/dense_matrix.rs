//! Dense matrix implementation for small matrices.
//!
//! Dense row-major storage is the right fit for the kernel's workloads:
//! matrices stay small (tens of rows), so cache locality and simple access
//! patterns beat any sparse representation.

use std::ops::{Add, Index, IndexMut, Sub};

use crate::error::LinalgError;

/// Dense `f64` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    /// Matrix entries in row-major order.
    data: Vec<f64>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl DenseMatrix {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![0.0; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRows`] if the rows do not all have the
    /// same length. Rectangularity is a precondition of every algorithm in
    /// this crate, so it is enforced once, at construction.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        if rows.is_empty() {
            return Ok(Self::zeros(0, 0));
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_cols {
                return Err(LinalgError::RaggedRows {
                    row: i,
                    expected: num_cols,
                    got: row.len(),
                });
            }
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the entry at (row, col), or `None` out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.num_rows && col < self.num_cols {
            Some(self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<f64> {
        (0..self.num_rows).map(|row| self[(row, col)]).collect()
    }

    /// Sets a column from a slice.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per row.
    pub fn set_col(&mut self, col: usize, values: &[f64]) {
        assert_eq!(values.len(), self.num_rows);
        for (row, &val) in values.iter().enumerate() {
            self[(row, col)] = val;
        }
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have one entry per column.
    #[must_use]
    pub fn mv(&self, x: &[f64]) -> Vec<f64> {
        assert_eq!(x.len(), self.num_cols);
        (0..self.num_rows).map(|row| dot(self.row(row), x)).collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not agree.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = 0.0;
                for k in 0..self.num_cols {
                    sum += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|v| v * scalar).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Returns the submatrix made of the first `k` rows.
    ///
    /// # Panics
    ///
    /// Panics if `k` exceeds the row count.
    #[must_use]
    pub fn leading_rows(&self, k: usize) -> Self {
        assert!(k <= self.num_rows);
        Self {
            data: self.data[..k * self.num_cols].to_vec(),
            num_rows: k,
            num_cols: self.num_cols,
        }
    }

    /// Returns the submatrix made of the first `k` columns.
    ///
    /// # Panics
    ///
    /// Panics if `k` exceeds the column count.
    #[must_use]
    pub fn leading_cols(&self, k: usize) -> Self {
        assert!(k <= self.num_cols);
        let mut result = Self::zeros(self.num_rows, k);
        for i in 0..self.num_rows {
            for j in 0..k {
                result[(i, j)] = self[(i, j)];
            }
        }
        result
    }
}

/// Dot product of two equal-length vectors.
///
/// # Panics
///
/// Panics if the lengths differ.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm of a vector.
#[must_use]
pub fn norm(a: &[f64]) -> f64 {
    dot(a, a).sqrt()
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl Add for &DenseMatrix {
    type Output = DenseMatrix;

    fn add(self, other: Self) -> DenseMatrix {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl Sub for &DenseMatrix {
    type Output = DenseMatrix;

    fn sub(self, other: Self) -> DenseMatrix {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}
