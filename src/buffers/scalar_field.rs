//! Two-dimensional grid stored over a flat numeric buffer.

use super::NumericBuffer;
use crate::errors::{KernelError, KernelResult};

/// A `rows x cols` grid of doubles laid out row-major in a single buffer.
///
/// Cell `(i, j)` lives at flat index `i * cols + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField<B: NumericBuffer> {
    rows: usize,
    cols: usize,
    data: B,
}

impl<B: NumericBuffer> ScalarField<B> {
    /// Allocates a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> KernelResult<Self> {
        if rows == 0 {
            return Err(KernelError::InvalidSize { size: rows });
        }
        if cols == 0 {
            return Err(KernelError::InvalidSize { size: cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(KernelError::InvalidSize { size: usize::MAX })?;
        Ok(Self {
            rows,
            cols,
            data: B::filled(len, value)?,
        })
    }

    /// Wraps an existing buffer, which must hold exactly `rows * cols` cells.
    pub fn from_buffer(rows: usize, cols: usize, data: B) -> KernelResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(KernelError::InvalidSize { size: 0 });
        }
        let expected = rows.saturating_mul(cols);
        if data.len() != expected {
            return Err(KernelError::dimension_mismatch(
                "scalar field",
                expected,
                data.len(),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data.get(row * self.cols + col)
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data.set(row * self.cols + col, value);
    }

    pub fn as_buffer(&self) -> &B {
        &self.data
    }

    pub fn into_buffer(self) -> B {
        self.data
    }

    /// True when `(row, col)` sits on the first or last row or column.
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.rows - 1 || col == self.cols - 1
    }

    /// Largest absolute cell-wise difference to `other`.
    ///
    /// Both fields must share the same shape.
    pub fn max_abs_diff(&self, other: &Self) -> KernelResult<f64> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(KernelError::dimension_mismatch(
                "scalar field difference",
                self.rows * self.cols,
                other.rows * other.cols,
            ));
        }
        let mut max = 0.0f64;
        for i in 0..self.data.len() {
            max = max.max((self.data.get(i) - other.data.get(i)).abs());
        }
        Ok(max)
    }
}
