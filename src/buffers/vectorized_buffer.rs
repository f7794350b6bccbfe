//! `ndarray`-backed buffer supporting bulk operations.

use super::{check_len, NumericBuffer, Representation};
use crate::errors::{KernelError, KernelResult};
use ndarray::{Array1, ArrayView2, ArrayViewMut2};

/// Buffer backed by a one-dimensional `ndarray` array.
///
/// Element access through [`NumericBuffer`] works like the other
/// representations. The array accessors expose whole-array arithmetic for the
/// bulk kernel paths.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizedBuffer {
    values: Array1<f64>,
}

impl VectorizedBuffer {
    pub fn from_array(values: Array1<f64>) -> KernelResult<Self> {
        check_len(values.len())?;
        Ok(Self { values })
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn as_array_mut(&mut self) -> &mut Array1<f64> {
        &mut self.values
    }

    /// Views the buffer as an `n x n` row-major matrix.
    pub fn matrix_view(&self, n: usize) -> KernelResult<ArrayView2<'_, f64>> {
        let len = self.values.len();
        self.values
            .view()
            .into_shape((n, n))
            .map_err(|_| KernelError::dimension_mismatch("matrix view", n * n, len))
    }

    /// Mutable counterpart of [`VectorizedBuffer::matrix_view`].
    pub fn matrix_view_mut(&mut self, n: usize) -> KernelResult<ArrayViewMut2<'_, f64>> {
        let len = self.values.len();
        self.values
            .view_mut()
            .into_shape((n, n))
            .map_err(|_| KernelError::dimension_mismatch("matrix view", n * n, len))
    }
}

impl NumericBuffer for VectorizedBuffer {
    fn filled(len: usize, value: f64) -> KernelResult<Self> {
        check_len(len)?;
        Ok(Self {
            values: Array1::from_elem(len, value),
        })
    }

    fn representation(&self) -> Representation {
        Representation::Vectorized
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    fn from_values(values: &[f64]) -> KernelResult<Self> {
        check_len(values.len())?;
        Ok(Self {
            values: Array1::from(values.to_vec()),
        })
    }

    fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }

    fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}
