//! Contiguous fixed-length buffer.

use super::{check_len, NumericBuffer, Representation};
use crate::errors::KernelResult;

/// Buffer backed by a single boxed slice of `f64`.
///
/// The length is fixed at allocation. This is also the baseline the benchmark
/// suites compare other representations against.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedBuffer {
    values: Box<[f64]>,
}

impl PackedBuffer {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

impl NumericBuffer for PackedBuffer {
    fn filled(len: usize, value: f64) -> KernelResult<Self> {
        check_len(len)?;
        Ok(Self {
            values: vec![value; len].into_boxed_slice(),
        })
    }

    fn representation(&self) -> Representation {
        Representation::Packed
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
            values: values.into(),
        })
    }

    fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }

    fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}
