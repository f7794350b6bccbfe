//! Growable buffer of individually boxed doubles.

use super::{check_len, NumericBuffer, Representation};
use crate::errors::KernelResult;

/// Buffer that stores every element behind its own heap allocation.
///
/// Element access goes through a pointer per value, which is the cost this
/// representation exists to measure.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicBuffer {
    values: Vec<Box<f64>>,
}

impl DynamicBuffer {
    /// Creates an empty buffer that can grow with [`DynamicBuffer::push`].
    ///
    /// Kernels reject empty buffers, so callers must push at least one value
    /// before handing it to one.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(Box::new(value));
    }

    /// Resizes in place, boxing `value` for every new slot.
    pub fn resize(&mut self, len: usize, value: f64) {
        if len <= self.values.len() {
            self.values.truncate(len);
        } else {
            let extra = len - self.values.len();
            self.values.extend((0..extra).map(|_| Box::new(value)));
        }
    }
}

impl Default for DynamicBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericBuffer for DynamicBuffer {
    fn filled(len: usize, value: f64) -> KernelResult<Self> {
        check_len(len)?;
        let values = (0..len).map(|_| Box::new(value)).collect();
        Ok(Self { values })
    }

    fn representation(&self) -> Representation {
        Representation::Dynamic
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        *self.values[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: f64) {
        *self.values[index] = value;
    }
}
