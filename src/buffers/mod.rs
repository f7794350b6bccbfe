//! Numeric buffer representations.
//!
//! Every kernel in this crate is written once against the [`NumericBuffer`]
//! trait. Three storage strategies implement it so the same kernel body can be
//! timed over each of them:
//!
//! - [`DynamicBuffer`]: a growable vector of individually boxed doubles, one
//!   heap allocation per element.
//! - [`PackedBuffer`]: a fixed-length contiguous slice of `f64`.
//! - [`VectorizedBuffer`]: an `ndarray` array exposing bulk arithmetic.
//!
//! [`AnyBuffer`] picks one of the three at run time from a [`Representation`]
//! tag.

use crate::errors::{KernelError, KernelResult};
use serde::{Deserialize, Serialize};
use std::fmt;

mod dynamic_buffer;
mod packed_buffer;
mod scalar_field;
mod vectorized_buffer;

pub use dynamic_buffer::DynamicBuffer;
pub use packed_buffer::PackedBuffer;
pub use scalar_field::ScalarField;
pub use vectorized_buffer::VectorizedBuffer;

/// Size in bytes of a single buffer element, identical for every representation.
pub const ELEMENT_BYTES: usize = std::mem::size_of::<f64>();

/// Storage strategy tag used to select a buffer implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    Dynamic,
    Packed,
    Vectorized,
}

impl Representation {
    /// All representations, in the order benchmarks report them.
    pub const ALL: [Representation; 3] = [
        Representation::Dynamic,
        Representation::Packed,
        Representation::Vectorized,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Representation::Dynamic => "dynamic",
            Representation::Packed => "packed",
            Representation::Vectorized => "vectorized",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-length, zero-indexed sequence of doubles.
///
/// Indexing out of bounds panics, as with slices. Kernels validate shapes up
/// front and never index outside `0..len()`.
pub trait NumericBuffer: Clone {
    /// Allocates a buffer of `len` elements, each set to `value`.
    fn filled(len: usize, value: f64) -> KernelResult<Self>;

    fn representation(&self) -> Representation;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> f64;

    fn set(&mut self, index: usize, value: f64);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocates a zero-filled buffer.
    fn zeros(len: usize) -> KernelResult<Self> {
        Self::filled(len, 0.0)
    }

    /// Allocates a zero-filled buffer of the same representation as `self`.
    ///
    /// Kernels allocate their outputs through this so that run-time selected
    /// storage carries over from inputs to outputs.
    fn zeros_like(&self, len: usize) -> KernelResult<Self> {
        Self::zeros(len)
    }

    /// Allocates a buffer holding a copy of `values`.
    fn from_values(values: &[f64]) -> KernelResult<Self> {
        let mut buffer = Self::zeros(values.len())?;
        for (i, &value) in values.iter().enumerate() {
            buffer.set(i, value);
        }
        Ok(buffer)
    }

    /// Overwrites every element with `value`.
    fn fill(&mut self, value: f64) {
        for i in 0..self.len() {
            self.set(i, value);
        }
    }

    fn to_vec(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

pub(crate) fn check_len(len: usize) -> KernelResult<()> {
    if len == 0 {
        return Err(KernelError::InvalidSize { size: len });
    }
    Ok(())
}

/// A buffer whose representation is chosen at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBuffer {
    Dynamic(DynamicBuffer),
    Packed(PackedBuffer),
    Vectorized(VectorizedBuffer),
}

/// Allocates a buffer of the requested representation, pre-filled with `value`.
pub fn allocate(representation: Representation, len: usize, value: f64) -> KernelResult<AnyBuffer> {
    let buffer = match representation {
        Representation::Dynamic => AnyBuffer::Dynamic(DynamicBuffer::filled(len, value)?),
        Representation::Packed => AnyBuffer::Packed(PackedBuffer::filled(len, value)?),
        Representation::Vectorized => {
            AnyBuffer::Vectorized(VectorizedBuffer::filled(len, value)?)
        }
    };
    Ok(buffer)
}

impl NumericBuffer for AnyBuffer {
    /// Type-level construction has no tag to go on and defaults to packed
    /// storage; use [`allocate`] to choose.
    fn filled(len: usize, value: f64) -> KernelResult<Self> {
        allocate(Representation::Packed, len, value)
    }

    fn zeros_like(&self, len: usize) -> KernelResult<Self> {
        allocate(self.representation(), len, 0.0)
    }

    fn representation(&self) -> Representation {
        match self {
            AnyBuffer::Dynamic(_) => Representation::Dynamic,
            AnyBuffer::Packed(_) => Representation::Packed,
            AnyBuffer::Vectorized(_) => Representation::Vectorized,
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyBuffer::Dynamic(buffer) => buffer.len(),
            AnyBuffer::Packed(buffer) => buffer.len(),
            AnyBuffer::Vectorized(buffer) => buffer.len(),
        }
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match self {
            AnyBuffer::Dynamic(buffer) => buffer.get(index),
            AnyBuffer::Packed(buffer) => buffer.get(index),
            AnyBuffer::Vectorized(buffer) => buffer.get(index),
        }
    }

    #[inline]
    fn set(&mut self, index: usize, value: f64) {
        match self {
            AnyBuffer::Dynamic(buffer) => buffer.set(index, value),
            AnyBuffer::Packed(buffer) => buffer.set(index, value),
            AnyBuffer::Vectorized(buffer) => buffer.set(index, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_every_representation() {
        for representation in Representation::ALL {
            let buffer = allocate(representation, 16, 1.5).expect("allocation should succeed");
            assert_eq!(buffer.representation(), representation);
            assert_eq!(buffer.len(), 16);
            assert!(buffer.to_vec().iter().all(|&v| v == 1.5));
        }
    }

    #[test]
    fn test_allocate_zero_length_is_invalid() {
        for representation in Representation::ALL {
            assert_eq!(
                allocate(representation, 0, 0.0),
                Err(KernelError::InvalidSize { size: 0 })
            );
        }
    }

    #[test]
    fn test_indexed_write_is_uniform() {
        for representation in Representation::ALL {
            let mut buffer = allocate(representation, 4, 0.0).unwrap();
            buffer.set(2, 7.25);
            assert_eq!(buffer.to_vec(), vec![0.0, 0.0, 7.25, 0.0]);
        }
    }

    #[test]
    fn test_zeros_like_keeps_runtime_representation() {
        for representation in Representation::ALL {
            let buffer = allocate(representation, 3, 2.0).unwrap();
            let zeros = buffer.zeros_like(5).unwrap();
            assert_eq!(zeros.representation(), representation);
            assert_eq!(zeros.to_vec(), vec![0.0; 5]);
        }
        assert_eq!(
            AnyBuffer::zeros(4).unwrap().representation(),
            Representation::Packed
        );
    }

    #[test]
    fn test_representation_serde_names() {
        let json = serde_json::to_string(&Representation::ALL).unwrap();
        assert_eq!(json, r#"["dynamic","packed","vectorized"]"#);
    }
}
