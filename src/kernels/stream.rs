//! STREAM memory-bandwidth operations.
//!
//! | operation | effect                 | buffers touched |
//! |-----------|------------------------|-----------------|
//! | copy      | `c[j] = a[j]`          | 2               |
//! | scale     | `b[j] = s·c[j]`        | 2               |
//! | sum       | `c[j] = a[j] + b[j]`   | 3               |
//! | triad     | `a[j] = b[j] + s·c[j]` | 3               |
//!
//! The free functions take only the buffers an operation touches and check
//! their lengths. [`StreamBuffers`] validates the `a`, `b`, `c` triple once and
//! runs the operations in sequence.

use crate::buffers::{NumericBuffer, VectorizedBuffer, ELEMENT_BYTES};
use crate::errors::{KernelError, KernelResult};
use ndarray::Zip;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four STREAM operations, in their canonical run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamOp {
    Copy,
    Scale,
    Sum,
    Triad,
}

impl StreamOp {
    pub const ALL: [StreamOp; 4] = [
        StreamOp::Copy,
        StreamOp::Scale,
        StreamOp::Sum,
        StreamOp::Triad,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StreamOp::Copy => "copy",
            StreamOp::Scale => "scale",
            StreamOp::Sum => "sum",
            StreamOp::Triad => "triad",
        }
    }

    /// Number of buffers read or written per element.
    pub fn buffers_touched(&self) -> usize {
        match self {
            StreamOp::Copy | StreamOp::Scale => 2,
            StreamOp::Sum | StreamOp::Triad => 3,
        }
    }

    /// Bytes moved by one pass over buffers of `len` elements.
    pub fn bytes_moved(&self, len: usize) -> u64 {
        (self.buffers_touched() * ELEMENT_BYTES) as u64 * len as u64
    }
}

impl fmt::Display for StreamOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_lengths(operation: &str, lengths: &[usize]) -> KernelResult<()> {
    let expected = lengths[0];
    if expected == 0 {
        return Err(KernelError::InvalidSize { size: 0 });
    }
    for &actual in &lengths[1..] {
        if actual != expected {
            return Err(KernelError::dimension_mismatch(operation, expected, actual));
        }
    }
    Ok(())
}

/// `c[j] = a[j]`
pub fn copy<B: NumericBuffer>(a: &B, c: &mut B) -> KernelResult<()> {
    check_lengths("stream copy", &[a.len(), c.len()])?;
    for j in 0..a.len() {
        c.set(j, a.get(j));
    }
    Ok(())
}

/// `b[j] = scalar · c[j]`
pub fn scale<B: NumericBuffer>(c: &B, b: &mut B, scalar: f64) -> KernelResult<()> {
    check_lengths("stream scale", &[c.len(), b.len()])?;
    for j in 0..c.len() {
        b.set(j, scalar * c.get(j));
    }
    Ok(())
}

/// `c[j] = a[j] + b[j]`
pub fn sum<B: NumericBuffer>(a: &B, b: &B, c: &mut B) -> KernelResult<()> {
    check_lengths("stream sum", &[a.len(), b.len(), c.len()])?;
    for j in 0..a.len() {
        c.set(j, a.get(j) + b.get(j));
    }
    Ok(())
}

/// `a[j] = b[j] + scalar · c[j]`
pub fn triad<B: NumericBuffer>(b: &B, c: &B, a: &mut B, scalar: f64) -> KernelResult<()> {
    check_lengths("stream triad", &[b.len(), c.len(), a.len()])?;
    for j in 0..b.len() {
        a.set(j, b.get(j) + scalar * c.get(j));
    }
    Ok(())
}

/// Whole-array variants of the STREAM operations for [`VectorizedBuffer`].
///
/// These write into the existing arrays without allocating temporaries.
pub mod bulk {
    use super::*;

    pub fn copy(a: &VectorizedBuffer, c: &mut VectorizedBuffer) -> KernelResult<()> {
        check_lengths("stream copy", &[a.len(), c.len()])?;
        c.as_array_mut().assign(a.as_array());
        Ok(())
    }

    pub fn scale(c: &VectorizedBuffer, b: &mut VectorizedBuffer, scalar: f64) -> KernelResult<()> {
        check_lengths("stream scale", &[c.len(), b.len()])?;
        Zip::from(b.as_array_mut())
            .and(c.as_array())
            .for_each(|b, &c| *b = scalar * c);
        Ok(())
    }

    pub fn sum(
        a: &VectorizedBuffer,
        b: &VectorizedBuffer,
        c: &mut VectorizedBuffer,
    ) -> KernelResult<()> {
        check_lengths("stream sum", &[a.len(), b.len(), c.len()])?;
        Zip::from(c.as_array_mut())
            .and(a.as_array())
            .and(b.as_array())
            .for_each(|c, &a, &b| *c = a + b);
        Ok(())
    }

    pub fn triad(
        b: &VectorizedBuffer,
        c: &VectorizedBuffer,
        a: &mut VectorizedBuffer,
        scalar: f64,
    ) -> KernelResult<()> {
        check_lengths("stream triad", &[b.len(), c.len(), a.len()])?;
        Zip::from(a.as_array_mut())
            .and(b.as_array())
            .and(c.as_array())
            .for_each(|a, &b, &c| *a = b + scalar * c);
        Ok(())
    }
}

/// The `a`, `b`, `c` buffer triple with a length checked at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamBuffers<B: NumericBuffer> {
    pub a: B,
    pub b: B,
    pub c: B,
}

impl<B: NumericBuffer> StreamBuffers<B> {
    pub fn new(a: B, b: B, c: B) -> KernelResult<Self> {
        check_lengths("stream buffers", &[a.len(), b.len(), c.len()])?;
        Ok(Self { a, b, c })
    }

    /// Allocates the conventional starting state `a = 1`, `b = 2`, `c = 0`.
    pub fn standard(len: usize) -> KernelResult<Self> {
        Self::new(B::filled(len, 1.0)?, B::filled(len, 2.0)?, B::zeros(len)?)
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Runs a single element-wise operation.
    pub fn apply(&mut self, op: StreamOp, scalar: f64) -> KernelResult<()> {
        match op {
            StreamOp::Copy => copy(&self.a, &mut self.c),
            StreamOp::Scale => scale(&self.c, &mut self.b, scalar),
            StreamOp::Sum => sum(&self.a, &self.b, &mut self.c),
            StreamOp::Triad => triad(&self.b, &self.c, &mut self.a, scalar),
        }
    }

    /// Runs copy, scale, sum and triad in order.
    pub fn run_all(&mut self, scalar: f64) -> KernelResult<()> {
        for op in StreamOp::ALL {
            self.apply(op, scalar)?;
        }
        Ok(())
    }
}

impl StreamBuffers<VectorizedBuffer> {
    /// Bulk counterpart of [`StreamBuffers::apply`].
    pub fn apply_bulk(&mut self, op: StreamOp, scalar: f64) -> KernelResult<()> {
        match op {
            StreamOp::Copy => bulk::copy(&self.a, &mut self.c),
            StreamOp::Scale => bulk::scale(&self.c, &mut self.b, scalar),
            StreamOp::Sum => bulk::sum(&self.a, &self.b, &mut self.c),
            StreamOp::Triad => bulk::triad(&self.b, &self.c, &mut self.a, scalar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffers::PackedBuffer;

    #[test]
    fn test_bytes_moved() {
        assert_eq!(StreamOp::Copy.bytes_moved(1024), 2 * 8 * 1024);
        assert_eq!(StreamOp::Scale.bytes_moved(1024), 2 * 8 * 1024);
        assert_eq!(StreamOp::Sum.bytes_moved(1024), 3 * 8 * 1024);
        assert_eq!(StreamOp::Triad.bytes_moved(1024), 3 * 8 * 1024);
    }

    #[test]
    fn test_standard_sequence() {
        let mut buffers = StreamBuffers::<PackedBuffer>::standard(16).unwrap();
        buffers.run_all(2.0).unwrap();
        assert!(buffers.c.to_vec().iter().all(|&v| v == 3.0));
        assert!(buffers.b.to_vec().iter().all(|&v| v == 2.0));
        assert!(buffers.a.to_vec().iter().all(|&v| v == 8.0));
    }

    #[test]
    fn test_bulk_sequence_matches_loop() {
        let mut looped = StreamBuffers::<VectorizedBuffer>::standard(32).unwrap();
        let mut bulk = looped.clone();
        for op in StreamOp::ALL {
            looped.apply(op, 3.0).unwrap();
            bulk.apply_bulk(op, 3.0).unwrap();
        }
        assert_eq!(looped, bulk);
    }

    #[test]
    fn test_mismatch_mutates_nothing() {
        let a = PackedBuffer::filled(4, 1.0).unwrap();
        let b = PackedBuffer::filled(5, 2.0).unwrap();
        let mut c = PackedBuffer::filled(4, 0.0).unwrap();
        assert!(matches!(
            sum(&a, &b, &mut c),
            Err(KernelError::DimensionMismatch { expected: 4, actual: 5, .. })
        ));
        assert_eq!(c.to_vec(), vec![0.0; 4]);
        assert!(StreamBuffers::new(a, b, c).is_err());
    }
}
