//! Dense square matrix multiply-accumulate, `C += A·B`.
//!
//! Matrices are flattened row-major: element `(i, j)` of an `N x N` matrix is
//! at index `i * N + j`.

use crate::buffers::{NumericBuffer, VectorizedBuffer};
use crate::errors::{KernelError, KernelResult};
use ndarray::linalg::general_mat_mul;

/// Number of floating-point operations performed by one `N x N` multiply-accumulate.
pub fn flop_count(n: usize) -> f64 {
    2.0 * (n as f64).powi(3)
}

fn check_matrices<B: NumericBuffer>(a: &B, b: &B, c: &B, n: usize) -> KernelResult<()> {
    if n == 0 {
        return Err(KernelError::InvalidSize { size: n });
    }
    let expected = n
        .checked_mul(n)
        .ok_or(KernelError::InvalidSize { size: n })?;
    for matrix in [a, b, c] {
        if matrix.len() != expected {
            return Err(KernelError::dimension_mismatch("dgemm", expected, matrix.len()));
        }
    }
    Ok(())
}

/// Triple-loop multiply-accumulate over any buffer representation.
///
/// Loop order is `i`, `j`, `k` (outer to inner). Each `C[i,j]` is accumulated
/// term by term in ascending `k`.
pub fn multiply_accumulate<B: NumericBuffer>(
    a: &B,
    b: &B,
    c: &mut B,
    n: usize,
) -> KernelResult<()> {
    check_matrices(a, b, c, n)?;

    for i in 0..n {
        let row = i * n;
        for j in 0..n {
            let mut acc = c.get(row + j);
            for k in 0..n {
                acc += a.get(row + k) * b.get(k * n + j);
            }
            c.set(row + j, acc);
        }
    }
    Ok(())
}

/// Multiply-accumulate through `ndarray`'s native matrix product.
///
/// Produces the same result as [`multiply_accumulate`] up to floating-point
/// reassociation.
pub fn multiply_accumulate_bulk(
    a: &VectorizedBuffer,
    b: &VectorizedBuffer,
    c: &mut VectorizedBuffer,
    n: usize,
) -> KernelResult<()> {
    check_matrices(a, b, c, n)?;

    let a_view = a.matrix_view(n)?;
    let b_view = b.matrix_view(n)?;
    let mut c_view = c.matrix_view_mut(n)?;
    general_mat_mul(1.0, &a_view, &b_view, 1.0, &mut c_view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffers::{DynamicBuffer, PackedBuffer};

    #[test]
    fn test_ones_times_fives() {
        let n = 8;
        let a = PackedBuffer::filled(n * n, 1.0).unwrap();
        let b = PackedBuffer::filled(n * n, 5.0).unwrap();
        let mut c = PackedBuffer::zeros(n * n).unwrap();
        multiply_accumulate(&a, &b, &mut c, n).unwrap();
        assert!(c.to_vec().iter().all(|&v| v == 5.0 * n as f64));
    }

    #[test]
    fn test_accumulates_into_existing_values() {
        // [1 2; 3 4] * [5 6; 7 8] = [19 22; 43 50]
        let a = DynamicBuffer::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = DynamicBuffer::from_values(&[5.0, 6.0, 7.0, 8.0]).unwrap();
        let mut c = DynamicBuffer::filled(4, 1.0).unwrap();
        multiply_accumulate(&a, &b, &mut c, 2).unwrap();
        assert_eq!(c.to_vec(), vec![20.0, 23.0, 44.0, 51.0]);
    }

    #[test]
    fn test_bulk_matches_loop() {
        let a = VectorizedBuffer::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = VectorizedBuffer::from_values(&[5.0, 6.0, 7.0, 8.0]).unwrap();
        let mut c = VectorizedBuffer::filled(4, 1.0).unwrap();
        multiply_accumulate_bulk(&a, &b, &mut c, 2).unwrap();
        assert_eq!(c.to_vec(), vec![20.0, 23.0, 44.0, 51.0]);
    }

    #[test]
    fn test_zero_dimension_is_invalid() {
        let a = PackedBuffer::zeros(1).unwrap();
        let mut c = PackedBuffer::zeros(1).unwrap();
        assert_eq!(
            multiply_accumulate(&a, &a.clone(), &mut c, 0),
            Err(KernelError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn test_flop_count() {
        assert_eq!(flop_count(10), 2000.0);
    }
}
