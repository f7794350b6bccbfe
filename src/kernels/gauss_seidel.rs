//! Relaxation sweeps toward the discrete Poisson equation.
//!
//! Each sweep replaces every interior cell with the mean of its four axis
//! neighbours. Neighbour values are read from the field as it stood at the
//! start of the sweep, never from cells already updated in the same sweep, so
//! a sweep's output depends only on its input. Boundary rows and columns are
//! left untouched.

use crate::buffers::{NumericBuffer, ScalarField};
use crate::errors::{KernelError, KernelResult};

/// Smallest grid extent with a non-empty interior.
pub const MIN_EXTENT: usize = 3;

fn check_field<B: NumericBuffer>(field: &ScalarField<B>) -> KernelResult<()> {
    if field.rows() < MIN_EXTENT {
        return Err(KernelError::dimension_mismatch(
            "gauss-seidel rows",
            MIN_EXTENT,
            field.rows(),
        ));
    }
    if field.cols() < MIN_EXTENT {
        return Err(KernelError::dimension_mismatch(
            "gauss-seidel cols",
            MIN_EXTENT,
            field.cols(),
        ));
    }
    Ok(())
}

/// Runs one sweep and returns the updated field.
pub fn relax<B: NumericBuffer>(field: &ScalarField<B>) -> KernelResult<ScalarField<B>> {
    check_field(field)?;
    let mut next = field.clone();
    sweep(field, &mut next);
    Ok(next)
}

/// Runs `iterations` sweeps, each one consuming the previous sweep's output.
///
/// Zero iterations returns an unchanged copy.
pub fn relax_iterations<B: NumericBuffer>(
    field: &ScalarField<B>,
    iterations: usize,
) -> KernelResult<ScalarField<B>> {
    check_field(field)?;
    let mut current = field.clone();
    let mut scratch = field.clone();
    relax_iterations_into(&mut current, &mut scratch, iterations)?;
    Ok(current)
}

/// In-place form of [`relax_iterations`] that allocates nothing.
///
/// `scratch` must have the shape of `field`; its contents are overwritten.
/// Sweeps alternate between the two grids and the result ends up in `field`.
pub fn relax_iterations_into<B: NumericBuffer>(
    field: &mut ScalarField<B>,
    scratch: &mut ScalarField<B>,
    iterations: usize,
) -> KernelResult<()> {
    check_field(field)?;
    if scratch.rows() != field.rows() || scratch.cols() != field.cols() {
        return Err(KernelError::dimension_mismatch(
            "gauss-seidel scratch",
            field.rows() * field.cols(),
            scratch.rows() * scratch.cols(),
        ));
    }
    if iterations == 0 {
        return Ok(());
    }

    copy_field(field, scratch);
    for _ in 0..iterations {
        sweep(field, scratch);
        std::mem::swap(field, scratch);
    }
    Ok(())
}

fn copy_field<B: NumericBuffer>(source: &ScalarField<B>, target: &mut ScalarField<B>) {
    for i in 0..source.rows() {
        for j in 0..source.cols() {
            target.set(i, j, source.get(i, j));
        }
    }
}

/// Writes one sweep of `source` into `target`.
///
/// `target` must already hold the boundary values of `source`; only interior
/// cells are written.
fn sweep<B: NumericBuffer>(source: &ScalarField<B>, target: &mut ScalarField<B>) {
    let rows = source.rows();
    let cols = source.cols();
    for i in 1..rows - 1 {
        for j in 1..cols - 1 {
            let value = 0.25
                * (source.get(i, j + 1)
                    + source.get(i, j - 1)
                    + source.get(i + 1, j)
                    + source.get(i - 1, j));
            target.set(i, j, value);
        }
    }
}
