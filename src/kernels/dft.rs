//! Direct-summation discrete Fourier transform.
//!
//! For each output index `k` the transform evaluates
//!
//! ```text
//! Xre[k] = Σ_n ( xre[n]·cos(2πkn/N) + xim[n]·sin(2πkn/N))
//! Xim[k] = Σ_n (-xre[n]·sin(2πkn/N) + xim[n]·cos(2πkn/N))
//! ```
//!
//! Real and imaginary channels are always carried in separate buffers.

use crate::buffers::NumericBuffer;
use crate::errors::{KernelError, KernelResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Evaluation strategy for the trigonometric terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DftVariant {
    /// Recomputes every sine and cosine where it appears in the sum.
    Naive,
    /// Hoists the angular step per `k` and evaluates one sine/cosine pair per
    /// term, shared by both accumulators.
    Twiddle,
}

impl DftVariant {
    pub fn name(&self) -> &'static str {
        match self {
            DftVariant::Naive => "naive",
            DftVariant::Twiddle => "twiddle",
        }
    }
}

impl fmt::Display for DftVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the transform into freshly allocated output buffers.
pub fn transform<B: NumericBuffer>(
    real_in: &B,
    imag_in: &B,
    variant: DftVariant,
) -> KernelResult<(B, B)> {
    check_signal(real_in, imag_in)?;
    let mut real_out = real_in.zeros_like(real_in.len())?;
    let mut imag_out = imag_in.zeros_like(imag_in.len())?;
    transform_into(real_in, imag_in, &mut real_out, &mut imag_out, variant)?;
    Ok((real_out, imag_out))
}

/// Computes the transform into caller-owned output buffers.
///
/// Every output element is overwritten. On error the outputs are untouched.
pub fn transform_into<B: NumericBuffer>(
    real_in: &B,
    imag_in: &B,
    real_out: &mut B,
    imag_out: &mut B,
    variant: DftVariant,
) -> KernelResult<()> {
    check_signal(real_in, imag_in)?;
    let n = real_in.len();
    if real_out.len() != n {
        return Err(KernelError::dimension_mismatch("dft output", n, real_out.len()));
    }
    if imag_out.len() != n {
        return Err(KernelError::dimension_mismatch("dft output", n, imag_out.len()));
    }

    match variant {
        DftVariant::Naive => dft_naive(real_in, imag_in, real_out, imag_out),
        DftVariant::Twiddle => dft_twiddle(real_in, imag_in, real_out, imag_out),
    }
    Ok(())
}

fn check_signal<B: NumericBuffer>(real_in: &B, imag_in: &B) -> KernelResult<()> {
    if real_in.is_empty() {
        return Err(KernelError::InvalidSize { size: 0 });
    }
    if imag_in.len() != real_in.len() {
        return Err(KernelError::dimension_mismatch(
            "dft input",
            real_in.len(),
            imag_in.len(),
        ));
    }
    Ok(())
}

fn dft_naive<B: NumericBuffer>(xre: &B, xim: &B, out_re: &mut B, out_im: &mut B) {
    let n = xre.len();
    let len = n as f64;
    for k in 0..n {
        let mut sum_re = 0.0;
        let mut sum_im = 0.0;
        for j in 0..n {
            let angle = k as f64 * TAU * j as f64 / len;
            sum_re += xre.get(j) * angle.cos() + xim.get(j) * angle.sin();
            sum_im += -xre.get(j) * angle.sin() + xim.get(j) * angle.cos();
        }
        out_re.set(k, sum_re);
        out_im.set(k, sum_im);
    }
}

fn dft_twiddle<B: NumericBuffer>(xre: &B, xim: &B, out_re: &mut B, out_im: &mut B) {
    let n = xre.len();
    let step = TAU / n as f64;
    for k in 0..n {
        let wk = step * k as f64;
        let mut sum_re = 0.0;
        let mut sum_im = 0.0;
        for j in 0..n {
            let (s, c) = (wk * j as f64).sin_cos();
            let re = xre.get(j);
            let im = xim.get(j);
            sum_re += re * c + im * s;
            sum_im += -re * s + im * c;
        }
        out_re.set(k, sum_re);
        out_im.set(k, sum_im);
    }
}
