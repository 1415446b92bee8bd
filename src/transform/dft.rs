//! DFT engine interface and length-driven engine selection.
//!
//! Engines are planned once for a fixed length, own their precomputed tables,
//! and stay immutable afterwards, so a planned engine can be shared freely
//! across threads. Neither direction applies any scaling: a forward transform
//! followed by an inverse transform multiplies every element by exactly the
//! transform length.

use crate::transform::bluestein::BluesteinFft;
use crate::transform::fft::Radix2Fft;

/// Failures raised by transform construction and transform calls.
///
/// All of these are usage errors detected before any numeric work starts;
/// a call either fails validation up front or runs to completion.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TransformError {
    #[error("transform length must be at least 1 (got {0})")]
    InvalidLength(usize),
    #[error("radix-2 FFT length must be a power of two (got {0})")]
    NotPowerOfTwo(usize),
    #[error("{what} buffer length mismatch (expected {expected}, got {actual})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub(crate) fn ensure_positive(length: usize) -> Result<(), TransformError> {
    if length == 0 {
        return Err(TransformError::InvalidLength(0));
    }
    Ok(())
}

pub(crate) fn ensure_len(
    what: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), TransformError> {
    if actual != expected {
        return Err(TransformError::LengthMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// An owned complex vector: equal-length real and imaginary sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexVector {
    re: Vec<f64>,
    im: Vec<f64>,
}

impl ComplexVector {
    /// Pair up real and imaginary parts; both must be non-empty and of equal
    /// length.
    pub fn new(re: Vec<f64>, im: Vec<f64>) -> Result<Self, TransformError> {
        ensure_positive(re.len())?;
        ensure_len("imaginary", re.len(), im.len())?;
        Ok(Self { re, im })
    }

    /// Lift a real signal into the complex domain (zero imaginary part).
    pub fn from_real(re: Vec<f64>) -> Result<Self, TransformError> {
        let im = vec![0.0; re.len()];
        Self::new(re, im)
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn re(&self) -> &[f64] {
        &self.re
    }

    pub fn im(&self) -> &[f64] {
        &self.im
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.re, self.im)
    }
}

/// A planned forward/inverse DFT of one fixed length.
///
/// The inverse direction is derived from the forward one through the identity
/// `IDFT(x) = swap(DFT(swap(x)))`, where `swap` exchanges real and imaginary
/// parts; engines therefore only implement [`Dft::transform`] and never carry
/// a second twiddle-factor sign convention.
pub trait Dft: Send + Sync {
    /// The fixed length this engine was planned for.
    fn len(&self) -> usize;

    /// Short algorithm label, mainly for diagnostics and tests.
    fn name(&self) -> &'static str;

    /// Forward DFT: `out[k] = Σ_j in[j] · e^(-2πi·jk/len)`, unscaled.
    ///
    /// All four buffers must have length [`Dft::len`].
    fn transform(
        &self,
        in_re: &[f64],
        in_im: &[f64],
        out_re: &mut [f64],
        out_im: &mut [f64],
    ) -> Result<(), TransformError>;

    /// Inverse DFT (unscaled): delegates to [`Dft::transform`] with the
    /// real/imaginary roles exchanged on both input and output.
    fn inverse(
        &self,
        in_re: &[f64],
        in_im: &[f64],
        out_re: &mut [f64],
        out_im: &mut [f64],
    ) -> Result<(), TransformError> {
        self.transform(in_im, in_re, out_im, out_re)
    }

    /// Forward DFT overwriting the caller's buffers.
    ///
    /// Buffers the output into fresh vectors and copies back; this exists so
    /// callers need not allocate outputs, not as an allocation guarantee.
    fn transform_in_place(
        &self,
        re: &mut [f64],
        im: &mut [f64],
    ) -> Result<(), TransformError> {
        let mut out_re = vec![0.0; self.len()];
        let mut out_im = vec![0.0; self.len()];
        self.transform(re, im, &mut out_re, &mut out_im)?;
        re.copy_from_slice(&out_re);
        im.copy_from_slice(&out_im);
        Ok(())
    }

    /// Inverse DFT overwriting the caller's buffers.
    fn inverse_in_place(
        &self,
        re: &mut [f64],
        im: &mut [f64],
    ) -> Result<(), TransformError> {
        self.transform_in_place(im, re)
    }

    /// Forward DFT of an owned [`ComplexVector`].
    fn transform_vector(
        &self,
        input: &ComplexVector,
    ) -> Result<ComplexVector, TransformError> {
        let mut out_re = vec![0.0; self.len()];
        let mut out_im = vec![0.0; self.len()];
        self.transform(input.re(), input.im(), &mut out_re, &mut out_im)?;
        ComplexVector::new(out_re, out_im)
    }

    /// Inverse DFT of an owned [`ComplexVector`].
    fn inverse_vector(
        &self,
        input: &ComplexVector,
    ) -> Result<ComplexVector, TransformError> {
        let mut out_re = vec![0.0; self.len()];
        let mut out_im = vec![0.0; self.len()];
        self.inverse(input.re(), input.im(), &mut out_re, &mut out_im)?;
        ComplexVector::new(out_re, out_im)
    }
}

/// Plan a DFT engine for `length`.
///
/// Powers of two get the radix-2 Cooley-Tukey engine; every other length gets
/// the Bluestein chirp-z engine, so every positive length runs in O(n log n).
pub fn plan(length: usize) -> Result<Box<dyn Dft>, TransformError> {
    ensure_positive(length)?;
    if length.is_power_of_two() {
        Ok(Box::new(Radix2Fft::new(length)?))
    } else {
        Ok(Box::new(BluesteinFft::new(length)?))
    }
}
