//! FFT-backed DCT: a length-n DCT computed through a 2n-point DFT.
//!
//! The input is embedded in a doubled complex buffer, transformed by whatever
//! engine [`plan`] selects for `2n`, and corrected with a quarter-wave
//! cos/sin twiddle. The resulting pair matches [`DirectDct`] elementwise
//! (same halved-DC forward, same unscaled inverse) at O(n log n).
//!
//! [`DirectDct`]: crate::transform::dct::DirectDct

use core::f64::consts::PI;

use crate::transform::dft::{
    ensure_len, ensure_positive, plan, Dft, TransformError,
};

/// FFT-backed DCT engine for one fixed length.
pub struct FastDct {
    len: usize,
    /// DFT engine of size `2·len`, factory-selected.
    inner: Box<dyn Dft>,
    /// `cos(i·π/(2·len))` for `i < len`.
    cos: Vec<f64>,
    /// `sin(i·π/(2·len))` for `i < len`.
    sin: Vec<f64>,
}

impl FastDct {
    /// Build an engine for `length >= 1`.
    pub fn new(length: usize) -> Result<Self, TransformError> {
        ensure_positive(length)?;
        let inner = plan(2 * length)?;
        let step = PI / (2.0 * length as f64);
        Ok(Self {
            len: length,
            inner,
            cos: (0..length).map(|i| (i as f64 * step).cos()).collect(),
            sin: (0..length).map(|i| (i as f64 * step).sin()).collect(),
        })
    }

    /// The fixed length this engine was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Forward DCT; same formulation as [`DirectDct::transform`].
    ///
    /// [`DirectDct::transform`]: crate::transform::dct::DirectDct::transform
    pub fn transform(
        &self,
        input: &[f64],
        output: &mut [f64],
    ) -> Result<(), TransformError> {
        ensure_len("input", self.len, input.len())?;
        ensure_len("output", self.len, output.len())?;

        let m = 2 * self.len;
        let mut re = vec![0.0; m];
        let im = vec![0.0; m];
        re[..self.len].copy_from_slice(input);

        let mut spec_re = vec![0.0; m];
        let mut spec_im = vec![0.0; m];
        self.inner.transform(&re, &im, &mut spec_re, &mut spec_im)?;

        output[0] = spec_re[0];
        for i in 1..self.len {
            output[i] =
                2.0 * (spec_re[i] * self.cos[i] + spec_im[i] * self.sin[i]);
        }
        Ok(())
    }

    /// Inverse DCT; same formulation as [`DirectDct::inverse_transform`].
    ///
    /// [`DirectDct::inverse_transform`]: crate::transform::dct::DirectDct::inverse_transform
    pub fn inverse_transform(
        &self,
        input: &[f64],
        output: &mut [f64],
    ) -> Result<(), TransformError> {
        ensure_len("input", self.len, input.len())?;
        ensure_len("output", self.len, output.len())?;

        let m = 2 * self.len;
        let mut re = vec![0.0; m];
        let mut im = vec![0.0; m];
        for i in 0..self.len {
            re[i] = input[i] * self.cos[i];
            im[i] = input[i] * self.sin[i];
        }

        let mut out_re = vec![0.0; m];
        let mut out_im = vec![0.0; m];
        self.inner.inverse(&re, &im, &mut out_re, &mut out_im)?;
        output.copy_from_slice(&out_re[..self.len]);
        Ok(())
    }
}
