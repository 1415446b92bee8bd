//! Bluestein (chirp-z) DFT for arbitrary lengths.
//!
//! Rewrites the DFT as a circular convolution via `jk = (j² + k² - (k-j)²)/2`
//! and evaluates that convolution with one power-of-two FFT of size
//! `m >= 2·len - 1`, keeping the whole engine O(n log n) for any length.

use core::f64::consts::PI;

use crate::math::Complex;
use crate::transform::dft::{ensure_len, ensure_positive, Dft, TransformError};
use crate::transform::fft::Radix2Fft;

/// General-length DFT engine.
pub struct BluesteinFft {
    len: usize,
    /// Internal power-of-two FFT of size `m`.
    inner: Radix2Fft,
    /// Chirp sequence `e^(-iπ·k²/len)` for `k < len`.
    chirp: Vec<Complex>,
    /// Frequency-domain convolution kernel, pre-divided by `m` so the inner
    /// forward/inverse FFT pair cancels its own scaling and the engine's
    /// outer contract stays unscaled.
    kernel: Vec<Complex>,
}

impl BluesteinFft {
    /// Plan a chirp-z DFT for any `length >= 1`.
    pub fn new(length: usize) -> Result<Self, TransformError> {
        ensure_positive(length)?;

        let m = (2 * length - 1).next_power_of_two();
        let inner = Radix2Fft::new(m)?;

        // The chirp angle is π·k²/len; reducing k² mod 2·len keeps the
        // argument small, which matters for the accuracy of cos/sin once k²
        // grows past the range where f64 holds integers exactly.
        let two_len = 2 * length as u128;
        let chirp: Vec<Complex> = (0..length)
            .map(|k| {
                let sq = ((k as u128 * k as u128) % two_len) as f64;
                Complex::exp_i(-PI * sq / length as f64)
            })
            .collect();

        // Convolution kernel b: conjugate chirp mirrored around index 0
        // (b[m-k] = b[k]), zero between the wings.
        let scale = 1.0 / m as f64;
        let mut b_re = vec![0.0; m];
        let mut b_im = vec![0.0; m];
        for (k, c) in chirp.iter().enumerate() {
            let w = c.conj() * scale;
            b_re[k] = w.re;
            b_im[k] = w.im;
            if k > 0 {
                b_re[m - k] = w.re;
                b_im[m - k] = w.im;
            }
        }
        let mut k_re = vec![0.0; m];
        let mut k_im = vec![0.0; m];
        inner.transform(&b_re, &b_im, &mut k_re, &mut k_im)?;
        let kernel = k_re
            .into_iter()
            .zip(k_im)
            .map(|(re, im)| Complex::new(re, im))
            .collect();

        Ok(Self {
            len: length,
            inner,
            chirp,
            kernel,
        })
    }
}

impl Dft for BluesteinFft {
    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &'static str {
        "bluestein"
    }

    fn transform(
        &self,
        in_re: &[f64],
        in_im: &[f64],
        out_re: &mut [f64],
        out_im: &mut [f64],
    ) -> Result<(), TransformError> {
        ensure_len("input", self.len, in_re.len())?;
        ensure_len("input", self.len, in_im.len())?;
        ensure_len("output", self.len, out_re.len())?;
        ensure_len("output", self.len, out_im.len())?;

        let m = self.inner.len();

        // a[k] = x[k]·chirp[k], zero-padded to m.
        let mut a_re = vec![0.0; m];
        let mut a_im = vec![0.0; m];
        for k in 0..self.len {
            let x = Complex::new(in_re[k], in_im[k]) * self.chirp[k];
            a_re[k] = x.re;
            a_im[k] = x.im;
        }

        // Circular convolution with the kernel: FFT, pointwise multiply,
        // unscaled inverse FFT (the 1/m lives in the kernel).
        let mut f_re = vec![0.0; m];
        let mut f_im = vec![0.0; m];
        self.inner.transform(&a_re, &a_im, &mut f_re, &mut f_im)?;
        for ((re, im), w) in f_re.iter_mut().zip(f_im.iter_mut()).zip(&self.kernel) {
            let p = Complex::new(*re, *im) * *w;
            *re = p.re;
            *im = p.im;
        }
        self.inner.inverse(&f_re, &f_im, &mut a_re, &mut a_im)?;

        // Post-multiply by the chirp to undo the index shift.
        for k in 0..self.len {
            let y = Complex::new(a_re[k], a_im[k]) * self.chirp[k];
            out_re[k] = y.re;
            out_im[k] = y.im;
        }
        Ok(())
    }
}
