//! Iterative radix-2 Cooley-Tukey FFT for power-of-two lengths.
//!
//! A planned engine owns the bit-reversal permutation and half a period of
//! twiddle factors for its length; each call is a pure decimation-in-time
//! butterfly network over caller-supplied buffers.

use core::f64::consts::PI;

use crate::math::util::bit_reversal_permutation;
use crate::math::Complex;
use crate::transform::dft::{ensure_len, ensure_positive, Dft, TransformError};

/// Power-of-two DFT engine.
pub struct Radix2Fft {
    len: usize,
    perm: Vec<usize>,
    /// `e^(-2πi·k/len)` for `k < len/2`; the inverse direction reuses the
    /// same table through the swap identity on the trait.
    twiddles: Vec<Complex>,
}

impl Radix2Fft {
    /// Plan a radix-2 FFT; `length` must be a positive power of two.
    pub fn new(length: usize) -> Result<Self, TransformError> {
        ensure_positive(length)?;
        if !length.is_power_of_two() {
            return Err(TransformError::NotPowerOfTwo(length));
        }

        let levels = length.trailing_zeros();
        let twiddles = (0..length / 2)
            .map(|k| Complex::exp_i(-2.0 * PI * k as f64 / length as f64))
            .collect();

        Ok(Self {
            len: length,
            perm: bit_reversal_permutation(levels),
            twiddles,
        })
    }
}

impl Dft for Radix2Fft {
    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &'static str {
        "radix-2"
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

        let n = self.len;
        for (i, &src) in self.perm.iter().enumerate() {
            out_re[i] = in_re[src];
            out_im[i] = in_im[src];
        }
        if n == 1 {
            // A single sample has no frequency decomposition.
            return Ok(());
        }

        let mut size = 2;
        while size <= n {
            let half = size / 2;
            let stride = n / size;
            for base in (0..n).step_by(size) {
                let mut k = 0;
                for j in base..base + half {
                    let l = j + half;
                    let t = Complex::new(out_re[l], out_im[l]) * self.twiddles[k];
                    out_re[l] = out_re[j] - t.re;
                    out_im[l] = out_im[j] - t.im;
                    out_re[j] += t.re;
                    out_im[j] += t.im;
                    k += stride;
                }
            }
            size <<= 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(fft: &Radix2Fft, re: &[f64], im: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let mut out_re = vec![0.0; fft.len()];
        let mut out_im = vec![0.0; fft.len()];
        fft.transform(re, im, &mut out_re, &mut out_im).unwrap();
        (out_re, out_im)
    }

    #[test]
    fn rejects_invalid_lengths() {
        assert!(matches!(
            Radix2Fft::new(0),
            Err(TransformError::InvalidLength(0))
        ));
        assert!(matches!(
            Radix2Fft::new(12),
            Err(TransformError::NotPowerOfTwo(12))
        ));
    }

    #[test]
    fn rejects_mismatched_buffers() {
        let fft = Radix2Fft::new(8).unwrap();
        let good = vec![0.0; 8];
        let short = vec![0.0; 7];
        let mut out_re = vec![0.0; 8];
        let mut out_im = vec![0.0; 8];
        assert!(matches!(
            fft.transform(&good, &short, &mut out_re, &mut out_im),
            Err(TransformError::LengthMismatch {
                expected: 8,
                actual: 7,
                ..
            })
        ));
        let mut short_out = vec![0.0; 7];
        assert!(fft
            .transform(&good, &good, &mut short_out, &mut out_im)
            .is_err());
    }

    #[test]
    fn length_one_is_identity() {
        let fft = Radix2Fft::new(1).unwrap();
        let (re, im) = forward(&fft, &[3.5], &[-1.25]);
        assert_eq!(re, vec![3.5]);
        assert_eq!(im, vec![-1.25]);
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let fft = Radix2Fft::new(8).unwrap();
        let mut re = vec![0.0; 8];
        re[0] = 1.0;
        let (out_re, out_im) = forward(&fft, &re, &vec![0.0; 8]);
        for k in 0..8 {
            assert!((out_re[k] - 1.0).abs() < 1e-15);
            assert!(out_im[k].abs() < 1e-15);
        }
    }

    #[test]
    fn lowest_frequency_sine_length_16() {
        let fft = Radix2Fft::new(16).unwrap();
        let re: Vec<f64> = (0..16)
            .map(|n| (2.0 * PI * n as f64 / 16.0).sin())
            .collect();
        let (out_re, out_im) = forward(&fft, &re, &vec![0.0; 16]);

        assert!((out_im[1] + 8.0).abs() < 1e-12);
        assert!((out_im[15] - 8.0).abs() < 1e-12);
        for k in 0..16 {
            assert!(out_re[k].abs() < 1e-12, "real leakage at bin {k}");
            if k != 1 && k != 15 {
                assert!(out_im[k].abs() < 1e-12, "imag leakage at bin {k}");
            }
        }
    }

    #[test]
    fn nyquist_wave_length_16() {
        let fft = Radix2Fft::new(16).unwrap();
        let re: Vec<f64> = (0..16).map(|n| (n % 2) as f64).collect();
        let (out_re, out_im) = forward(&fft, &re, &vec![0.0; 16]);

        assert!((out_re[0] - 8.0).abs() < 1e-12);
        assert!((out_re[8] + 8.0).abs() < 1e-12);
        for k in 0..16 {
            assert!(out_im[k].abs() < 1e-12, "imag leakage at bin {k}");
            if k != 0 && k != 8 {
                assert!(out_re[k].abs() < 1e-12, "real leakage at bin {k}");
            }
        }
    }
}
