//! Arbitrary-length discrete transforms.
//!
//! Forward and inverse DFT for complex vectors of any positive length:
//! radix-2 Cooley-Tukey when the length is a power of two, Bluestein's
//! chirp-z reduction otherwise, so every length runs in O(n log n). On top of
//! the DFT sits a DCT-II/DCT-III pair, available as a naive O(n²) reference
//! engine (cached per length) and an FFT-backed O(n log n) engine.
//!
//! Engines are planned once for a fixed length, own only precomputed tables,
//! and are immutable afterwards, so they can be shared freely across threads.
//! No direction applies any scaling: a forward transform followed by an
//! inverse transform multiplies every element by exactly the length.
//!
//! ```
//! use spectral_rs::{plan, Dft};
//!
//! let dft = plan(3).unwrap();
//! let mut out_re = [0.0; 3];
//! let mut out_im = [0.0; 3];
//! dft.transform(&[1.0, 0.0, 0.0], &[0.0; 3], &mut out_re, &mut out_im)
//!     .unwrap();
//! // An impulse has a flat spectrum.
//! for k in 0..3 {
//!     assert!((out_re[k] - 1.0).abs() < 1e-12);
//!     assert!(out_im[k].abs() < 1e-12);
//! }
//! ```

pub mod math;
pub mod transform;

pub use math::Complex;
pub use transform::{
    plan, BluesteinFft, ComplexVector, DctCache, Dft, DirectDct, FastDct,
    Radix2Fft, TransformError,
};
