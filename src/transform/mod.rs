//! Transform engines: DFT (radix-2 and Bluestein) and DCT (direct and
//! FFT-backed), plus the length-driven factory that picks between them.

pub mod bluestein;
pub mod dct;
pub mod dft;
pub mod fast_dct;
pub mod fft;


pub use bluestein::BluesteinFft;
pub use dct::{DctCache, DirectDct};
pub use dft::{plan, ComplexVector, Dft, TransformError};
pub use fast_dct::FastDct;
pub use fft::Radix2Fft;
