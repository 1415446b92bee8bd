pub mod complex;
pub mod sampling;
pub(crate) mod util;

pub use complex::Complex;
pub use sampling::{RandomSource, XorShift64};
