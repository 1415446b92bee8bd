//! Deterministic signal generation for tests and examples.
//!
//! Property tests for the transforms need arbitrary input vectors; drawing
//! them from a tiny seeded PRNG keeps every run reproducible without pulling
//! a full RNG stack into the default build.

use core::f64::consts::PI;

/// Minimal RNG abstraction; when the `rand` feature is enabled, a `rand_core`
/// adapter is provided, otherwise a deterministic xorshift is available for
/// tests and examples.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;
}

/// A tiny xorshift PRNG; convenient for deterministic tests.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 1 } else { seed };
        Self { state: seed }
    }
}

impl RandomSource for XorShift64 {
    fn next_u64(&mut self) -> u64 {
        // xorshift64* with constants from Vigna.
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }
}

/// Adapter over `rand_core` RNGs when the `rand` feature is enabled.
#[cfg(feature = "rand")]
#[derive(Debug)]
pub struct RandCoreSource<R: rand_core::RngCore>(pub R);

#[cfg(feature = "rand")]
impl<R: rand_core::RngCore> RandomSource for RandCoreSource<R> {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

/// Uniform draw from `[0, 1)`.
#[inline]
pub fn uniform_f64<R: RandomSource>(rng: &mut R) -> f64 {
    // Take the top 53 bits to fill an f64 mantissa.
    let bits = rng.next_u64() >> 11;
    bits as f64 / (1u64 << 53) as f64
}

/// Box-Muller transform producing a standard normal variate.
pub fn gaussian_box_muller<R: RandomSource>(rng: &mut R) -> f64 {
    let u1 = uniform_f64(rng).max(f64::MIN_POSITIVE);
    let u2 = uniform_f64(rng);
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;
    r * theta.cos()
}

/// Sample `len` values uniformly from `[-1, 1)`, a convenient white-noise
/// test signal.
pub fn noise_vector<R: RandomSource>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| 2.0 * uniform_f64(rng) - 1.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_stream() {
        let mut rng = XorShift64::new(42);
        assert_eq!(rng.next_u64(), 6_255_019_084_209_693_600);
        assert_eq!(rng.next_u64(), 14_430_073_426_741_505_498);
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = XorShift64::new(7);
        for _ in 0..1000 {
            let u = uniform_f64(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn gaussian_is_centered() {
        let mut rng = XorShift64::new(1234);
        let mut acc = 0.0;
        let samples = 2000;
        for _ in 0..samples {
            acc += gaussian_box_muller(&mut rng);
        }
        let mean = acc / samples as f64;
        assert!(mean.abs() < 0.1, "mean drifted too far: {mean}");
    }

    #[test]
    fn noise_vector_shape() {
        let mut rng = XorShift64::new(99);
        let v = noise_vector(&mut rng, 64);
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|x| (-1.0..1.0).contains(x)));
        assert!(v.iter().any(|&x| x != v[0]));
    }
}
