//! Direct-summation DCT-II/DCT-III pair with a per-length instance cache.
//!
//! O(n²) per call; this is the reference the FFT-backed variant is checked
//! against. Instances precompute one cosine table and are immutable, so the
//! cache hands out shared `Arc`s.

use core::f64::consts::PI;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::transform::dft::{ensure_len, ensure_positive, TransformError};

/// Naive DCT engine for one fixed length.
pub struct DirectDct {
    len: usize,
    /// `cos(i·π/(2·len))` for `i` in `[0, 4·len)`, one full period of every
    /// grid point the summation indices below can reach.
    cos: Vec<f64>,
}

impl DirectDct {
    /// Build an engine for `length >= 1`.
    pub fn new(length: usize) -> Result<Self, TransformError> {
        ensure_positive(length)?;
        let cos = (0..4 * length)
            .map(|i| (i as f64 * PI / (2.0 * length as f64)).cos())
            .collect();
        Ok(Self { len: length, cos })
    }

    /// Fetch the process-wide cached instance for `length`, building and
    /// caching it on first use.
    pub fn get_instance(length: usize) -> Result<Arc<DirectDct>, TransformError> {
        static CACHE: Lazy<DctCache> = Lazy::new(DctCache::new);
        CACHE.get(length)
    }

    /// The fixed length this engine was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Forward DCT (DCT-II flavor):
    /// `out[i] = 2·Σ_j in[j]·cos(i·(2j+1)·π/(2·len))`, then `out[0]` halved.
    ///
    /// The halved DC term has no matching rescale in
    /// [`DirectDct::inverse_transform`]; the asymmetric pair round-trips to
    /// exactly `len · x` and is pinned by tests as-is.
    pub fn transform(
        &self,
        input: &[f64],
        output: &mut [f64],
    ) -> Result<(), TransformError> {
        ensure_len("input", self.len, input.len())?;
        ensure_len("output", self.len, output.len())?;

        let period = 4 * self.len;
        for (i, out) in output.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (j, &x) in input.iter().enumerate() {
                sum += x * self.cos[(i * (2 * j + 1)) % period];
            }
            *out = 2.0 * sum;
        }
        output[0] /= 2.0;
        Ok(())
    }

    /// Inverse DCT (DCT-III flavor):
    /// `out[i] = Σ_j in[j]·cos((2i+1)·j·π/(2·len))`, no scaling.
    pub fn inverse_transform(
        &self,
        input: &[f64],
        output: &mut [f64],
    ) -> Result<(), TransformError> {
        ensure_len("input", self.len, input.len())?;
        ensure_len("output", self.len, output.len())?;

        let period = 4 * self.len;
        for (i, out) in output.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (j, &x) in input.iter().enumerate() {
                sum += x * self.cos[((2 * i + 1) * j) % period];
            }
            *out = sum;
        }
        Ok(())
    }
}

/// Memoizing per-length cache of [`DirectDct`] instances.
///
/// Lookup-or-build runs under the mutex, so concurrent first requests for a
/// length observe a single shared instance. Entries are never evicted; the
/// cache grows with the number of distinct lengths requested.
#[derive(Default)]
pub struct DctCache {
    entries: Mutex<HashMap<usize, Arc<DirectDct>>>,
}

impl DctCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached engine for `length`, building it on first request.
    pub fn get(&self, length: usize) -> Result<Arc<DirectDct>, TransformError> {
        ensure_positive(length)?;
        let mut entries =
            self.entries.lock().expect("DCT cache mutex poisoned");
        if let Some(cached) = entries.get(&length) {
            return Ok(Arc::clone(cached));
        }
        let built = Arc::new(DirectDct::new(length)?);
        entries.insert(length, Arc::clone(&built));
        Ok(built)
    }
}
