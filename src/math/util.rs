//! Shared helpers for transform-style algorithms.
//!
//! The iterative FFT consumes its input through a bit-reversal permutation;
//! building the index table once at plan time keeps the per-call loop free of
//! bit twiddling.

/// Build the bit-reversal permutation for `n = 2^levels` indices.
///
/// Entry `i` holds the index whose `levels`-bit binary representation is the
/// reverse of `i`'s. `levels == 0` yields the single-entry identity.
pub(crate) fn bit_reversal_permutation(levels: u32) -> Vec<usize> {
    let n = 1usize << levels;
    (0..n)
        .map(|i| {
            if levels == 0 {
                0
            } else {
                i.reverse_bits() >> (usize::BITS - levels)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::bit_reversal_permutation;

    #[test]
    fn permutation_for_eight() {
        assert_eq!(
            bit_reversal_permutation(3),
            vec![0, 4, 2, 6, 1, 5, 3, 7]
        );
    }

    #[test]
    fn permutation_is_an_involution() {
        let perm = bit_reversal_permutation(5);
        for (i, &p) in perm.iter().enumerate() {
            assert_eq!(perm[p], i);
        }
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(bit_reversal_permutation(0), vec![0]);
        assert_eq!(bit_reversal_permutation(1), vec![0, 1]);
    }
}
