use num_bigint::BigUint;
use num_traits::One;

/// How much randomness a draw consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitPlan {
    /// Smallest `b` such that `2^b >= count`.
    pub bits: u64,
    /// `ceil(bits / 8)`; zero when no randomness is needed.
    pub bytes: usize,
}

impl BitPlan {
    /// Plan the bit width for a combination count.
    ///
    /// The width is found by doubling rather than with a logarithm, since the count
    /// can be far larger than what a float represents exactly. Counts of 0 or 1
    /// describe a deterministic draw and yield an empty plan.
    pub fn for_count(count: &BigUint) -> Self {
        let mut bits = 0u64;
        let mut product = BigUint::one();
        while &product < count {
            product <<= 1u32;
            bits += 1;
        }
        let bytes = if bits == 0 {
            0
        } else {
            ((bits - 1) / 8 + 1) as usize
        };
        Self { bits, bytes }
    }

    pub fn needs_randomness(&self) -> bool {
        self.bits > 0
    }
}
