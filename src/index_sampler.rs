use num_bigint::BigUint;
use num_traits::{Num, Zero};

use crate::bit_plan::BitPlan;
use crate::error::{DrawError, SourceError};

/// A rank index taken from raw bytes, before and after reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampledIndex {
    /// The integer read from the first `plan.bits` bits.
    pub candidate: BigUint,
    /// `candidate` reduced into `0..count`.
    pub index: BigUint,
}

impl SampledIndex {
    pub fn was_reduced(&self) -> bool {
        self.candidate != self.index
    }
}

/// Concatenate the big-endian binary digits of every byte, in order.
pub fn bits_of(raw: &[u8]) -> String {
    raw.iter().map(|byte| format!("{byte:08b}")).collect()
}

/// Turn raw random bytes into a rank index in `0..count`.
///
/// The first `plan.bits` bits are read as an unsigned integer. Values at or
/// above `count` are reduced modulo `count`, so low indices are slightly
/// favoured whenever `count` is not a power of two.
pub fn sample_index(
    raw: &[u8],
    plan: &BitPlan,
    count: &BigUint,
) -> Result<SampledIndex, DrawError> {
    if raw.len() != plan.bytes {
        return Err(DrawError::RandomSourceFailure(SourceError::WrongLength {
            requested: plan.bytes,
            received: raw.len(),
        }));
    }

    let bits = bits_of(raw);
    let truncated = &bits[..plan.bits as usize];
    let candidate = if truncated.is_empty() {
        BigUint::zero()
    } else {
        BigUint::from_str_radix(truncated, 2).map_err(|_| {
            DrawError::ArithmeticInvariantViolation("bit string is not binary")
        })?
    };

    if count.is_zero() {
        return Err(DrawError::ArithmeticInvariantViolation(
            "cannot sample from an empty combination space",
        ));
    }
    let index = if &candidate >= count {
        &candidate % count
    } else {
        candidate.clone()
    };

    if &index >= count {
        return Err(DrawError::ArithmeticInvariantViolation(
            "reduced index is outside the combination space",
        ));
    }

    Ok(SampledIndex { candidate, index })
}
