use num_bigint::BigUint;

use crate::bit_plan::BitPlan;
use crate::combinatorics::{count_combinations, unrank_combination};
use crate::draw_spec::DrawSpec;
use crate::error::{DrawError, SourceError};
use crate::index_sampler::sample_index;
use crate::random_source::RandomSource;

/// Progress records emitted while a draw runs. Advisory only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawEvent<'a> {
    CombinationCount(&'a BigUint),
    BitPlan(&'a BitPlan),
    RawBytes { source: &'a str, bytes: &'a [u8] },
    RankIndex { candidate: &'a BigUint, index: &'a BigUint },
    Numbers(&'a [u64]),
}

/// A finished draw together with every intermediate value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    pub spec: DrawSpec,
    pub count: BigUint,
    pub plan: BitPlan,
    pub raw: Vec<u8>,
    pub candidate: BigUint,
    pub index: BigUint,
    pub numbers: Vec<u64>,
}

pub fn draw_lottery<S: RandomSource + ?Sized>(
    spec: &DrawSpec,
    source: &mut S,
) -> Result<Draw, DrawError> {
    draw_lottery_with(spec, source, |_| {})
}

/// Draw `spec.balls()` distinct numbers from `1..=spec.max_number()`.
///
/// The source is asked for exactly `plan.bytes` bytes, once. A draw with a single
/// possible outcome never touches the source.
pub fn draw_lottery_with<S, F>(
    spec: &DrawSpec,
    source: &mut S,
    mut on_event: F,
) -> Result<Draw, DrawError>
where
    S: RandomSource + ?Sized,
    F: FnMut(&DrawEvent),
{
    let count = count_combinations(spec);
    on_event(&DrawEvent::CombinationCount(&count));

    let plan = BitPlan::for_count(&count);
    on_event(&DrawEvent::BitPlan(&plan));

    let raw = if plan.needs_randomness() {
        let raw = source.fetch_bytes(plan.bytes)?;
        if raw.len() != plan.bytes {
            return Err(DrawError::RandomSourceFailure(SourceError::WrongLength {
                requested: plan.bytes,
                received: raw.len(),
            }));
        }
        on_event(&DrawEvent::RawBytes {
            source: source.name(),
            bytes: &raw,
        });
        raw
    } else {
        Vec::new()
    };

    let sampled = sample_index(&raw, &plan, &count)?;
    on_event(&DrawEvent::RankIndex {
        candidate: &sampled.candidate,
        index: &sampled.index,
    });

    let numbers = unrank_combination(spec.max_number(), spec.balls(), sampled.index.clone())?;
    if numbers.len() as u64 != spec.balls() {
        return Err(DrawError::ArithmeticInvariantViolation(
            "decoded ticket has the wrong number of balls",
        ));
    }
    on_event(&DrawEvent::Numbers(&numbers));

    Ok(Draw {
        spec: *spec,
        count,
        plan,
        raw,
        candidate: sampled.candidate,
        index: sampled.index,
        numbers,
    })
}
