use anyhow::{Result, anyhow, bail};
use num_bigint::BigUint;

use lottodraw::bit_plan::BitPlan;
use lottodraw::combinatorics::{count_combinations, rank_combination, unrank_combination};
use lottodraw::draw_spec::DrawSpec;
use lottodraw::format::{format_numbers, group_digits};

pub(crate) fn run_odds(balls: u64, max_number: u64) -> Result<()> {
    let spec = DrawSpec::new(balls, max_number)?;
    let count = count_combinations(&spec);
    let plan = BitPlan::for_count(&count);
    println!("Draw: {spec}");
    println!("Odds of a full match: 1 in {}", group_digits(&count));
    if plan.needs_randomness() {
        println!("Random input: {} bits ({} bytes)", plan.bits, plan.bytes);
    } else {
        println!("Random input: none, the draw has a single outcome");
    }
    Ok(())
}

pub(crate) fn run_rank(max_number: u64, mut numbers: Vec<u64>) -> Result<()> {
    numbers.sort_unstable();
    let spec = DrawSpec::new(numbers.len() as u64, max_number)?;
    let rank = rank_combination(max_number, &numbers).ok_or_else(|| {
        anyhow!(
            "ticket {} is not {} distinct numbers from 1 to {}",
            format_numbers(&numbers),
            spec.balls(),
            max_number
        )
    })?;
    println!("{}", rank);
    Ok(())
}

pub(crate) fn run_unrank(balls: u64, max_number: u64, index: &str) -> Result<()> {
    let spec = DrawSpec::new(balls, max_number)?;
    let index: BigUint = index
        .trim()
        .parse()
        .map_err(|err| anyhow!("invalid index: {index}: {err}"))?;
    let count = count_combinations(&spec);
    if index >= count {
        bail!(
            "index {} is out of range for {spec} ({} combinations)",
            group_digits(&index),
            group_digits(&count)
        );
    }
    let numbers = unrank_combination(spec.max_number(), spec.balls(), index)?;
    println!("{}", format_numbers(&numbers));
    Ok(())
}
