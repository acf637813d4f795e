use anyhow::{Context, Result};
use serde_json::{Value, json};

use lottodraw::draw::{DrawEvent, draw_lottery_with};
use lottodraw::draw_spec::DrawSpec;
use lottodraw::format::{describe_event, format_bytes, format_numbers};
use lottodraw::random_source::{EntropySource, FixedBytes, RandomSource, SeededSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Output {
    Text,
    Json,
    Quiet,
}

pub(crate) fn run_draw(
    balls: u64,
    max_number: u64,
    seed: Option<u64>,
    bytes: Option<&str>,
    output: Output,
) -> Result<()> {
    let spec = DrawSpec::new(balls, max_number)?;
    let mut source: Box<dyn RandomSource> = match (seed, bytes) {
        (_, Some(hex)) => Box::new(FixedBytes::from_hex(hex).context("invalid --bytes")?),
        (Some(seed), None) => Box::new(SeededSource::new(seed)),
        (None, None) => Box::new(EntropySource::new()),
    };

    if output == Output::Text {
        println!("Drawing {spec} using {} randomness", source.name());
    }

    let draw = draw_lottery_with(&spec, &mut source, |event| match output {
        Output::Text => println!("{}", describe_event(event)),
        Output::Json => println!("{}", event_to_json(event)),
        Output::Quiet => (),
    })
    .with_context(|| format!("failed to draw {spec}"))?;

    if output == Output::Quiet {
        println!("{}", format_numbers(&draw.numbers));
    }

    Ok(())
}

fn event_to_json(event: &DrawEvent) -> Value {
    match event {
        DrawEvent::CombinationCount(count) => json!({
            "event": "combination_count",
            "count": count.to_string(),
        }),
        DrawEvent::BitPlan(plan) => json!({
            "event": "bit_plan",
            "bits": plan.bits,
            "bytes": plan.bytes,
        }),
        DrawEvent::RawBytes { source, bytes } => json!({
            "event": "raw_bytes",
            "source": source,
            "hex": format_bytes(bytes),
        }),
        DrawEvent::RankIndex { candidate, index } => json!({
            "event": "rank_index",
            "candidate": candidate.to_string(),
            "index": index.to_string(),
        }),
        DrawEvent::Numbers(numbers) => json!({
            "event": "numbers",
            "numbers": numbers,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use lottodraw::bit_plan::BitPlan;
    use num_bigint::BigUint;

    #[test]
    fn json_records() {
        let plan = BitPlan { bits: 26, bytes: 4 };
        assert_snapshot!(
            event_to_json(&DrawEvent::BitPlan(&plan)),
            @r#"{"bits":26,"bytes":4,"event":"bit_plan"}"#
        );

        let candidate = BigUint::from(15u32);
        let index = BigUint::from(5u32);
        assert_snapshot!(
            event_to_json(&DrawEvent::RankIndex {
                candidate: &candidate,
                index: &index,
            }),
            @r#"{"candidate":"15","event":"rank_index","index":"5"}"#
        );

        assert_snapshot!(
            event_to_json(&DrawEvent::Numbers(&[2, 5])),
            @r#"{"event":"numbers","numbers":[2,5]}"#
        );
    }
}
