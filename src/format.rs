use itertools::Itertools;
use num_bigint::BigUint;

use crate::draw::DrawEvent;

/// Render a big integer with `,` between groups of three digits.
pub fn group_digits(value: &BigUint) -> String {
    let digits = value.to_str_radix(10);
    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == head {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).join(" ")
}

pub fn format_numbers(numbers: &[u64]) -> String {
    numbers.iter().join(" - ")
}

/// One human-readable line for a progress record.
pub fn describe_event(event: &DrawEvent) -> String {
    match event {
        DrawEvent::CombinationCount(count) => {
            format!("Possible combinations: {}", group_digits(count))
        }
        DrawEvent::BitPlan(plan) => format!(
            "Random bits needed: {} ({} bytes)",
            plan.bits, plan.bytes
        ),
        DrawEvent::RawBytes { source, bytes } => {
            format!("Random bytes ({source}): {}", format_bytes(bytes))
        }
        DrawEvent::RankIndex { candidate, index } => {
            if candidate == index {
                format!("Combination index: {}", group_digits(index))
            } else {
                format!(
                    "Combination index: {} (reduced from {})",
                    group_digits(index),
                    group_digits(candidate)
                )
            }
        }
        DrawEvent::Numbers(numbers) => format!("Numbers: {}", format_numbers(numbers)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit_plan::BitPlan;
    use insta::assert_snapshot;

    fn grouped(value: u64) -> String {
        group_digits(&BigUint::from(value))
    }

    #[test]
    fn groups_digits() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1_000), "1,000");
        assert_eq!(grouped(45_057_474), "45,057,474");
        assert_eq!(grouped(100_000_000), "100,000,000");
    }

    #[test]
    fn describes_count() {
        let count = BigUint::from(45_057_474u64);
        assert_snapshot!(
            describe_event(&DrawEvent::CombinationCount(&count)),
            @"Possible combinations: 45,057,474"
        );
    }

    #[test]
    fn describes_plan() {
        let plan = BitPlan { bits: 26, bytes: 4 };
        assert_snapshot!(
            describe_event(&DrawEvent::BitPlan(&plan)),
            @"Random bits needed: 26 (4 bytes)"
        );
    }

    #[test]
    fn describes_bytes() {
        let event = DrawEvent::RawBytes {
            source: "fixed",
            bytes: &[0x0a, 0xff, 0x00],
        };
        assert_snapshot!(describe_event(&event), @"Random bytes (fixed): 0a ff 00");
    }

    #[test]
    fn describes_reduced_index() {
        let candidate = BigUint::from(15u32);
        let index = BigUint::from(5u32);
        let event = DrawEvent::RankIndex {
            candidate: &candidate,
            index: &index,
        };
        assert_snapshot!(describe_event(&event), @"Combination index: 5 (reduced from 15)");
    }

    #[test]
    fn describes_numbers() {
        assert_snapshot!(
            describe_event(&DrawEvent::Numbers(&[3, 17, 22, 41, 50, 59])),
            @"Numbers: 3 - 17 - 22 - 41 - 50 - 59"
        );
    }
}
