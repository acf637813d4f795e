use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::draw_spec::DrawSpec;
use crate::error::DrawError;

/// Exact binomial coefficient. `C(n, k)` is zero when `k > n`.
pub fn n_choose_k(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut result = BigUint::one();
    for i in 1..=k {
        // Each partial product is itself a binomial coefficient, so the division is exact.
        result = result * (n - (k - i)) / i;
    }
    result
}

/// Number of distinct tickets for a draw, `C(max_number, balls)`.
pub fn count_combinations(spec: &DrawSpec) -> BigUint {
    n_choose_k(spec.max_number(), spec.balls())
}

/// Decode `rank` into the strictly increasing `k`-tuple of numbers in `1..=n` it
/// represents in the combinatorial number system.
///
/// The largest number is found first: it is the smallest `i` with `C(i, k) > rank`.
/// `C(i - 1, k)` is then removed from the rank and the search repeats with one
/// ball fewer. Ranks outside `0..C(n, k)` return
/// [`DrawError::ArithmeticInvariantViolation`].
pub fn unrank_combination(n: u64, k: u64, rank: BigUint) -> Result<Vec<u64>, DrawError> {
    let mut combo = Vec::with_capacity(k as usize);
    let mut position = rank;
    for balls in (1..=k).rev() {
        // C(balls - 1, balls) is zero, which never exceeds the position.
        let mut value = balls - 1;
        let mut below = BigUint::zero();
        loop {
            value += 1;
            if value > n {
                return Err(DrawError::ArithmeticInvariantViolation(
                    "rank index is outside the combination space",
                ));
            }
            let count = if value == balls {
                BigUint::one()
            } else {
                // C(i, k) = C(i - 1, k) * i / (i - k)
                &below * value / (value - balls)
            };
            if count > position {
                break;
            }
            below = count;
        }
        position -= below;
        combo.push(value);
    }
    debug_assert!(position.is_zero());
    combo.reverse();
    Ok(combo)
}

/// Inverse of [`unrank_combination`].
///
/// Returns `None` unless `numbers` is strictly increasing and within `1..=max_number`.
pub fn rank_combination(max_number: u64, numbers: &[u64]) -> Option<BigUint> {
    if numbers.windows(2).any(|w| w[0] >= w[1]) {
        return None;
    }
    if numbers.iter().any(|&v| v == 0 || v > max_number) {
        return None;
    }
    let mut rank = BigUint::zero();
    for (j, &value) in numbers.iter().enumerate() {
        rank += n_choose_k(value - 1, j as u64 + 1);
    }
    Some(rank)
}

#[cfg(test)]
mod tests {
    use super::{n_choose_k, rank_combination, unrank_combination};
    use crate::error::DrawError;
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn factorial(n: u64) -> BigUint {
        (1..=n).fold(BigUint::from(1u32), |acc, i| acc * i)
    }

    #[test]
    fn binomial_values() {
        assert_eq!(n_choose_k(0, 0), BigUint::from(1u32));
        assert_eq!(n_choose_k(5, 2), BigUint::from(10u32));
        assert_eq!(n_choose_k(5, 3), BigUint::from(10u32));
        assert_eq!(n_choose_k(5, 6), BigUint::from(0u32));
        assert_eq!(n_choose_k(59, 6), BigUint::from(45_057_474u64));
    }

    #[test]
    fn binomial_matches_factorials() {
        for n in 0..=30 {
            for k in 0..=n {
                let expected = factorial(n) / (factorial(k) * factorial(n - k));
                assert_eq!(n_choose_k(n, k), expected, "C({n}, {k})");
            }
        }
    }

    #[test]
    fn binomial_exceeds_u64() {
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(n_choose_k(100, 50), expected);
    }

    #[test]
    fn unrank_five_choose_two() {
        let combos: Vec<Vec<u64>> = (0u32..10)
            .map(|rank| unrank_combination(5, 2, BigUint::from(rank)).unwrap())
            .collect();
        assert_eq!(
            combos,
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
                vec![1, 4],
                vec![2, 4],
                vec![3, 4],
                vec![1, 5],
                vec![2, 5],
                vec![3, 5],
                vec![4, 5],
            ]
        );
        let distinct: HashSet<_> = combos.into_iter().collect();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn unrank_full_draw() {
        assert_eq!(
            unrank_combination(6, 6, BigUint::from(0u32)).unwrap(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn unrank_last_rank() {
        let last = n_choose_k(59, 6) - 1u32;
        assert_eq!(
            unrank_combination(59, 6, last).unwrap(),
            vec![54, 55, 56, 57, 58, 59]
        );
    }

    #[test]
    fn unrank_out_of_range() {
        assert!(matches!(
            unrank_combination(5, 2, BigUint::from(10u32)),
            Err(DrawError::ArithmeticInvariantViolation(_))
        ));
    }

    #[test]
    fn rank_rejects_bad_tickets() {
        assert!(rank_combination(5, &[2, 2]).is_none());
        assert!(rank_combination(5, &[3, 2]).is_none());
        assert!(rank_combination(5, &[0, 2]).is_none());
        assert!(rank_combination(5, &[2, 6]).is_none());
        assert_eq!(rank_combination(5, &[2, 5]), Some(BigUint::from(7u32)));
    }

    #[test]
    fn combination_roundtrip() {
        let n = 8;
        let k = 3;
        let total: u64 = n_choose_k(n, k).try_into().unwrap();
        for rank in 0..total {
            let combo = unrank_combination(n, k, BigUint::from(rank)).unwrap();
            assert_eq!(combo.len(), k as usize);
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
            assert!(combo.iter().all(|&v| (1..=n).contains(&v)));
            let reranked = rank_combination(n, &combo).unwrap();
            assert_eq!(BigUint::from(rank), reranked);
        }
    }

    fn draw_and_rank_strategy() -> impl Strategy<Value = (u64, u64, u64)> {
        (1u64..=60).prop_flat_map(|n| {
            (Just(n), 1..=n.min(8)).prop_flat_map(|(n, k)| {
                let total: u64 = n_choose_k(n, k).try_into().unwrap();
                (Just(n), Just(k), 0..total)
            })
        })
    }

    proptest! {
        #[test]
        fn unrank_then_rank((n, k, rank) in draw_and_rank_strategy()) {
            let combo = unrank_combination(n, k, BigUint::from(rank)).unwrap();
            prop_assert_eq!(combo.len() as u64, k);
            prop_assert!(combo.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(combo.iter().all(|&v| (1..=n).contains(&v)));
            prop_assert_eq!(rank_combination(n, &combo), Some(BigUint::from(rank)));
        }
    }
}
