/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{rngs::SmallRng, Rng, SeedableRng};
use twinhash::primes::*;

fn naive_at_most(n: u64) -> Option<u64> {
    TWIN_PRIMES.iter().rev().copied().find(|&p| p <= n)
}

fn naive_at_least(n: u64) -> Option<u64> {
    TWIN_PRIMES.iter().copied().find(|&p| p >= n)
}

#[test]
fn test_table() {
    assert_eq!(TWIN_PRIMES.len(), 140);
    assert_eq!(MIN_TWIN_PRIME, 3);
    assert_eq!(MAX_TWIN_PRIME, 9_223_372_036_854_804_821);
    for (i, &p) in TWIN_PRIMES.iter().enumerate() {
        assert!(is_twin_prime(p), "entry {} ({}) is not a twin prime", i, p);
    }
    for w in TWIN_PRIMES.windows(2) {
        assert!(w[0] < w[1]);
    }
}

#[test]
fn test_fixtures() {
    assert_eq!(at_most(1000), 809);
    assert_eq!(at_least(1000), 1019);
    assert_eq!(at_most(1019), 1019);
    assert_eq!(at_least(1019), 1019);
    assert_eq!(next_smaller(1019), 809);
    assert_eq!(next_larger(1019), 1427);
    assert_eq!(at_least(0), 3);
    assert_eq!(at_least(1), 3);
    assert_eq!(at_least(4), 5);
    assert_eq!(at_most(u64::MAX), MAX_TWIN_PRIME);
}

#[test]
fn test_neighbors() {
    for i in 1..TWIN_PRIMES.len() {
        assert_eq!(next_smaller(TWIN_PRIMES[i]), TWIN_PRIMES[i - 1]);
        assert_eq!(next_larger(TWIN_PRIMES[i - 1]), TWIN_PRIMES[i]);
        assert_eq!(next_smaller(TWIN_PRIMES[i - 1] + 1), TWIN_PRIMES[i - 1]);
        assert_eq!(next_larger(TWIN_PRIMES[i] - 1), TWIN_PRIMES[i]);
    }
}

#[test]
fn test_random() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..100_000 {
        // Sample on a logarithmic scale so that all entries get hit
        let n = rng.random::<u64>() >> rng.random_range(0..64_u32);
        assert_eq!(try_at_most(n).ok(), naive_at_most(n), "n = {}", n);
        assert_eq!(try_at_least(n).ok(), naive_at_least(n), "n = {}", n);
        if let Some(m) = n.checked_add(1) {
            assert_eq!(try_at_most(n), try_next_smaller(m));
        }
        if n != 0 {
            assert_eq!(try_at_least(n), try_next_larger(n - 1));
        }
    }
}

#[test]
fn test_errors() {
    assert_eq!(
        try_next_smaller(0),
        Err(PrimeError::NoneSmaller { n: 0, min: 3 })
    );
    assert_eq!(
        try_next_larger(u64::MAX),
        Err(PrimeError::NoneLarger {
            n: u64::MAX,
            max: MAX_TWIN_PRIME
        })
    );
    assert_eq!(
        try_next_smaller(3).unwrap_err().to_string(),
        "No twin prime smaller than 3 (the smallest one is 3)"
    );
}

#[test]
#[should_panic(expected = "No twin prime smaller than 3")]
fn test_next_smaller_below_min() {
    next_smaller(MIN_TWIN_PRIME);
}

#[test]
#[should_panic(expected = "No twin prime larger than")]
fn test_next_larger_above_max() {
    next_larger(MAX_TWIN_PRIME);
}

#[test]
#[should_panic]
fn test_at_most_below_min() {
    at_most(2);
}

#[test]
#[should_panic]
fn test_at_least_above_max() {
    at_least(MAX_TWIN_PRIME + 1);
}
