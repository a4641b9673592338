/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A table of twin primes for sizing hash tables.
//!
//! [`TWIN_PRIMES`] contains 140 primes `p` such that `p + 2` is also prime,
//! spaced approximately geometrically (with ratio ≈1.36) from 3 to just above
//! 2<sup>63</sup>. Using the lower element of a twin pair as the capacity of
//! an open-addressing table makes double hashing with step modulo `p - 2`
//! possible, and in any case a prime capacity spreads badly distributed hash
//! codes better than a power of two.
//!
//! The four queries [`next_smaller`], [`next_larger`], [`at_most`] and
//! [`at_least`] panic when the answer would fall outside the table: callers
//! must not ask for a prime below [`MIN_TWIN_PRIME`] or above
//! [`MAX_TWIN_PRIME`]. The `try_` variants return a [`PrimeError`] instead.
//!
//! # Examples
//!
//! ```rust
//! use twinhash::primes::*;
//!
//! assert_eq!(at_least(1000), 1019);
//! assert_eq!(at_most(1000), 809);
//! assert_eq!(next_larger(1019), 1427);
//! assert!(try_next_smaller(3).is_err());
//! ```

/// The table of twin primes, in increasing order.
///
/// For every entry `p`, both `p` and `p + 2` are prime.
pub const TWIN_PRIMES: [u64; 140] = [
    3, 5, 11, 17,
    29, 41, 59, 71,
    101, 107, 137, 149,
    179, 191, 227, 311,
    419, 569, 809, 1019,
    1427, 1871, 2549, 3461,
    4721, 6359, 8627, 11717,
    15971, 21599, 29387, 39839,
    54401, 73607, 99989, 135647,
    184271, 250499, 340061, 461687,
    627269, 852011, 1157201, 1571681,
    2134961, 2899859, 3938939, 5350601,
    7268117, 9871907, 13409087, 18214277,
    24740579, 33605837, 45648479, 62004911,
    84223157, 114403151, 155396957, 211080509,
    286716767, 389456159, 529010477, 718571177,
    976057307, 1325808191, 1800886181, 2446198751,
    3322746461, 4513388819, 6130674491, 8327483651,
    11311476971, 15364728437, 20870380721, 28348879619,
    38507154641, 52305452009, 71048102969, 96506821757,
    131088182219, 178061107517, 241865875367, 328533852761,
    446257631579, 606165456731, 823373172227, 1118413089161,
    1519174876181, 2063541930557, 2802972434231, 3807363615551,
    5171659028951, 7024823428001, 9542033587649, 12961237526357,
    17605647333737, 23914291935881, 32483517814931, 44123360728259,
    59934117144281, 81410353573187, 110582185654229, 150207181855397,
    204031032190619, 277141622540177, 376449984688331, 511343585540969,
    694573709945279, 943460820060149, 1281531832035041, 1740744079244057,
    2364506189917481, 3211781438075909, 4362661451242109, 5925937148931311,
    8049382581151697, 10933723782311087, 14851613094874349, 20173402576409867,
    27402152810616161, 37221186451433639, 50558681663714429, 68675411379164507,
    93283922224622867, 126710418923674967, 172114656855360101, 233788628875755491,
    317562280808761211, 431354607268158557, 585922222052307377, 795876164320855769,
    1081063057679233787, 1468441181017223981, 1994628793195771541, 2709365600799609569,
    3680214576184427249, 4998948581455048697, 6790225516127390081, 9223372036854804821,
];

/// The smallest entry of [`TWIN_PRIMES`].
pub const MIN_TWIN_PRIME: u64 = TWIN_PRIMES[0];

/// The largest entry of [`TWIN_PRIMES`].
pub const MAX_TWIN_PRIME: u64 = TWIN_PRIMES[TWIN_PRIMES.len() - 1];

/// Out-of-range twin-prime queries.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeError {
    #[error("No twin prime smaller than {n} (the smallest one is {min})")]
    /// No entry of the table is smaller than `n`.
    NoneSmaller { n: u64, min: u64 },
    #[error("No twin prime larger than {n} (the largest one is {max})")]
    /// No entry of the table is larger than `n`.
    NoneLarger { n: u64, max: u64 },
}

/// Returns the largest twin prime in the table strictly smaller than `n`, or
/// an error if `n` is at most [`MIN_TWIN_PRIME`].
pub fn try_next_smaller(n: u64) -> Result<u64, PrimeError> {
    match TWIN_PRIMES.partition_point(|&p| p < n) {
        0 => Err(PrimeError::NoneSmaller {
            n,
            min: MIN_TWIN_PRIME,
        }),
        pos => Ok(TWIN_PRIMES[pos - 1]),
    }
}

/// Returns the smallest twin prime in the table strictly larger than `n`, or
/// an error if `n` is at least [`MAX_TWIN_PRIME`].
pub fn try_next_larger(n: u64) -> Result<u64, PrimeError> {
    TWIN_PRIMES
        .get(TWIN_PRIMES.partition_point(|&p| p <= n))
        .copied()
        .ok_or(PrimeError::NoneLarger {
            n,
            max: MAX_TWIN_PRIME,
        })
}

/// Returns the largest twin prime in the table smaller than or equal to `n`,
/// or an error if `n` is smaller than [`MIN_TWIN_PRIME`].
pub fn try_at_most(n: u64) -> Result<u64, PrimeError> {
    match n.checked_add(1) {
        Some(n) => try_next_smaller(n),
        // Every entry is at most u64::MAX
        None => Ok(MAX_TWIN_PRIME),
    }
}

/// Returns the smallest twin prime in the table larger than or equal to `n`,
/// or an error if `n` is larger than [`MAX_TWIN_PRIME`].
pub fn try_at_least(n: u64) -> Result<u64, PrimeError> {
    if n == 0 {
        Ok(MIN_TWIN_PRIME)
    } else {
        try_next_larger(n - 1)
    }
}

/// Returns the largest twin prime in the table strictly smaller than `n`.
///
/// # Panics
///
/// If `n` is smaller than or equal to [`MIN_TWIN_PRIME`].
#[track_caller]
pub fn next_smaller(n: u64) -> u64 {
    try_next_smaller(n).unwrap_or_else(|e| panic!("{}", e))
}

/// Returns the smallest twin prime in the table strictly larger than `n`.
///
/// # Panics
///
/// If `n` is larger than or equal to [`MAX_TWIN_PRIME`].
#[track_caller]
pub fn next_larger(n: u64) -> u64 {
    try_next_larger(n).unwrap_or_else(|e| panic!("{}", e))
}

/// Returns the largest twin prime in the table smaller than or equal to `n`.
///
/// This is `next_smaller(n + 1)`.
///
/// # Panics
///
/// If `n` is smaller than [`MIN_TWIN_PRIME`].
#[track_caller]
pub fn at_most(n: u64) -> u64 {
    try_at_most(n).unwrap_or_else(|e| panic!("{}", e))
}

/// Returns the smallest twin prime in the table larger than or equal to `n`.
///
/// This is `next_larger(n - 1)`, or [`MIN_TWIN_PRIME`] if `n` is zero.
///
/// # Panics
///
/// If `n` is larger than [`MAX_TWIN_PRIME`].
#[track_caller]
pub fn at_least(n: u64) -> u64 {
    try_at_least(n).unwrap_or_else(|e| panic!("{}", e))
}

#[inline(always)]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp != 0 {
        if exp & 1 != 0 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Returns whether `n` is prime.
///
/// This is a Miller–Rabin test with the first twelve primes as bases, which is
/// deterministic for all 64-bit integers.
pub fn is_prime(n: u64) -> bool {
    const BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
    if n < 2 {
        return false;
    }
    for p in BASES {
        if n % p == 0 {
            return n == p;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    'witness: for a in BASES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Returns whether `p` is the lower element of a twin-prime pair.
pub fn is_twin_prime(p: u64) -> bool {
    p.checked_add(2).is_some_and(|q| is_prime(p) && is_prime(q))
}
