/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Hashing and comparison of sequences.
//!
//! Byte strings are hashed with the classical `sdbm` recurrence
//! `v = byte + (v << 6) + (v << 16) - v`; sequences of keys use the same
//! recurrence on the hashes of their elements, starting from their length.

use crate::key_hash::KeyHash;

/// One step of the `sdbm` recurrence, with wrapping arithmetic.
#[inline(always)]
#[must_use]
pub const fn combine(v: u64, x: u64) -> u64 {
    x.wrapping_add(v << 6).wrapping_add(v << 16).wrapping_sub(v)
}

/// Hashes a byte string, starting from zero.
///
/// # Examples
///
/// ```rust
/// use twinhash::seq::bytes_hash;
///
/// assert_eq!(bytes_hash(b""), 0);
/// assert_eq!(bytes_hash(b"a"), 97);
/// assert_eq!(bytes_hash(b"abc"), 417_419_622_498);
/// ```
#[must_use]
pub const fn bytes_hash(bytes: &[u8]) -> u64 {
    let mut v = 0;
    let mut i = 0;
    while i < bytes.len() {
        v = combine(v, bytes[i] as u64);
        i += 1;
    }
    v
}

/// Hashes a sequence of keys by combining the [`KeyHash`] of each element,
/// starting from the length of the sequence.
pub fn seq_hash<'a, T: KeyHash + 'a, I>(items: I) -> u64
where
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = items.into_iter();
    let len = iter.len() as u64;
    iter.fold(len, |v, item| combine(v, item.key_hash()))
}

/// Returns whether two sequences have the same length and pairwise equal
/// elements according to [`KeyHash::key_eq`].
pub fn seq_equal<'a, T: KeyHash + 'a, I, J>(a: I, b: J) -> bool
where
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator,
    J: IntoIterator<Item = &'a T>,
    J::IntoIter: ExactSizeIterator,
{
    let (a, b) = (a.into_iter(), b.into_iter());
    a.len() == b.len() && a.zip(b).all(|(x, y)| x.key_eq(y))
}
