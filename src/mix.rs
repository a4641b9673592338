/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A 64-bit avalanche mixer.
//!
//! [`mix`] is Thomas Wang's 64-bit integer hash: a fixed sequence of
//! invertible steps (multiplications by odd constants and xorshifts), so it
//! is a bijection of `u64`; [`unmix`] is its inverse. It is meant to
//! redistribute hash codes of poor quality (e.g., the identity hash of
//! integers) before reducing them modulo a table size.
//!
//! [`MixHasher`] wraps the mixer in a [`core::hash::Hasher`], so that
//! [`std::collections::HashMap`] can use it through [`MixBuildHasher`].

use mem_dbg::{MemDbg, MemSize};

/// Mixes the bits of `key`.
///
/// The result must not change across versions, as it might be persisted in
/// hash-dependent structures.
///
/// # Examples
///
/// ```rust
/// use twinhash::mix::{mix, unmix};
///
/// assert_eq!(mix(0), 0x77cf_a1ee_f01b_ca90);
/// assert_eq!(unmix(mix(42)), 42);
/// ```
#[inline(always)]
#[must_use]
pub const fn mix(mut key: u64) -> u64 {
    key = (!key).wrapping_add(key << 21);
    key ^= key >> 24;
    key = key.wrapping_add(key << 3).wrapping_add(key << 8);
    key ^= key >> 14;
    key = key.wrapping_add(key << 2).wrapping_add(key << 4);
    key ^= key >> 28;
    key = key.wrapping_add(key << 31);
    key
}

/// Inverse of `1 + 2³¹` modulo 2⁶⁴.
const INV_2_31_PLUS_1: u64 = 0x3fff_ffff_8000_0001;
/// Inverse of 21 modulo 2⁶⁴.
const INV_21: u64 = 0xcf3c_f3cf_3cf3_cf3d;
/// Inverse of 265 modulo 2⁶⁴.
const INV_265: u64 = 0xd38f_f08b_1c03_dd39;
/// Inverse of `2²¹ - 1` modulo 2⁶⁴.
const INV_2_21_MINUS_1: u64 = 0x7fff_fbff_ffdf_ffff;

/// Inverts [`mix`].
#[inline]
#[must_use]
pub const fn unmix(mut key: u64) -> u64 {
    key = key.wrapping_mul(INV_2_31_PLUS_1);
    key ^= (key >> 28) ^ (key >> 56);
    key = key.wrapping_mul(INV_21);
    key ^= (key >> 14) ^ (key >> 28) ^ (key >> 42) ^ (key >> 56);
    key = key.wrapping_mul(INV_265);
    key ^= (key >> 24) ^ (key >> 48);
    // ~k + (k << 21) is k * (2²¹ - 1) - 1
    key.wrapping_add(1).wrapping_mul(INV_2_21_MINUS_1)
}

/// A hasher that folds every value written into it with [`mix`].
///
/// Each integer write updates the state to `mix(state ^ value)`, so hashing a
/// single `u64` (which is what [`Keyed`](crate::keyed::Keyed) does) yields
/// exactly `mix(value)`. Byte slices are folded eight bytes at a time in
/// little-endian order, with the last word zero-padded.
#[derive(Debug, Clone, Default, MemDbg, MemSize)]
pub struct MixHasher {
    state: u64,
}

impl MixHasher {
    #[inline(always)]
    fn fold(&mut self, value: u64) {
        self.state = mix(self.state ^ value);
    }
}

impl core::hash::Hasher for MixHasher {
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(8);
        for chunk in &mut chunks {
            let mut word = [0; 8];
            word.copy_from_slice(chunk);
            self.fold(u64::from_le_bytes(word));
        }
        let rem = chunks.remainder();
        if !rem.is_empty() {
            let mut word = [0; 8];
            word[..rem.len()].copy_from_slice(rem);
            self.fold(u64::from_le_bytes(word));
        }
    }
    #[inline(always)]
    fn write_u8(&mut self, i: u8) {
        self.fold(i as u64);
    }
    #[inline(always)]
    fn write_u16(&mut self, i: u16) {
        self.fold(i as u64);
    }
    #[inline(always)]
    fn write_u32(&mut self, i: u32) {
        self.fold(i as u64);
    }
    #[inline(always)]
    fn write_u64(&mut self, i: u64) {
        self.fold(i);
    }
    #[inline(always)]
    fn write_u128(&mut self, i: u128) {
        self.fold(i as u64);
        self.fold((i >> 64) as u64);
    }
    #[inline(always)]
    fn write_usize(&mut self, i: usize) {
        self.fold(i as u64);
    }
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// A [`BuildHasher`](core::hash::BuildHasher) for [`MixHasher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MixBuildHasher;

impl core::hash::BuildHasher for MixBuildHasher {
    type Hasher = MixHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        MixHasher::default()
    }
}
