/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Type-dispatched hashing and equality for hash-table keys.
//!
//! The [`KeyHash`] trait associates with a key type a 64-bit hash function
//! and an equality predicate. Implementations are resolved at compile time:
//! there is exactly one per type, and overlapping implementations are
//! rejected by the compiler.
//!
//! Built-in implementations:
//!
//! - primitive integers, `bool` and `char` hash to their value cast to `u64`
//!   (128-bit integers are truncated) and compare with `==`; other types
//!   supporting `as u64`, such as fieldless enums, can opt in with
//!   [`impl_key_hash_by_cast!`](crate::impl_key_hash_by_cast);
//! - raw pointers and [`NonNull`] hash to their address and compare by
//!   address;
//! - [`f32`] and [`f64`] hash to their IEEE 754 bit pattern and compare with
//!   `==` (thus, `0.0` and `-0.0` are equal but have different hashes, and
//!   `NaN` is not equal to itself: do not use such values as keys);
//! - [`CStr`] and [`CString`], as well as [`str`] and [`String`], hash with
//!   [`bytes_hash`] and compare bytewise;
//! - slices, arrays, [`Vec`] and [`VecDeque`] delegate to [`seq_hash`] and
//!   [`seq_equal`];
//! - references, [`Box`], [`Rc`] and [`Arc`] forward to their content.
//!
//! Types without an implementation cannot be used:
//!
//! ```compile_fail
//! use twinhash::default_hash;
//!
//! struct Opaque(u32);
//! default_hash(&Opaque(0));
//! ```
//!
//! # Examples
//!
//! ```rust
//! use twinhash::prelude::*;
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl KeyHash for Point {
//!     fn key_hash(&self) -> u64 {
//!         mix(((self.x as u32 as u64) << 32) | self.y as u32 as u64)
//!     }
//!     fn key_eq(&self, other: &Self) -> bool {
//!         self.x == other.x && self.y == other.y
//!     }
//! }
//!
//! assert!(default_equal(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }));
//! assert_eq!(default_hash(&42_u32), 42);
//! assert_eq!(default_hash(&1.0_f32), 0x3f80_0000);
//! assert_eq!(default_hash("abc"), 417_419_622_498);
//! ```

use crate::seq::{bytes_hash, seq_equal, seq_hash};
use std::collections::VecDeque;
use std::ffi::{CStr, CString};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Hash and equality of a key type.
///
/// The two methods must be consistent: keys that are equal according to
/// [`key_eq`](KeyHash::key_eq) must have the same
/// [`key_hash`](KeyHash::key_hash).
pub trait KeyHash {
    /// Returns the hash of this key.
    fn key_hash(&self) -> u64;

    /// Returns whether this key is equal to `other`.
    fn key_eq(&self, other: &Self) -> bool;
}

/// Returns the hash of `x` using its [`KeyHash`] implementation.
#[inline(always)]
pub fn default_hash<K: KeyHash + ?Sized>(x: &K) -> u64 {
    x.key_hash()
}

/// Returns whether `x` and `y` are equal using their [`KeyHash`]
/// implementation.
#[inline(always)]
pub fn default_equal<K: KeyHash + ?Sized>(x: &K, y: &K) -> bool {
    x.key_eq(y)
}

/// Implements [`KeyHash`] for types that can be cast to `u64` with `as`.
///
/// The hash is the value cast to `u64`, and equality is `==`. The types must
/// be [`Copy`] and [`PartialEq`]; besides primitive integers, fieldless enums
/// qualify. Note that the cast hash is of poor quality: tables should mix it
/// (e.g., using [`KeyHashMap`](crate::keyed::KeyHashMap)).
///
/// # Examples
///
/// ```rust
/// use twinhash::prelude::*;
///
/// #[derive(Clone, Copy, PartialEq)]
/// enum Color {
///     Red,
///     Green,
///     Blue,
/// }
///
/// twinhash::impl_key_hash_by_cast!(Color);
///
/// assert_eq!(default_hash(&Color::Blue), 2);
/// assert!(!default_equal(&Color::Red, &Color::Green));
/// ```
#[macro_export]
macro_rules! impl_key_hash_by_cast {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::key_hash::KeyHash for $ty {
            #[inline(always)]
            fn key_hash(&self) -> u64 {
                *self as u64
            }
            #[inline(always)]
            fn key_eq(&self, other: &Self) -> bool {
                *self == *other
            }
        }
    )*};
}

impl_key_hash_by_cast!(u8, u16, u32, u64, u128, usize);
impl_key_hash_by_cast!(i8, i16, i32, i64, i128, isize);
impl_key_hash_by_cast!(bool, char);

impl KeyHash for f32 {
    #[inline(always)]
    fn key_hash(&self) -> u64 {
        self.to_bits() as u64
    }
    #[inline(always)]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl KeyHash for f64 {
    /// Returns the full 64-bit pattern of the value.
    #[inline(always)]
    fn key_hash(&self) -> u64 {
        self.to_bits()
    }
    #[inline(always)]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: ?Sized> KeyHash for *const T {
    #[inline(always)]
    fn key_hash(&self) -> u64 {
        self.cast::<()>() as usize as u64
    }
    #[inline(always)]
    fn key_eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(*self, *other)
    }
}

impl<T: ?Sized> KeyHash for *mut T {
    #[inline(always)]
    fn key_hash(&self) -> u64 {
        self.cast_const().key_hash()
    }
    #[inline(always)]
    fn key_eq(&self, other: &Self) -> bool {
        self.cast_const().key_eq(&other.cast_const())
    }
}

impl<T: ?Sized> KeyHash for NonNull<T> {
    #[inline(always)]
    fn key_hash(&self) -> u64 {
        self.as_ptr().key_hash()
    }
    #[inline(always)]
    fn key_eq(&self, other: &Self) -> bool {
        self.as_ptr().key_eq(&other.as_ptr())
    }
}

impl KeyHash for CStr {
    /// Hashes the bytes before the terminator.
    #[inline]
    fn key_hash(&self) -> u64 {
        bytes_hash(self.to_bytes())
    }
    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self.to_bytes_with_nul() == other.to_bytes_with_nul()
    }
}

impl KeyHash for CString {
    #[inline]
    fn key_hash(&self) -> u64 {
        self.as_c_str().key_hash()
    }
    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self.as_c_str().key_eq(other.as_c_str())
    }
}

impl KeyHash for str {
    #[inline]
    fn key_hash(&self) -> u64 {
        bytes_hash(self.as_bytes())
    }
    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl KeyHash for String {
    #[inline]
    fn key_hash(&self) -> u64 {
        self.as_str().key_hash()
    }
    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: KeyHash> KeyHash for [T] {
    #[inline]
    fn key_hash(&self) -> u64 {
        seq_hash(self)
    }
    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        seq_equal(self, other)
    }
}

impl<T: KeyHash, const N: usize> KeyHash for [T; N] {
    #[inline]
    fn key_hash(&self) -> u64 {
        self.as_slice().key_hash()
    }
    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self.as_slice().key_eq(other.as_slice())
    }
}

impl<T: KeyHash> KeyHash for Vec<T> {
    #[inline]
    fn key_hash(&self) -> u64 {
        self.as_slice().key_hash()
    }
    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self.as_slice().key_eq(other.as_slice())
    }
}

impl<T: KeyHash> KeyHash for VecDeque<T> {
    #[inline]
    fn key_hash(&self) -> u64 {
        seq_hash(self)
    }
    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        seq_equal(self, other)
    }
}

macro_rules! impl_key_hash_forward {
    ($($ty:ty),*) => {$(
        impl<T: KeyHash + ?Sized> KeyHash for $ty {
            #[inline(always)]
            fn key_hash(&self) -> u64 {
                (**self).key_hash()
            }
            #[inline(always)]
            fn key_eq(&self, other: &Self) -> bool {
                (**self).key_eq(&**other)
            }
        }
    )*};
}

impl_key_hash_forward!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
