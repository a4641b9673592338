/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Standard hash maps and sets driven by [`KeyHash`].
//!
//! [`Keyed`] adapts a [`KeyHash`] implementation to the [`Hash`]/[`Eq`]
//! pair expected by [`std::collections`]: hashing writes the key hash as a
//! single `u64`, which the [`MixHasher`](crate::mix::MixHasher) of
//! [`KeyHashMap`] and [`KeyHashSet`] then passes through [`mix`](crate::mix::mix).
//!
//! # Examples
//!
//! ```rust
//! use twinhash::prelude::*;
//!
//! let mut map = KeyHashMap::default();
//! map.insert(Keyed(String::from("foo")), 1);
//! map.insert(Keyed(String::from("bar")), 2);
//! // Lookups by `str`, without allocating
//! assert_eq!(map.get(Keyed::from_ref("foo")), Some(&1));
//! assert_eq!(map.get(Keyed::from_ref("baz")), None);
//! ```

use crate::key_hash::KeyHash;
use crate::mix::MixBuildHasher;
use core::borrow::Borrow;
use core::hash::{Hash, Hasher};
use core::ops::Deref;
use std::collections::{HashMap, HashSet};

/// A hash map whose keys are hashed and compared using [`KeyHash`].
pub type KeyHashMap<K, V> = HashMap<Keyed<K>, V, MixBuildHasher>;

/// A hash set whose elements are hashed and compared using [`KeyHash`].
pub type KeyHashSet<K> = HashSet<Keyed<K>, MixBuildHasher>;

/// A wrapper implementing [`Hash`] and [`Eq`] using the [`KeyHash`]
/// implementation of the wrapped key.
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Keyed<K: ?Sized>(pub K);

impl<K> Keyed<K> {
    /// Wraps a key.
    pub const fn new(key: K) -> Self {
        Keyed(key)
    }

    /// Returns the wrapped key.
    pub fn into_inner(self) -> K {
        self.0
    }
}

impl<K: ?Sized> Keyed<K> {
    /// Views a reference to a key as a reference to a wrapped key.
    pub fn from_ref(key: &K) -> &Self {
        // SAFETY: Keyed is repr(transparent), so pointer metadata and layout
        // are those of K.
        unsafe { &*(key as *const K as *const Self) }
    }
}

impl<K> From<K> for Keyed<K> {
    fn from(key: K) -> Self {
        Keyed(key)
    }
}

impl<K: ?Sized> Deref for Keyed<K> {
    type Target = K;

    fn deref(&self) -> &K {
        &self.0
    }
}

impl<K: KeyHash + ?Sized> Hash for Keyed<K> {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.key_hash());
    }
}

impl<K: KeyHash + ?Sized> PartialEq for Keyed<K> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0.key_eq(&other.0)
    }
}

impl<K: KeyHash + ?Sized> Eq for Keyed<K> {}

// Owned keys hash and compare like their borrowed forms, so the borrowed
// forms can be used for lookups.

impl Borrow<Keyed<str>> for Keyed<String> {
    fn borrow(&self) -> &Keyed<str> {
        Keyed::from_ref(self.0.as_str())
    }
}

impl<T> Borrow<Keyed<[T]>> for Keyed<Vec<T>> {
    fn borrow(&self) -> &Keyed<[T]> {
        Keyed::from_ref(self.0.as_slice())
    }
}
