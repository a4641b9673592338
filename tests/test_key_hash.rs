/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::VecDeque;
use std::ffi::{CStr, CString};
use twinhash::prelude::*;
use twinhash::seq::{bytes_hash, combine};

fn c(s: &[u8]) -> &CStr {
    CStr::from_bytes_with_nul(s).unwrap()
}

#[test]
fn test_integers() {
    assert_eq!(default_hash(&42), 42);
    assert_eq!(default_hash(&42_u8), 42);
    assert_eq!(default_hash(&42_i64), 42);
    assert!(default_equal(&42, &42));
    assert!(!default_equal(&42, &43));
    assert_eq!(default_hash(&u64::MAX), u64::MAX);
    assert_eq!(default_hash(&-2_i32), (-2_i64) as u64);
}

#[test]
fn test_c_strings() {
    // v = 97, then 98 + (97 << 6) + (97 << 16) - 97, then the same for 99
    let mut v = 97_u64;
    v = 98 + (v << 6) + (v << 16) - v;
    v = 99 + (v << 6) + (v << 16) - v;
    assert_eq!(v, 417_419_622_498);
    assert_eq!(default_hash(c(b"abc\0")), 417_419_622_498);
    assert_eq!(default_hash(c(b"\0")), 0);
    assert_eq!(default_hash(c(b"hello\0")), 7_416_051_667_693_574_450);

    assert!(default_equal(c(b"abc\0"), c(b"abc\0")));
    assert!(!default_equal(c(b"abc\0"), c(b"abd\0")));
    assert!(!default_equal(c(b"ab\0"), c(b"abc\0")));

    let owned = CString::new("abc").unwrap();
    assert_eq!(default_hash(&owned), 417_419_622_498);
    assert!(default_equal(&owned, &CString::new("abc").unwrap()));
}

#[test]
fn test_strings() {
    assert_eq!(default_hash("abc"), default_hash(c(b"abc\0")));
    assert_eq!(default_hash(&String::from("hello")), bytes_hash(b"hello"));
    assert!(default_equal("abc", "abc"));
    assert!(!default_equal("abc", "abd"));
    assert!(!default_equal("ab", "abc"));
}

#[test]
fn test_floats() {
    assert_eq!(default_hash(&1.0_f32), 0x3f80_0000);
    assert_eq!(default_hash(&-0.0_f32), 0x8000_0000);
    // The full 64-bit pattern, not just its lower half
    assert_eq!(default_hash(&1.5_f64), 0x3ff8_0000_0000_0000);
    assert_eq!(default_hash(&-2.0_f64), 0xc000_0000_0000_0000);
    assert_ne!(default_hash(&1.5_f64), default_hash(&2.5_f64));
    assert!(default_equal(&1.5_f64, &1.5));
    assert!(!default_equal(&f64::NAN, &f64::NAN));
}

#[test]
fn test_sequences() {
    let v = vec![1_u64, 2, 3];
    assert_eq!(default_hash(&v), 846_866_821_710_399);
    assert_eq!(default_hash(&v), default_hash(&[1_u64, 2, 3]));
    assert_eq!(default_hash(&v), default_hash(v.as_slice()));
    assert_eq!(default_hash(&v), default_hash(&VecDeque::from(v.clone())));
    assert!(default_equal(&v, &vec![1, 2, 3]));
    assert!(!default_equal(&v, &vec![1, 2]));

    // Elements use their own descriptor
    let words = vec!["foo".to_string(), "bar".to_string()];
    let expected = combine(combine(2, bytes_hash(b"foo")), bytes_hash(b"bar"));
    assert_eq!(default_hash(&words), expected);

    let nested = vec![vec![1_u8], vec![]];
    assert!(default_equal(&nested, &vec![vec![1], vec![]]));
    assert!(!default_equal(&nested, &vec![vec![], vec![1]]));
}

struct CaseInsensitive(&'static str);

impl KeyHash for CaseInsensitive {
    fn key_hash(&self) -> u64 {
        self.0.bytes().fold(0, |v, b| combine(v, b.to_ascii_lowercase() as u64))
    }
    fn key_eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(other.0)
    }
}

#[test]
fn test_specialization() {
    let a = CaseInsensitive("Hello");
    let b = CaseInsensitive("hELLO");
    assert!(default_equal(&a, &b));
    assert_eq!(default_hash(&a), default_hash(&b));
    assert_eq!(default_hash(&a), default_hash("hello"));
    // Sequences pick up user descriptors
    assert!(default_equal(&[a], &[b]));
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

twinhash::impl_key_hash_by_cast!(Suit);

#[test]
fn test_cast_macro() {
    assert_eq!(default_hash(&Suit::Clubs), 0);
    assert_eq!(default_hash(&Suit::Spades), 3);
    assert!(default_equal(&Suit::Hearts, &Suit::Hearts));
    assert!(!default_equal(&Suit::Hearts, &Suit::Diamonds));
}
