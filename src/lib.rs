/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Default hash and equality for hash-table keys, a table of twin primes for
//! sizing hash tables, and a 64-bit bit mixer.
//!
//! - [`KeyHash`](key_hash::KeyHash) associates a hash function and an
//!   equality predicate with a key type; [`default_hash`] and
//!   [`default_equal`] invoke them.
//! - [`primes`] contains the twin-prime table and the queries used to pick
//!   table capacities.
//! - [`mix`](mix::mix) redistributes the bits of weak hash codes.
//! - [`KeyHashMap`](keyed::KeyHashMap) and [`KeyHashSet`](keyed::KeyHashSet)
//!   plug all of the above into [`std::collections`].

#![deny(unconditional_recursion)]

pub mod key_hash;
pub mod keyed;
pub mod mix;
pub mod primes;
pub mod seq;

pub use key_hash::{default_equal, default_hash};

pub mod prelude {
    pub use crate::key_hash::*;
    pub use crate::keyed::*;
    pub use crate::mix::*;
    pub use crate::primes::*;
}

/// Initializes the `env_logger` logger with a custom format including
/// the time elapsed since initialization.
///
/// The default level is `info`, and it can be changed with `RUST_LOG`.
pub fn init_env_logger() -> anyhow::Result<()> {
    use std::io::Write;
    use std::time::Instant;

    let start = Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:>10.3}s {} {}] {}",
                start.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}
