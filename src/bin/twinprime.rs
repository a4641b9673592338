/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ffi::CString;
use std::num::ParseIntError;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use dsi_progress_logger::*;
use log::info;
use twinhash::{init_env_logger, prelude::*};

#[derive(Parser, Debug)]
#[command(about = "Queries the twin-prime table, mixes 64-bit values and hashes strings.", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the smallest twin prime in the table larger than or equal to N.
    AtLeast {
        /// A nonnegative integer (decimal, or hexadecimal with a 0x prefix).
        #[arg(value_parser = parse_u64)]
        n: u64,
    },
    /// Prints the largest twin prime in the table smaller than or equal to N.
    AtMost {
        /// A nonnegative integer (decimal, or hexadecimal with a 0x prefix).
        #[arg(value_parser = parse_u64)]
        n: u64,
    },
    /// Prints the largest twin prime in the table strictly smaller than N.
    Smaller {
        /// A nonnegative integer (decimal, or hexadecimal with a 0x prefix).
        #[arg(value_parser = parse_u64)]
        n: u64,
    },
    /// Prints the smallest twin prime in the table strictly larger than N.
    Larger {
        /// A nonnegative integer (decimal, or hexadecimal with a 0x prefix).
        #[arg(value_parser = parse_u64)]
        n: u64,
    },
    /// Prints in hexadecimal the result of mixing N.
    Mix {
        /// A nonnegative integer (decimal, or hexadecimal with a 0x prefix).
        #[arg(value_parser = parse_u64)]
        n: u64,
        /// Apply the inverse transformation.
        #[arg(long, default_value_t = false)]
        inverse: bool,
    },
    /// Prints the hash of a string, as a zero-terminated byte string.
    Hash {
        /// The string to hash (it cannot contain NUL characters).
        string: String,
    },
    /// Prints the twin-prime table.
    Table,
    /// Checks that every entry of the table is the lower element of a twin-prime pair.
    Verify,
}

fn parse_u64(s: &str) -> Result<u64, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn verify() -> Result<()> {
    let mut pl = ProgressLogger::default();
    pl.item_name("prime").expected_updates(Some(TWIN_PRIMES.len()));
    pl.start("Verifying the twin-prime table...");

    for (i, &p) in TWIN_PRIMES.iter().enumerate() {
        ensure!(
            is_twin_prime(p),
            "Entry {} ({}) is not the lower element of a twin-prime pair",
            i,
            p
        );
        pl.light_update();
    }

    pl.done();
    info!("All {} entries are twin primes", TWIN_PRIMES.len());
    Ok(())
}

pub fn main() -> Result<()> {
    init_env_logger()?;

    let args = Args::parse();

    match args.command {
        Command::AtLeast { n } => println!("{}", try_at_least(n)?),
        Command::AtMost { n } => println!("{}", try_at_most(n)?),
        Command::Smaller { n } => println!("{}", try_next_smaller(n)?),
        Command::Larger { n } => println!("{}", try_next_larger(n)?),
        Command::Mix { n, inverse } => {
            let m = if inverse { unmix(n) } else { mix(n) };
            println!("{:#018x}", m);
        }
        Command::Hash { string } => {
            let s = CString::new(string)?;
            println!("{}", default_hash(s.as_c_str()));
        }
        Command::Table => {
            for (i, p) in TWIN_PRIMES.iter().enumerate() {
                println!("{}\t{}\t{}", i, p, p + 2);
            }
        }
        Command::Verify => verify()?,
    }

    Ok(())
}
