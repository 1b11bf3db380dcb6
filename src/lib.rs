//! A packed memory array for Rust.
//!
//! This crate provides [`PmaSet`], an ordered set that keeps its items sorted
//! inside a single flat array, interleaved with empty slots. The gaps absorb
//! insertions and deletions so that most mutations only touch a handful of
//! adjacent cells, while a density-governed rebalancing scheme keeps the gaps
//! spread evenly enough that no mutation ever degenerates into shifting the
//! whole array.
//!
//! # Example
//!
//! ```
//! use pma::PmaSet;
//!
//! let mut primes: PmaSet<u32> = PmaSet::new();
//! primes.insert(5)?;
//! primes.insert(2)?;
//! primes.insert(3)?;
//!
//! assert!(primes.contains(&3));
//! assert_eq!(primes.successor(&3), Some(&5));
//!
//! let in_order: Vec<u32> = primes.iter().copied().collect();
//! assert_eq!(in_order, [2, 3, 5]);
//! # Ok::<(), pma::PmaError>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Ordered iteration** - Items come back in comparator order, lazily
//! - **O(log n) lookups** - Binary search that steps over empty slots
//! - **Amortized O(log² n) mutations** - Local shifts plus occasional window rebalances
//! - **Cache-efficient** - One contiguous allocation; every operation walks a short,
//!   physically adjacent run of slots
//!
//! # Implementation
//!
//! The backing array is viewed as the leaf level of an implicit binary tree:
//! aligned windows of `LEAF_SIZE * 2^k` slots form the tree's nodes, with the
//! whole array as the root. Each depth is assigned a density band, loose at the
//! leaves and tight at the root. When an insertion overfills a leaf window (or
//! a deletion underfills one), the structure walks up the implicit tree until
//! it finds an ancestor window whose combined density is back inside its band,
//! then spreads that window's items out evenly. If even the root is out of
//! band, the array doubles or halves and everything is redistributed once.
//!
//! The comparator is a compile-time parameter (see [`Comparator`]), so ordering
//! is resolved statically with no dynamic dispatch on the search or rebalance
//! paths.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Density math casts slot counts to f64; window widths stay far below 2^52.
#![allow(clippy::cast_precision_loss)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparator;
mod error;
mod raw;

pub mod pma_set;

pub use comparator::{Comparator, NaturalOrder};
pub use error::PmaError;
pub use pma_set::PmaSet;
