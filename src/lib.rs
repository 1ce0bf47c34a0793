//! # Order Statistics over a Compressed Universe
//!
//! *Logarithmic rank queries on a growing multiset of known keys.*
//!
//! ## Intuition First
//!
//! Imagine a tally board with one column for every value you will ever see,
//! sorted left to right. Each time a value arrives you add a tick to its
//! column. "How many values so far are smaller than `x`?" is then the number
//! of ticks left of `x`'s column.
//!
//! Counting those ticks one column at a time is slow. A Fenwick tree keeps
//! pre-summed blocks of columns whose sizes are powers of two, so any prefix
//! is covered by at most $\log U$ blocks, and a new tick touches at most
//! $\log U$ of them.
//!
//! ## The Problem
//!
//! Keys are arbitrary (negative, huge, or not even integers), but the tally
//! board needs dense column indices. Coordinate compression fixes this: when
//! the full set of keys is known up front, sort and deduplicate it, and use
//! each key's position as its column.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Ryabko     Fast prefix-sum maintenance on binary counters
//! 1994  Fenwick    "A New Data Structure for Cumulative Frequency Tables"
//! 2001  Cormen+    Order-statistic trees (CLRS ch. 14), the pointer-based rival
//! ```
//!
//! ## Mathematical Formulation
//!
//! For a universe $K = k_0 < k_1 < \dots < k_{U-1}$ and multiset $M \subseteq K$:
//! - `count_smaller(x)` $= |\{m \in M : m < x\}|$
//! - `count_smaller_or_equal(x)` $= |\{m \in M : m \le x\}|$
//!
//! Slot $i$ (1-based) of the count array stores the multiplicity of ranks in
//! $(i - \mathrm{lowbit}(i), i]$, where $\mathrm{lowbit}(i) = i \,\&\, {-i}$.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(\log U)$ per insert or query; $O(n \log n)$ for each
//!   algorithm in [`range_query`].
//! - **Space**: $U + 1$ counters plus the universe.
//!
//! ## What Could Go Wrong
//!
//! 1. **Foreign keys**: inserting a value outside the universe has no column.
//!    [`OrderStatisticsIndex::update`] debug-asserts membership and
//!    [`OrderStatisticsIndex::try_update`] reports it as an error.
//! 2. **Overflowing sums**: range-sum prefixes of `i32` input are widened to
//!    `i64` before compression.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`Universe`**: sorted, deduplicated keys with boundary searches.
//! - **`OrderStatisticsIndex`**: the insert-only Fenwick multiset.
//! - **`count_smaller_to_right`** and **`count_range_sum`**: its two clients.
//!
//! Alongside the index sit independent exercise modules ([`array`],
//! [`bitwise`], [`dp`], [`graph`], [`math`], [`string`]) that do not use it.
//!
//! With the `tracing` feature enabled, algorithm passes emit `debug` spans.
//!
//! ## References
//!
//! - Fenwick, P. M. (1994). "A New Data Structure for Cumulative Frequency Tables."
//! - Ryabko, B. (1989). "A fast on-line code."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod bitwise;
pub mod dp;
pub mod error;
pub mod fenwick;
pub mod graph;
pub mod math;
pub mod range_query;
pub mod string;
pub mod universe;

pub use error::Error;
pub use fenwick::OrderStatisticsIndex;
pub use range_query::{count_range_sum, count_smaller_to_right};
pub use universe::Universe;
