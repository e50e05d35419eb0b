//! # sorted-scan
//!
//! Insertion-point search over sorted `f64` slices, built from two
//! cooperating pieces:
//!
//! - An **unrolled linear scan** ([`linear`]) that processes elements in
//!   groups of four and terminates at the first element `>= needle`. On
//!   short slices this beats binary search: every probe is a predictable
//!   forward access, so the whole search walks one or two cache lines in
//!   order instead of jumping around the slice.
//! - A **threshold policy** ([`Searcher`]) that routes each call to the
//!   linear scan or to the standard library's binary search
//!   (`partition_point`) based on slice length and an optional workload
//!   hint.
//!
//! ## Quick start
//!
//! ```rust
//! use sorted_scan::{Hint, Searcher};
//!
//! let values = vec![0.5, 1.5, 3.0, 3.0, 9.25];
//!
//! // One-off search with the default policy.
//! assert_eq!(sorted_scan::find(&values, 3.0), 2);
//!
//! // Tuned policy for a workload that probes near the front.
//! let searcher = Searcher::new().crossover(48).hint(Hint::Front);
//! assert_eq!(searcher.find(&values, 4.0), 4);
//! ```
//!
//! Every search returns the position where the needle belongs: the lowest
//! index whose element is `>= needle`, or `len` when the needle is greater
//! than everything. Runs of equal values resolve to the leftmost match.
//! [`locate`] additionally reports whether the needle was present, in the
//! style of `slice::binary_search`.
//!
//! ## Picking a crossover
//!
//! The linear scan stayed ahead of binary search up to roughly 30-40
//! elements on the hardware this crate was tuned on, so [`Searcher`]
//! defaults to [`policy::DEFAULT_CROSSOVER`]. The exact crossover moves
//! with branch prediction, cache line size, and where needles tend to
//! land, so re-measure it per deployment target (`benches/crossover.rs`)
//! and set it with [`Searcher::crossover`].
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impl for [`Error`]
//! - `serde`: serialization for [`Searcher`], [`Hint`], and
//!   [`SortedFloats`], so a calibrated policy can ship with deployment
//!   config

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod binary;
pub mod error;
pub mod linear;
pub mod policy;
pub mod sorted;

pub use error::Error;
pub use policy::{Hint, Searcher, find, locate};
pub use sorted::SortedFloats;
