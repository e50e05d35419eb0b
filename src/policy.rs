//! Length-based routing between the linear scan and binary search.
//!
//! The linear scan's cost depends on where the needle lands: near the front
//! it is almost free, past the end it pays the full O(n). Binary search
//! costs O(log n) wherever the needle lands. Below a crossover length the
//! scan wins on average; above it binary search does. The crossover moves
//! with the execution environment (branch predictor, cache line size,
//! needle distribution), so it is a parameter here, not a constant.

use crate::{binary, linear};

/// Crossover measured on the reference hardware: the linear scan stayed
/// ahead up to roughly 30-40 elements. Re-measure per deployment target
/// with `benches/crossover.rs`.
pub const DEFAULT_CROSSOVER: usize = 32;

/// Where a workload expects its needles to land.
///
/// Shifts the crossover without re-benchmarking: front-loaded workloads let
/// the scan terminate early, so it stays competitive on longer slices;
/// tail-heavy or above-range probes pay the scan's full cost, so binary
/// search takes over sooner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hint {
    /// Needles cluster near the start of the slice.
    Front,
    /// No position bias.
    #[default]
    Uniform,
    /// Needles cluster near the end, or frequently exceed the range.
    Back,
}

/// Per-call strategy choice between the linear scan and binary search.
///
/// A `Searcher` is a plain configuration value: copy it around, store it in
/// config, share it across threads. It holds no state between calls.
///
/// # Example
///
/// ```
/// use sorted_scan::{Hint, Searcher};
///
/// let values: Vec<f64> = (0..100).map(f64::from).collect();
///
/// let searcher = Searcher::new().crossover(40).hint(Hint::Back);
/// assert_eq!(searcher.find(&values, 63.5), 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Searcher {
    crossover: usize,
    hint: Hint,
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            crossover: DEFAULT_CROSSOVER,
            hint: Hint::Uniform,
        }
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slice length at which binary search takes over.
    pub fn crossover(mut self, crossover: usize) -> Self {
        self.crossover = crossover;
        self
    }

    /// Bias the crossover for a known needle distribution.
    pub fn hint(mut self, hint: Hint) -> Self {
        self.hint = hint;
        self
    }

    /// The crossover length after applying the workload hint.
    #[inline]
    pub fn effective_crossover(&self) -> usize {
        match self.hint {
            Hint::Front => self.crossover.saturating_mul(2),
            Hint::Uniform => self.crossover,
            Hint::Back => self.crossover / 2,
        }
    }

    /// Find the first position where `haystack[pos] >= needle`.
    ///
    /// Same contract as [`linear::lower_bound`] and [`binary::lower_bound`];
    /// only the strategy differs.
    #[inline]
    pub fn find(&self, haystack: &[f64], needle: f64) -> usize {
        if haystack.len() <= self.effective_crossover() {
            linear::lower_bound(haystack, needle)
        } else {
            binary::lower_bound(haystack, needle)
        }
    }

    /// Find the needle, reporting whether it was present.
    ///
    /// Same contract as [`linear::locate`].
    #[inline]
    pub fn locate(&self, haystack: &[f64], needle: f64) -> Result<usize, usize> {
        if haystack.len() <= self.effective_crossover() {
            linear::locate(haystack, needle)
        } else {
            binary::locate(haystack, needle)
        }
    }
}

/// Search with the default policy.
#[inline]
pub fn find(haystack: &[f64], needle: f64) -> usize {
    Searcher::new().find(haystack, needle)
}

/// Locate with the default policy.
#[inline]
pub fn locate(haystack: &[f64], needle: f64) -> Result<usize, usize> {
    Searcher::new().locate(haystack, needle)
}
