//! Control-count histogram of a minimized gate list.

use std::collections::BTreeMap;

/// Histogram of MPMCT gates by control count.
///
/// A pure projection of a minimized gate list: for each distinct number of
/// active controls, how many gates carry that many, plus the shared control
/// string width (`num_total_controls`). Built once by the parser and never
/// mutated afterwards; consumers treat it as read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlTally {
    counts: BTreeMap<u32, u64>,
    width: Option<u32>,
}

impl ControlTally {
    /// Build a tally directly from `(control-count, occurrences)` pairs.
    ///
    /// `width` is the shared control-string length. Useful for tests and
    /// synthetic inputs; parsed gate lists go through
    /// [`crate::parse_exorcised`] instead.
    pub fn from_counts(width: u32, pairs: impl IntoIterator<Item = (u32, u64)>) -> Self {
        let counts: BTreeMap<u32, u64> = pairs.into_iter().collect();
        let width = if counts.is_empty() { None } else { Some(width) };
        Self { counts, width }
    }

    pub(crate) fn record(&mut self, controls: u32, width: u32) {
        *self.counts.entry(controls).or_insert(0) += 1;
        self.width.get_or_insert(width);
    }

    /// Length of the control strings, i.e. the number of address bits the
    /// minimized circuit still spans. `None` when the gate list was empty.
    pub fn num_total_controls(&self) -> Option<u32> {
        self.width
    }

    /// Largest control count present. `None` when the gate list was empty.
    pub fn largest(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    /// True when no gates were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of gates across all classes.
    pub fn total_gates(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(control-count, occurrences)` in increasing control
    /// count order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }

    /// Occurrence count for one control-count class, 0 when absent.
    pub fn occurrences(&self, controls: u32) -> u64 {
        self.counts.get(&controls).copied().unwrap_or(0)
    }
}
