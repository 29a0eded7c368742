//! LCP-interval navigation.
//!
//! An LCP-interval is a closed range of suffix-array positions whose
//! suffixes share a common prefix longer than that of any enclosing
//! interval. Intervals are plain index pairs derived on demand from the
//! tables; the interval tree itself is never materialized.

use super::SuffixArray;
use crate::sequence::Element;

/// A closed range `[lo, hi]` of suffix-array positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// First covered position.
    pub lo: usize,
    /// Last covered position, inclusive.
    pub hi: usize,
}

impl Interval {
    pub(crate) fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    /// Number of suffix-array positions covered.
    pub fn size(&self) -> usize {
        self.hi - self.lo + 1
    }
}

impl<'s, E: Element> SuffixArray<'s, E> {
    /// The interval covering the whole suffix array. Callers guard
    /// against an empty index.
    pub(crate) fn root_interval(&self) -> Interval {
        Interval::new(0, self.sa.len() - 1)
    }

    /// Length of the prefix shared by every suffix in `interval`.
    ///
    /// A singleton's shared prefix is its whole suffix minus the trailing
    /// sentinel. Larger intervals read it from the child table: the up
    /// link just past the interval when it points inside, the down link
    /// at the start otherwise.
    pub(crate) fn lcp_of(&self, interval: Interval) -> usize {
        let n = self.sa.len();
        if interval.size() == 1 {
            return n - self.sa[interval.lo] - 1;
        }
        if interval.hi + 1 >= n {
            return 0;
        }
        match self.tabs.get_up(interval.hi + 1) {
            Some(up) if interval.lo < up && up <= interval.hi => self.tabs.lcp_at(up),
            _ => match self.tabs.get_down(interval.lo) {
                Some(down) => self.tabs.lcp_at(down),
                None => 0,
            },
        }
    }

    /// The LCP-intervals immediately nested in `parent`, in order.
    ///
    /// The children partition the parent contiguously. Singletons and
    /// out-of-range intervals have no children.
    pub(crate) fn child_intervals(&self, parent: Interval) -> Vec<Interval> {
        let n = self.sa.len();
        let mut children = Vec::new();
        if parent.lo == parent.hi || parent.lo >= n || parent.hi >= n {
            return children;
        }

        let first_split = if parent.hi + 1 < n {
            match self.tabs.get_up(parent.hi + 1) {
                Some(up) if parent.lo < up => Some(up),
                _ => self
                    .tabs
                    .get_nextl(parent.lo)
                    .or_else(|| self.tabs.get_down(parent.lo)),
            }
        } else {
            self.tabs.get_nextl(parent.lo)
        };
        let Some(mut split) = first_split else {
            return children;
        };

        children.push(Interval::new(parent.lo, split - 1));
        while split < parent.hi {
            match self.tabs.get_nextl(split) {
                Some(next) => {
                    children.push(Interval::new(split, next - 1));
                    split = next;
                }
                None => break,
            }
        }
        children.push(Interval::new(split, parent.hi));
        children
    }
}
