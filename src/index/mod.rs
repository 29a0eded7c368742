//! Enhanced suffix array construction and storage.
//!
//! The index over a sequence of `n` elements consists of:
//!
//! - the suffix-array permutation: suffix start positions in
//!   lexicographic order of the suffixes
//! - the LCP table: common prefix lengths of lexicographically adjacent
//!   suffixes
//! - the child table: up/down/nextl links that make child-interval
//!   enumeration constant time
//!
//! Module layout:
//!
//! - [`builder`] - two-phase suffix sorting (buckets, then per-bucket
//!   refinement through a transient sort-trie)
//! - [`child_table`] - compact delta-encoded table storage
//! - `lcp` - Kasai LCP fill
//! - `interval` - LCP-interval navigation
//! - `writer` / `reader` - tab-delimited persistence of the tables
//!
//! ## Persisted format
//!
//! One line per suffix-array position:
//!
//! ```text
//! <i>\t<sa>\t<lcp|->\t<up|->\t<down|->\t<nextl|->\t
//! ```
//!
//! with `-` marking an undefined entry. The sequence itself is not
//! persisted; the caller supplies it again on load.

mod builder;
pub mod child_table;
pub(crate) mod interval;
mod lcp;
mod reader;
mod sort_trie;
mod writer;

use std::io;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sequence::Element;
pub use builder::BuildConfig;
pub use child_table::ChildTable;

/// Position in the indexed sequence.
pub type Position = usize;

/// Table sizes, chiefly for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of indexed elements, sentinel included.
    pub sequence_len: usize,
    /// LCP values too large for inline storage.
    pub lcp_overflow: usize,
    /// Up links too far for inline storage.
    pub up_overflow: usize,
    /// Down links too far for inline storage.
    pub down_overflow: usize,
    /// Nextl links too far for inline storage.
    pub nextl_overflow: usize,
}

/// An enhanced suffix array over a borrowed element sequence.
///
/// The index never owns the sequence; the borrow must outlive the index.
/// All tables are filled during construction and immutable afterward, so
/// shared references to a built index can be used from multiple threads.
#[derive(Debug)]
pub struct SuffixArray<'s, E> {
    pub(crate) text: &'s [E],
    pub(crate) sa: Vec<Position>,
    pub(crate) tabs: ChildTable,
}

impl<'s, E: Element> SuffixArray<'s, E> {
    /// Build the index with default configuration.
    ///
    /// The final element of `text` must be strictly greater than every
    /// other element, which also makes it unique; construction fails with
    /// [`Error::SentinelViolation`] otherwise. An empty sequence has no
    /// sentinel and is rejected the same way.
    pub fn build(text: &'s [E]) -> Result<Self> {
        Self::build_with(text, BuildConfig::default())
    }

    /// Build with explicit tuning knobs.
    pub fn build_with(text: &'s [E], config: BuildConfig) -> Result<Self> {
        validate_sentinel(text)?;
        info!("building index over {} elements", text.len());
        let sa = builder::sort_suffixes(text, &config);
        let mut tabs = ChildTable::new(text.len());
        lcp::fill_lcp(text, &sa, &mut tabs);
        tabs.fill_links();
        info!("index ready");
        Ok(Self { text, sa, tabs })
    }

    /// Restore an index previously written with [`SuffixArray::save`].
    ///
    /// `text` must be the same sequence the index was built on; this is
    /// trusted, not verified.
    pub fn load(path: &Path, text: &'s [E]) -> Result<Self> {
        reader::load_tables(path, text)
    }

    /// Write the index tables to `path` in the tab-delimited format.
    pub fn save(&self, path: &Path) -> Result<()> {
        writer::save_tables(self, path)
    }

    /// Number of indexed elements, sentinel included.
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// The suffix-array permutation, mainly for diagnostics and tests.
    pub fn suffix_array(&self) -> &[Position] {
        &self.sa
    }

    /// Table statistics.
    pub fn stats(&self) -> IndexStats {
        let [lcp_overflow, up_overflow, down_overflow, nextl_overflow] =
            self.tabs.overflow_sizes();
        IndexStats {
            sequence_len: self.sa.len(),
            lcp_overflow,
            up_overflow,
            down_overflow,
            nextl_overflow,
        }
    }

    /// Write an indented dump of the LCP-interval tree, one interval per
    /// line as `<lcp>-[<lo>,<hi>]`. Debugging aid; the walk uses an
    /// explicit stack.
    pub fn dump_interval_tree<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        if self.sa.is_empty() {
            return Ok(());
        }
        let mut stack = vec![(0usize, self.root_interval())];
        while let Some((depth, interval)) = stack.pop() {
            for _ in 0..depth {
                write!(out, "  ")?;
            }
            writeln!(out, "{}-[{},{}]", self.lcp_of(interval), interval.lo, interval.hi)?;
            for child in self.child_intervals(interval).into_iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        Ok(())
    }
}

fn validate_sentinel<E: Element>(text: &[E]) -> Result<()> {
    let Some(sentinel) = text.last() else {
        return Err(Error::SentinelViolation);
    };
    if text[..text.len() - 1].iter().all(|e| e < sentinel) {
        Ok(())
    } else {
        Err(Error::SentinelViolation)
    }
}
