//! Suffix sorting.
//!
//! Two-phase sort: a bucket phase orders every suffix by its first two
//! elements, then each maximal run agreeing on that prefix is refined
//! independently. Small buckets are refined by direct comparison from
//! offset two; larger buckets go through a transient sort-trie whose
//! depth-first traversal yields the bucket in lexicographic order.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::sort_trie::SortTrie;
use crate::sequence::Element;

/// Elements a suffix is bucketed by before the deep phase.
const BUCKET_DEPTH: usize = 2;

/// Tuning knobs for suffix sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Buckets smaller than this are refined by direct comparison
    /// instead of a sort-trie.
    pub small_bucket_limit: usize,
    /// Sequences at least this long use a parallel bucket-phase sort.
    pub parallel_threshold: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            small_bucket_limit: 5,
            parallel_threshold: 100_000,
        }
    }
}

/// Sort all suffix start positions of `text` into lexicographic order.
pub(crate) fn sort_suffixes<E: Element>(text: &[E], config: &BuildConfig) -> Vec<usize> {
    let n = text.len();
    let mut sa: Vec<usize> = (0..n).collect();

    debug!("bucket phase over {} suffixes", n);
    if n >= config.parallel_threshold {
        sa.par_sort_unstable_by(|&a, &b| bucket_prefix(text, a).cmp(bucket_prefix(text, b)));
    } else {
        sa.sort_unstable_by(|&a, &b| bucket_prefix(text, a).cmp(bucket_prefix(text, b)));
    }

    // Refine each maximal run whose first two elements agree.
    let mut start = 0;
    for end in 1..=n {
        if end == n || bucket_prefix(text, sa[end]) != bucket_prefix(text, sa[start]) {
            if end - start > 1 {
                refine_bucket(text, &mut sa[start..end], config);
            }
            start = end;
        }
    }
    debug!("deep phase done");
    sa
}

/// The at-most-two-element prefix a suffix is bucketed by. A suffix
/// shorter than two elements simply yields what it has; slice comparison
/// then treats the end of the sequence as less than any element.
#[inline]
fn bucket_prefix<E>(text: &[E], suffix: usize) -> &[E] {
    &text[suffix..text.len().min(suffix + BUCKET_DEPTH)]
}

/// The rest of a suffix from the bucket depth onward. Empty when the
/// suffix is exhausted, which again compares less than any extension.
#[inline]
fn suffix_tail<E>(text: &[E], suffix: usize) -> &[E] {
    &text[text.len().min(suffix + BUCKET_DEPTH)..]
}

/// Order one bucket of suffixes that agree on their first two elements.
fn refine_bucket<E: Element>(text: &[E], bucket: &mut [usize], config: &BuildConfig) {
    if bucket.len() < config.small_bucket_limit {
        bucket.sort_unstable_by(|&a, &b| suffix_tail(text, a).cmp(suffix_tail(text, b)));
        return;
    }
    let mut trie = SortTrie::new(bucket[0]);
    for &suffix in &bucket[1..] {
        trie.insert(text, suffix, BUCKET_DEPTH);
    }
    let mut sorted = Vec::with_capacity(bucket.len());
    trie.collect_sorted(&mut sorted);
    bucket.copy_from_slice(&sorted);
}
