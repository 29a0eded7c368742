//! LCP table construction.
//!
//! Kasai's algorithm: walk the sequence in position order, keeping the
//! candidate prefix length from the previous position, so each element is
//! compared an amortized constant number of times.

use log::debug;

use super::child_table::ChildTable;
use crate::sequence::Element;

/// Fill the LCP values for `sa` over `text` into `tabs`.
///
/// Position 0 keeps its default LCP of zero; every later position gets the
/// length of the longest common prefix of the suffixes at `sa[i - 1]` and
/// `sa[i]`.
pub(crate) fn fill_lcp<E: Element>(text: &[E], sa: &[usize], tabs: &mut ChildTable) {
    let n = text.len();
    let mut rank = vec![0usize; n];
    for (i, &suffix) in sa.iter().enumerate() {
        rank[suffix] = i;
    }

    let mut h = 0usize;
    for i in 0..n {
        if rank[i] > 0 {
            let k = sa[rank[i] - 1];
            while i + h < n && k + h < n && text[i + h] == text[k + h] {
                h += 1;
            }
            tabs.set_lcp(rank[i], h);
            h = h.saturating_sub(1);
        }
    }
    debug!("lcp table filled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::{sort_suffixes, BuildConfig};

    fn naive_lcp(text: &[u8], sa: &[usize]) -> Vec<usize> {
        let mut lcp = vec![0; sa.len()];
        for i in 1..sa.len() {
            lcp[i] = text[sa[i - 1]..]
                .iter()
                .zip(&text[sa[i]..])
                .take_while(|(a, b)| a == b)
                .count();
        }
        lcp
    }

    fn filled(text: &[u8]) -> (Vec<usize>, ChildTable) {
        let sa = sort_suffixes(text, &BuildConfig::default());
        let mut tabs = ChildTable::new(text.len());
        fill_lcp(text, &sa, &mut tabs);
        (sa, tabs)
    }

    #[test]
    fn test_banana() {
        let (_, tabs) = filled(b"banana~");
        let values: Vec<usize> = (0..7).map(|i| tabs.lcp_at(i)).collect();
        assert_eq!(values, vec![0, 3, 1, 0, 0, 2, 0]);
    }

    #[test]
    fn test_matches_direct_comparison() {
        for text in [
            b"mississippi~".as_slice(),
            b"abracadabra~".as_slice(),
            b"aaaaaaaaaa~".as_slice(),
            b"abcabcabcabc~".as_slice(),
            b"xyzzyxzyzxyzzy~".as_slice(),
            b"~".as_slice(),
        ] {
            let (sa, tabs) = filled(text);
            let expected = naive_lcp(text, &sa);
            for (i, want) in expected.into_iter().enumerate() {
                assert_eq!(tabs.lcp_at(i), want, "lcp at {} for {:?}", i, text);
            }
        }
    }

    #[test]
    fn test_first_position_is_zero() {
        let (_, tabs) = filled(b"abracadabra~");
        assert_eq!(tabs.lcp_at(0), 0);
    }
}
