//! Skip-gram queries.
//!
//! A skip-gram is an ordered list of sub-patterns with a bounded gap
//! between the start positions of consecutive parts: the gap `g` must
//! satisfy `min_skip < g <= max_skip`. Candidate positions for every part
//! are found independently, sorted, and merged with one cursor per part;
//! a hit reports the start position of the first part.

use crate::index::{Position, SuffixArray};
use crate::sequence::Element;

impl<'s, E: Element> SuffixArray<'s, E> {
    /// Start positions of every skip-gram occurrence, with the default
    /// wildcard. Wildcards are allowed inside each part.
    pub fn find_all_positions_skip(
        &self,
        parts: &[Vec<E>],
        min_skip: usize,
        max_skip: usize,
    ) -> Vec<Position> {
        self.find_all_positions_skip_with(parts, min_skip, max_skip, &E::default())
    }

    /// Start positions of every skip-gram occurrence.
    ///
    /// With no parts the result is empty; with a single part this is just
    /// the sorted positions of that part.
    pub fn find_all_positions_skip_with(
        &self,
        parts: &[Vec<E>],
        min_skip: usize,
        max_skip: usize,
        wildcard: &E,
    ) -> Vec<Position> {
        let mut lists: Vec<Vec<Position>> = parts
            .iter()
            .map(|part| {
                let mut positions = self.find_all_positions_with(part, wildcard);
                positions.sort_unstable();
                positions
            })
            .collect();
        match lists.len() {
            0 => return Vec::new(),
            1 => return lists.swap_remove(0),
            _ => {}
        }
        if lists.iter().any(Vec::is_empty) {
            return Vec::new();
        }
        walk(&lists, min_skip, max_skip)
    }

    /// Number of skip-gram occurrences, with the default wildcard.
    pub fn find_all_positions_skip_count(
        &self,
        parts: &[Vec<E>],
        min_skip: usize,
        max_skip: usize,
    ) -> usize {
        self.find_all_positions_skip_count_with(parts, min_skip, max_skip, &E::default())
    }

    /// Number of skip-gram occurrences.
    pub fn find_all_positions_skip_count_with(
        &self,
        parts: &[Vec<E>],
        min_skip: usize,
        max_skip: usize,
        wildcard: &E,
    ) -> usize {
        self.find_all_positions_skip_with(parts, min_skip, max_skip, wildcard)
            .len()
    }
}

/// Merge the per-part position lists with one cursor each.
///
/// The pair under test is `(pair, pair + 1)`; a satisfied gap moves the
/// test to the next pair, and once the last pair passes, the first part's
/// position is emitted. A too-small gap advances the later cursor, a
/// too-large gap advances the earlier one and backs up a pair. Any cursor
/// reaching the end of its list ends the walk.
fn walk(lists: &[Vec<Position>], min_skip: usize, max_skip: usize) -> Vec<Position> {
    let mut found = Vec::new();
    let mut cursors = vec![0usize; lists.len()];
    let mut pair = 0;
    while cursors[0] < lists[0].len() {
        // The later part must start after the earlier one.
        while lists[pair + 1][cursors[pair + 1]] <= lists[pair][cursors[pair]] {
            cursors[pair + 1] += 1;
            if cursors[pair + 1] == lists[pair + 1].len() {
                return found;
            }
        }
        let earlier = lists[pair][cursors[pair]];
        let later = lists[pair + 1][cursors[pair + 1]];
        let gap = later - earlier;
        if gap > min_skip && gap <= max_skip {
            pair += 1;
            if pair + 1 == lists.len() {
                found.push(lists[0][cursors[0]]);
                cursors[0] += 1;
                pair = 0;
            }
        } else if gap <= min_skip {
            cursors[pair + 1] += 1;
            if cursors[pair + 1] == lists[pair + 1].len() {
                return found;
            }
        } else {
            cursors[pair] += 1;
            if cursors[pair] == lists[pair].len() {
                return found;
            }
            if pair > 0 {
                pair -= 1;
            }
        }
    }
    found
}
