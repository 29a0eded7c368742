//! Compact storage of the LCP and child-link tables.
//!
//! LCP values live in one unsigned byte per position; values of 255 or
//! more are stored as the marker byte with the real value in an overflow
//! map. The up, down and nextl links are stored as signed-byte deltas from
//! their own position: -128 marks an undefined entry, +127 redirects to a
//! per-array overflow map holding the absolute target.

use ahash::AHashMap;

/// LCP values at or above this go to the overflow map.
const LCP_OVERFLOW_MARK: u8 = 255;
/// Delta marking an undefined link entry.
const LINK_UNDEFINED: i8 = -128;
/// Delta redirecting a link entry to the overflow map.
const LINK_OVERFLOW_MARK: i8 = 127;

/// One delta-encoded link array (up, down, or nextl) with its overflow map.
#[derive(Debug)]
struct LinkArray {
    deltas: Vec<i8>,
    overflow: AHashMap<usize, usize>,
}

impl LinkArray {
    fn new(len: usize) -> Self {
        Self {
            deltas: vec![LINK_UNDEFINED; len],
            overflow: AHashMap::new(),
        }
    }

    fn set(&mut self, pos: usize, target: usize) {
        let delta = target as isize - pos as isize;
        if delta > LINK_UNDEFINED as isize && delta < LINK_OVERFLOW_MARK as isize {
            self.deltas[pos] = delta as i8;
        } else {
            self.deltas[pos] = LINK_OVERFLOW_MARK;
            self.overflow.insert(pos, target);
        }
    }

    fn get(&self, pos: usize) -> Option<usize> {
        match *self.deltas.get(pos)? {
            LINK_UNDEFINED => None,
            LINK_OVERFLOW_MARK => self.overflow.get(&pos).copied(),
            delta => Some((pos as isize + delta as isize) as usize),
        }
    }
}

/// Compact store for the LCP array and the up/down/nextl child links.
///
/// All setters and getters are amortized O(1). Getters return `None` for
/// out-of-range positions and for entries that were never set.
#[derive(Debug)]
pub struct ChildTable {
    lcp: Vec<u8>,
    lcp_overflow: AHashMap<usize, usize>,
    up: LinkArray,
    down: LinkArray,
    nextl: LinkArray,
}

impl ChildTable {
    /// Allocate tables for a sequence of `len` positions. Every link
    /// starts out undefined and every LCP value starts at zero.
    pub fn new(len: usize) -> Self {
        Self {
            lcp: vec![0; len],
            lcp_overflow: AHashMap::new(),
            up: LinkArray::new(len),
            down: LinkArray::new(len),
            nextl: LinkArray::new(len),
        }
    }

    /// Number of positions covered by the tables.
    pub fn len(&self) -> usize {
        self.lcp.len()
    }

    /// True when the tables cover no positions.
    pub fn is_empty(&self) -> bool {
        self.lcp.is_empty()
    }

    /// Store an LCP value.
    pub fn set_lcp(&mut self, pos: usize, value: usize) {
        if value < LCP_OVERFLOW_MARK as usize {
            self.lcp[pos] = value as u8;
        } else {
            self.lcp[pos] = LCP_OVERFLOW_MARK;
            self.lcp_overflow.insert(pos, value);
        }
    }

    /// LCP value at `pos`, or `None` when `pos` is out of range.
    pub fn get_lcp(&self, pos: usize) -> Option<usize> {
        let byte = *self.lcp.get(pos)?;
        if byte < LCP_OVERFLOW_MARK {
            Some(byte as usize)
        } else {
            self.lcp_overflow.get(&pos).copied()
        }
    }

    /// Store an up link.
    pub fn set_up(&mut self, pos: usize, target: usize) {
        self.up.set(pos, target);
    }

    /// Absolute up target at `pos`, or `None` when undefined.
    pub fn get_up(&self, pos: usize) -> Option<usize> {
        self.up.get(pos)
    }

    /// Store a down link.
    pub fn set_down(&mut self, pos: usize, target: usize) {
        self.down.set(pos, target);
    }

    /// Absolute down target at `pos`, or `None` when undefined.
    pub fn get_down(&self, pos: usize) -> Option<usize> {
        self.down.get(pos)
    }

    /// Store a nextl link.
    pub fn set_nextl(&mut self, pos: usize, target: usize) {
        self.nextl.set(pos, target);
    }

    /// Absolute nextl target at `pos`, or `None` when undefined.
    pub fn get_nextl(&self, pos: usize) -> Option<usize> {
        self.nextl.get(pos)
    }

    /// In-range LCP read used by the fill pass and interval navigation.
    pub(crate) fn lcp_at(&self, pos: usize) -> usize {
        self.get_lcp(pos).unwrap_or(0)
    }

    /// Overflow map sizes for (lcp, up, down, nextl), for diagnostics.
    pub(crate) fn overflow_sizes(&self) -> [usize; 4] {
        [
            self.lcp_overflow.len(),
            self.up.overflow.len(),
            self.down.overflow.len(),
            self.nextl.overflow.len(),
        ]
    }

    /// Compute the up, down and nextl links from the filled LCP array.
    ///
    /// One pass over two stacks of positions whose LCP values are
    /// monotonically non-decreasing from bottom to top. Both stacks are
    /// seeded with position 0, whose LCP of zero keeps them non-empty
    /// throughout the pass.
    pub(crate) fn fill_links(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let mut last: Option<usize> = None;
        let mut updown = vec![0usize];
        let mut nextl = vec![0usize];
        for i in 1..len {
            while let Some(&top) = updown.last() {
                if self.lcp_at(i) >= self.lcp_at(top) {
                    break;
                }
                updown.pop();
                last = Some(top);
                if let Some(&below) = updown.last() {
                    if self.lcp_at(i) <= self.lcp_at(below)
                        && self.lcp_at(below) != self.lcp_at(top)
                    {
                        self.set_down(below, top);
                    }
                }
            }
            if let Some(popped) = last.take() {
                self.set_up(i, popped);
            }
            updown.push(i);

            while let Some(&top) = nextl.last() {
                if self.lcp_at(i) >= self.lcp_at(top) {
                    break;
                }
                nextl.pop();
            }
            if let Some(&top) = nextl.last() {
                if self.lcp_at(i) == self.lcp_at(top) {
                    self.set_nextl(top, i);
                    nextl.pop();
                }
            }
            nextl.push(i);
        }
    }
}
