//! # esagram - enhanced suffix array indexing
//!
//! Builds an enhanced suffix array (suffix array, LCP table, child table)
//! over any totally ordered element sequence and answers n-gram and
//! skip-gram membership, enumeration, and counting queries in time
//! proportional to the pattern, not the corpus.
//!
//! ## Architecture
//!
//! - [`sequence`] - element adapters (words, integers) and the element bound
//! - [`index`] - construction, compact tables, persistence
//! - [`query`] - exact, wildcard, and skip-gram lookups
//!
//! ## Quick start
//!
//! ```
//! use esagram::SuffixArray;
//! use esagram::sequence::word;
//!
//! let corpus = word::read_words_with_sentinel("a b a b a".as_bytes()).unwrap();
//! let index = SuffixArray::build(&corpus).unwrap();
//! assert_eq!(index.find_count(&word::tokenize("a b")), 2);
//! ```
//!
//! The index borrows the sequence it was built on; the same sequence must
//! be supplied again when restoring a saved index from disk.

pub mod error;
pub mod index;
pub mod query;
pub mod sequence;

pub use error::{Error, Result};
pub use index::{BuildConfig, IndexStats, Position, SuffixArray};
