//! Element-sequence adapters.
//!
//! The index works over any borrowed slice of elements that are totally
//! ordered, cloneable, and have a default value. The default value doubles
//! as the default wildcard during queries.
//!
//! Two concrete adapters parse a corpus from a byte stream:
//!
//! - [`word`] - maximal runs of printable ASCII become `String` tokens
//! - [`int`] - whitespace-separated decimal integers become `i64` tokens
//!
//! Each adapter has a plain parser and a `*_with_sentinel` variant that
//! appends the adapter's maximal sentinel. The index requires the final
//! element of its input to be a unique, strictly maximal sentinel, so the
//! sentinel variants are what corpus ingestion should use.

pub mod int;
pub mod word;

/// Capability bound for indexable elements: total order, cloning, a
/// default value that doubles as the default wildcard, and `Sync` so the
/// bucket phase of construction may sort in parallel.
pub trait Element: Ord + Clone + Default + Sync {}

impl<T: Ord + Clone + Default + Sync> Element for T {}
