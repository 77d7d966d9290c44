//! Tally core: pure word counting and window splitting.
//!
//! Nothing in this crate touches the filesystem or a store; the engine crate
//! drives these functions from its I/O loop.
mod count;
mod split;

pub use count::{word_counts, WordCountMap, MAX_WORD_LEN, MIN_WORD_LEN};
pub use split::{split_at_last_space, SplitOutcome};
