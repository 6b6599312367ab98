//! Single-slot, process-wide last-error indicator (§5/§7 of the core spec).
//!
//! Every public operation that can fail returns a sentinel value (`None`,
//! or an unchanged node array) and records the failure here; callers that
//! care about *why* an operation produced a sentinel probe
//! [`check_trie_error_and_reset`]. This mirrors the C original's global
//! `ERROR` variable, translated into a `thread_local` since the core is
//! documented as single-threaded per call site (§5) and a real global
//! `static mut` has no safe equivalent in Rust.

use std::cell::RefCell;
use thiserror::Error;

/// Failure kinds surfaced by the trie's public operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// `τ` requested for a search exceeds the trie's `τ_max`, or a
    /// construction parameter is out of its allowed range.
    #[error("tau exceeds the trie's maximum supported distance")]
    TauTooLarge,
    /// Query string is longer than `MAXBRCDLEN`.
    #[error("query string exceeds the maximum supported length")]
    QueryTooLong,
    /// Inserted string is longer than `MAXBRCDLEN`.
    #[error("string exceeds the maximum supported length")]
    TooLong,
    /// A character in an inserted string has no translation in the
    /// insertion alphabet.
    #[error("string contains a character outside the alphabet")]
    BadSymbol,
    /// An allocation failed while growing a node array or the node arena.
    #[error("allocation failed")]
    OutOfMemory,
    /// Internal contract violation (e.g. `insert` invoked with no parent);
    /// indicates a caller bug rather than a runtime condition.
    #[error("internal contract violation")]
    Internal,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<TrieError>> = RefCell::new(None);
}

pub(crate) fn set_error(err: TrieError) {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(err));
}

/// Reads and clears the pending error, if any (§6/§7).
pub fn check_trie_error_and_reset() -> Option<TrieError> {
    LAST_ERROR.with(|cell| cell.borrow_mut().take())
}
