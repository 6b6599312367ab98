//! A fixed-alphabet radix trie over `{A,C,G,T,N}` that answers "return
//! every indexed string within Levenshtein distance τ of a query" in
//! time effectively independent of dictionary size.
//!
//! The three load-bearing pieces are a branch-and-bound traversal that
//! folds the edit-distance DP table into a `2τ+1`-wide anti-diagonal
//! band carried in each node ([`band`], [`trie::search`]), a per-depth
//! frontier cache that lets successive queries sharing a prefix resume
//! from where the previous one diverged ([`trie::Trie::search`]'s
//! `start`/`trail` parameters), and a compact node layout with a packed
//! path and fixed-width cache ([`node`]).
//!
//! This crate is the core only: it is payload-agnostic (callers attach
//! and interpret leaf data themselves) and has no opinion on I/O,
//! clustering, or deduplication above the trie.

pub mod alphabet;
pub mod array;
pub mod band;
pub mod error;
pub mod node;
pub mod trie;

pub use array::NodeArray;
pub use error::{check_trie_error_and_reset, TrieError};
pub use node::{Node, NodeId};
pub use trie::{new_narray, Trie, TranslatedQuery, MAXBRCDLEN, MAX_TAU, M};
