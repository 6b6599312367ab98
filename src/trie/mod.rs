//! The trie itself: arena of nodes, construction, and the prefix-reuse
//! frontier cache (§3 "Trie metadata").

mod insert;
mod search;

pub use search::TranslatedQuery;

use debug_print::debug_println;
use slab::Slab;

use crate::array::NodeArray;
use crate::error::{set_error, TrieError};
use crate::node::{Node, NodeId};

/// Upper bound on string length, with slack (§3 constant `M`).
pub const M: usize = 1024;
/// Hard cap on any inserted or queried string's character count (§3).
pub const MAXBRCDLEN: usize = M - 2;
/// Hard cap on `τ_max` imposed by the 8-symbol packed path (§3, §9).
pub const MAX_TAU: u8 = 8;

const INITIAL_NODE_CAPACITY: usize = 256;

/// A fixed-alphabet radix trie supporting bounded Levenshtein search.
///
/// Generic over the caller's payload type `P`, attached to terminal
/// nodes after [`Trie::insert_string`] returns (§6).
pub struct Trie<P> {
    pub(crate) arena: Slab<Node<P>>,
    pub(crate) root: NodeId,
    maxtau: u8,
    bottom: usize,
    /// Per-depth frontier cache for the prefix-reuse protocol (§4.2).
    /// `miles[0]` always holds exactly the root.
    pub(crate) miles: Vec<NodeArray>,
}

impl<P> Trie<P> {
    /// Constructs an empty trie (§6 `new_trie`). Returns `None` and
    /// records an error if `maxtau > 8` or `bottom` is out of `[1, M)`.
    pub fn new_trie(maxtau: u8, bottom: usize) -> Option<Self> {
        match Self::try_new(maxtau, bottom) {
            Ok(trie) => Some(trie),
            Err(err) => {
                set_error(err);
                None
            }
        }
    }

    fn try_new(maxtau: u8, bottom: usize) -> Result<Self, TrieError> {
        if maxtau > MAX_TAU {
            return Err(TrieError::TauTooLarge);
        }
        if bottom == 0 || bottom >= M {
            return Err(TrieError::TauTooLarge);
        }
        let mut arena = Slab::with_capacity(INITIAL_NODE_CAPACITY);
        let root = arena.insert(Node::root(maxtau));
        debug_println!("new_trie: root={root} maxtau={maxtau} bottom={bottom}");

        let mut miles = Vec::with_capacity(M);
        miles.resize_with(M, NodeArray::default);
        miles[0].push(root);

        Ok(Trie {
            arena,
            root,
            maxtau,
            bottom,
            miles,
        })
    }

    pub fn maxtau(&self) -> u8 {
        self.maxtau
    }

    pub fn bottom(&self) -> usize {
        self.bottom
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.arena.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<P>> {
        self.arena.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() <= 1
    }

    /// Explicit, caller-driven teardown (§4.5, §6 `destroy_trie`).
    ///
    /// Ordinary `drop(trie)` already frees every node and payload
    /// correctly; this exists for callers that need their destructor
    /// invoked on each payload first (e.g. to release a handle the
    /// payload wraps). See DESIGN.md for why this crate doesn't need the
    /// C original's two-phase `info`/root teardown.
    pub fn destroy(mut self, destruct: Option<impl FnMut(P)>) {
        if let Some(mut destruct) = destruct {
            for (_, node) in self.arena.iter_mut() {
                if let Some(data) = node.data.take() {
                    destruct(data);
                }
            }
        }
        debug_println!("destroy_trie: dropping {} nodes", self.arena.len());
    }
}

/// Returns an empty node array with initial capacity 32 (§6 `new_narray`).
pub fn new_narray() -> NodeArray {
    NodeArray::new()
}
