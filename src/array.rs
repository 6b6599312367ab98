//! Growable node-id stack (§3, §4.4): the hit collector and the per-depth
//! `miles` frontier cache share this type.
//!
//! `push` grows the backing storage with [`Vec::try_reserve`] rather than
//! the ordinary infallible `Vec::push`, so an allocation failure can be
//! turned into [`TrieError::OutOfMemory`] on the error channel and a
//! silently dropped element instead of an abort, matching §4.4 and §7's
//! "the search never aborts mid-traversal on a push failure" rule.

use crate::error::{set_error, TrieError};
use crate::node::NodeId;

const INITIAL_CAPACITY: usize = 32;

#[derive(Clone, Debug, Default)]
pub struct NodeArray {
    nodes: Vec<NodeId>,
}

impl NodeArray {
    /// Empty array with initial capacity 32 (§6 `new_narray`).
    pub fn new() -> Self {
        NodeArray {
            nodes: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends `id`, doubling capacity on overflow. Returns `false` (and
    /// records [`TrieError::OutOfMemory`]) if growth fails; the caller is
    /// expected to keep going and probe the error channel afterwards.
    pub fn push(&mut self, id: NodeId) -> bool {
        if self.nodes.len() == self.nodes.capacity() {
            let grow_by = self.nodes.capacity().max(INITIAL_CAPACITY);
            if self.nodes.try_reserve(grow_by).is_err() {
                set_error(TrieError::OutOfMemory);
                return false;
            }
        }
        self.nodes.push(id);
        true
    }

    /// Empties the array without releasing its storage (§3: "cells
    /// outside that range have `pos = 0` but remain allocated").
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }
}

impl<'a> IntoIterator for &'a NodeArray {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
