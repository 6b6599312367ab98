//! Insertion protocol (§4.1).

use debug_print::debug_println;

use super::{Trie, MAXBRCDLEN};
use crate::alphabet::translate;
use crate::error::{set_error, TrieError};
use crate::node::{Node, NodeId};

impl<P> Trie<P> {
    /// Indexes `s`, returning its terminal node (§4.1, §6 `insert_string`).
    ///
    /// Returns `None` and records `TooLong`, `BadSymbol`, or (per the
    /// empty-string open question in §9) `Internal` on failure. Payload
    /// attachment is the caller's responsibility via [`Node::set_data`].
    pub fn insert_string(&mut self, s: &str) -> Option<NodeId> {
        match self.try_insert_string(s) {
            Ok(id) => Some(id),
            Err(err) => {
                set_error(err);
                None
            }
        }
    }

    fn try_insert_string(&mut self, s: &str) -> Result<NodeId, TrieError> {
        // The empty string would land on the root, whose slot the C
        // original overloaded for trie metadata; this crate keeps
        // metadata out-of-band (§10.3) so nothing would actually be
        // corrupted, but an empty indexed string is still meaningless
        // for a trie whose hits are emitted at a fixed `bottom` depth, so
        // the open question in §9 is resolved the same way: reject it.
        if s.is_empty() {
            return Err(TrieError::Internal);
        }
        let symbols: Vec<u8> = s.chars().map(translate).collect::<Result<_, _>>()?;
        if symbols.len() > MAXBRCDLEN {
            return Err(TrieError::TooLong);
        }

        let mut node_id = self.root;
        let mut matched = 0;
        while matched < symbols.len() {
            match self.arena[node_id].child(symbols[matched]) {
                Some(child) => {
                    node_id = child;
                    matched += 1;
                }
                None => break,
            }
        }

        for &symbol in &symbols[matched..] {
            let child = Node::child_of(&self.arena[node_id], symbol, self.maxtau());
            let child_id = self.arena.insert(child);
            self.arena[node_id].children[symbol as usize] = Some(child_id);
            node_id = child_id;
        }

        debug_println!("insert_string: {s:?} -> node {node_id}");
        Ok(node_id)
    }
}
