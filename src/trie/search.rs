//! Bounded-distance search (§4.2), the `dash` exact-completion shortcut
//! (§4.3), and query translation.

use debug_print::debug_println;
use slab::Slab;

use super::Trie;
use crate::alphabet::{altranslate, ALPHABET_LEN, EOS};
use crate::array::NodeArray;
use crate::error::{set_error, TrieError};
use crate::node::{Node, NodeId};

/// A query translated for search (§3, §4.2).
///
/// Unlike the C original, the query length isn't smuggled into symbol
/// slot 0 of a shared buffer (there's no reason to reuse storage that way
/// in Rust); [`TranslatedQuery::at`] reproduces the same 1-indexed
/// `query[d]` lookups the DP recurrence uses, transparently returning
/// [`EOS`] for any position past the end of the query.
pub struct TranslatedQuery {
    symbols: Vec<u8>,
}

impl TranslatedQuery {
    /// Translates `query`, skipping the table lookup for any position
    /// before `max(0, start − tau_max)`: the band recursion resuming at
    /// depth `start` never reads a position earlier than that, however
    /// deep it recurses (§4.2). Skipped positions are filled with a
    /// placeholder that [`TranslatedQuery::at`] can never actually
    /// return to a caller, since nothing ever indexes that far left.
    pub fn new(query: &str, start: usize, tau_max: u8) -> Self {
        let skip = start.saturating_sub(tau_max as usize);
        TranslatedQuery {
            symbols: query
                .chars()
                .enumerate()
                .map(|(i, c)| if i < skip { 0 } else { altranslate(c) })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the `d`-th consumed symbol (1-indexed), or [`EOS`] once
    /// `d` runs past the query's length.
    #[inline]
    pub fn at(&self, d: usize) -> u8 {
        if d >= 1 && d <= self.symbols.len() {
            self.symbols[d - 1]
        } else {
            EOS
        }
    }
}

impl<P> Trie<P> {
    /// Appends every node at depth `bottom` within distance `tau` of
    /// `query` to `hits` (§4.2, §6 `search`).
    ///
    /// `start`/`trail` drive the prefix-reuse protocol: the search
    /// resumes from the frontier cached at depth `start` and records new
    /// frontiers for depths in `(start, trail]`. Returns `None` (with an
    /// error recorded) on a contract violation; returns `Some(())` once
    /// the traversal has run, even if a node-array push failed partway
    /// through and left `hits` incomplete (§7 — probe
    /// [`crate::error::check_trie_error_and_reset`] to detect that case).
    pub fn search(
        &mut self,
        query: &str,
        tau: u8,
        hits: &mut NodeArray,
        start: usize,
        trail: usize,
    ) -> Option<()> {
        match self.try_search(query, tau, hits, start, trail) {
            Ok(()) => Some(()),
            Err(err) => {
                set_error(err);
                None
            }
        }
    }

    fn try_search(
        &mut self,
        query: &str,
        tau: u8,
        hits: &mut NodeArray,
        start: usize,
        trail: usize,
    ) -> Result<(), TrieError> {
        if tau > self.maxtau() {
            return Err(TrieError::TauTooLarge);
        }
        let translated = TranslatedQuery::new(query, start, self.maxtau());
        if translated.len() > super::MAXBRCDLEN {
            return Err(TrieError::QueryTooLong);
        }
        if start > trail || trail >= translated.len() {
            return Err(TrieError::Internal);
        }

        for depth in (start + 1)..=trail {
            self.miles[depth].clear();
        }

        let frontier = self.miles[start].as_slice().to_vec();
        debug_println!(
            "search: {query:?} tau={tau} start={start} trail={trail} frontier={}",
            frontier.len()
        );
        let bottom = self.bottom();
        for node_id in frontier {
            expand(
                &mut self.arena,
                node_id,
                start,
                &translated,
                tau,
                trail,
                bottom,
                &mut self.miles,
                hits,
            );
        }
        Ok(())
    }
}

/// Computes the children of `node_id` (a node already resolved at depth
/// `depth`) against `query`, applying the pruning rules of §4.2.
fn expand<P>(
    arena: &mut Slab<Node<P>>,
    node_id: NodeId,
    depth: usize,
    query: &TranslatedQuery,
    tau: u8,
    trail: usize,
    bottom: usize,
    miles: &mut [NodeArray],
    hits: &mut NodeArray,
) {
    let d = depth + 1;
    let tau_i = tau as i32;
    let (parent_path, children, pcache) = {
        let node = &arena[node_id];
        (node.path, node.children, node.cache.clone())
    };

    // Right arm: shared across all children of this parent at this step.
    let maxa = (d as i32 - 1).min(tau_i).max(0);
    let mut common = vec![0u16; maxa as usize + 2];
    common[maxa as usize + 1] = pcache.get(maxa + 1);
    for a in (1..=maxa).rev() {
        let ancestor_symbol = ((parent_path >> (4 * (a - 1) as u32)) & 0xF) as u8;
        let rmatch = pcache.get(a) + mismatch(ancestor_symbol, query.at(d));
        let rshift = pcache.get(a - 1).min(common[(a + 1) as usize]) + 1;
        common[a as usize] = rmatch.min(rshift);
    }

    for symbol in 0..ALPHABET_LEN as u8 {
        let Some(child_id) = children[symbol as usize] else {
            continue;
        };
        let mut mindist = u16::MAX;

        for a in (1..=maxa).rev() {
            let v = common[a as usize];
            arena[child_id].cache.set(a, v);
            mindist = mindist.min(v);
        }
        for a in (1..=maxa).rev() {
            let lmatch = pcache.get(-a) + mismatch(symbol, query.at(d - a as usize));
            let prior = arena[child_id].cache.get(-(a + 1));
            let lshift = pcache.get(1 - a).min(prior) + 1;
            let v = lmatch.min(lshift);
            arena[child_id].cache.set(-a, v);
            mindist = mindist.min(v);
        }
        let cmatch = pcache.get(0) + mismatch(symbol, query.at(d));
        let left1 = arena[child_id].cache.get(-1);
        let right1 = arena[child_id].cache.get(1);
        let centre = cmatch.min(left1.min(right1) + 1);
        arena[child_id].cache.set(0, centre);
        mindist = mindist.min(centre);

        if mindist > tau as u16 {
            continue;
        }
        if d <= trail {
            miles[d].push(child_id);
        }
        if mindist == tau as u16 && d > trail {
            if let Some(landed) = dash(arena, child_id, d, query) {
                if arena[landed].data.is_some() {
                    hits.push(landed);
                }
            }
            continue;
        }
        if d == bottom {
            if centre <= tau as u16 {
                hits.push(child_id);
            }
            continue;
        }
        expand(arena, child_id, d, query, tau, trail, bottom, miles, hits);
    }
}

#[inline]
fn mismatch(a: u8, b: u8) -> u16 {
    (a != b) as u16
}

/// Follows the unique exact-match path for the remainder of `query`
/// starting just after `depth` (§4.3). Returns the landed node id if the
/// whole remaining query matched exactly; `None` if a required child is
/// missing or the query folds to something outside the alphabet (e.g. the
/// search-side wildcard fold, which by construction can never exact-match
/// an edge).
fn dash<P>(
    arena: &Slab<Node<P>>,
    mut node_id: NodeId,
    mut depth: usize,
    query: &TranslatedQuery,
) -> Option<NodeId> {
    loop {
        depth += 1;
        let symbol = query.at(depth);
        if symbol == EOS {
            return Some(node_id);
        }
        if symbol as usize >= ALPHABET_LEN {
            return None;
        }
        node_id = arena[node_id].child(symbol)?;
    }
}
