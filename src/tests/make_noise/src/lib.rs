//! Generates randomized DNA-alphabet strings and noisy variants of them,
//! for fuzzing `radixband`'s bounded-distance search against a dictionary
//! of known edit distance from a query.

use rand::seq::SliceRandom;
use rand::Rng;

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Returns a random string of `len` bases over `{A,C,G,T}`.
pub fn random_strand(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| *BASES.choose(rng).unwrap()).collect()
}

/// A single edit applied by [`noisy_variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Substitution,
    Insertion,
    Deletion,
}

/// Applies exactly `edits` independent single-character edits to `source`
/// and returns the result together with the edits chosen. The true
/// Levenshtein distance between `source` and the result is at most
/// `edits` (edits can cancel each other out, e.g. insert then delete the
/// same base), so callers that need an exact distance should recompute it
/// rather than assume it.
pub fn noisy_variant(rng: &mut impl Rng, source: &str, edits: usize) -> (String, Vec<Edit>) {
    let mut chars: Vec<char> = source.chars().collect();
    let mut applied = Vec::with_capacity(edits);
    for _ in 0..edits {
        if chars.is_empty() {
            let base = *BASES.choose(rng).unwrap();
            chars.push(base);
            applied.push(Edit::Insertion);
            continue;
        }
        let edit = *[Edit::Substitution, Edit::Insertion, Edit::Deletion]
            .choose(rng)
            .unwrap();
        match edit {
            Edit::Substitution => {
                let i = rng.gen_range(0..chars.len());
                chars[i] = *BASES.choose(rng).unwrap();
            }
            Edit::Insertion => {
                let i = rng.gen_range(0..=chars.len());
                chars.insert(i, *BASES.choose(rng).unwrap());
            }
            Edit::Deletion => {
                let i = rng.gen_range(0..chars.len());
                chars.remove(i);
            }
        }
        applied.push(edit);
    }
    (chars.into_iter().collect(), applied)
}

/// Returns `count` random strands of length `len`, deduplicated.
pub fn random_dictionary(rng: &mut impl Rng, count: usize, len: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::with_capacity(count);
    while seen.len() < count {
        seen.insert(random_strand(rng, len));
    }
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn random_strand_has_requested_length() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        assert_eq!(random_strand(&mut rng, 12).len(), 12);
    }

    #[test]
    fn noisy_variant_tracks_requested_edit_count() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(2);
        let (_, edits) = noisy_variant(&mut rng, "ACGTACGT", 3);
        assert_eq!(edits.len(), 3);
    }

    #[test]
    fn random_dictionary_is_deduplicated() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let dict = random_dictionary(&mut rng, 20, 6);
        let unique: std::collections::HashSet<_> = dict.iter().collect();
        assert_eq!(unique.len(), dict.len());
    }
}
