//! Roster permutation — the engine's only source of randomness.
//!
//! Kept as its own seam so the randomness strategy stays swappable: seeded
//! draws use a `StdRng` derived from the seed (reproducible across runs on
//! the same build), unseeded draws use the thread-local generator.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{SeedableRng, thread_rng};
use teamdraft_types::Participant;

/// Return a uniformly random permutation of `participants`.
///
/// With `Some(seed)`, the permutation is a deterministic function of the
/// seed and the input order. With `None`, each call draws from the
/// thread-local RNG.
#[must_use]
pub fn shuffled(participants: &[Participant], seed: Option<u64>) -> Vec<Participant> {
    let mut out: Vec<Participant> = participants.to_vec();
    match seed {
        Some(seed) => out.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => out.shuffle(&mut thread_rng()),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant::confirmed(format!("P{i}")))
            .collect()
    }

    #[test]
    fn same_seed_same_permutation() {
        let players = roster(20);
        let a = shuffled(&players, Some(42));
        let b = shuffled(&players, Some(42));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        // 20! orderings; two fixed seeds colliding would mean a broken RNG.
        let players = roster(20);
        let a = shuffled(&players, Some(1));
        let b = shuffled(&players, Some(2));
        assert_ne!(a, b);
    }

    #[test]
    fn permutation_preserves_multiset() {
        let players = roster(10);
        let mut expected: Vec<String> =
            players.iter().map(|p| p.display_name.clone()).collect();
        let mut got: Vec<String> = shuffled(&players, Some(7))
            .iter()
            .map(|p| p.display_name.clone())
            .collect();
        expected.sort();
        got.sort();
        assert_eq!(expected, got);
    }

    #[test]
    fn empty_and_singleton_are_trivial() {
        assert!(shuffled(&[], Some(1)).is_empty());
        let one = roster(1);
        assert_eq!(shuffled(&one, None), one);
    }
}
