//! Allocation fingerprinting.
//!
//! A compact SHA-256 digest over an allocation's labels and member lists.
//! Two draws of the same roster with the same seed produce the same digest,
//! so determinism can be checked (and a stored draw verified) without
//! comparing full payloads.

use sha2::{Digest, Sha256};
use teamdraft_types::TeamAllocation;

/// Compute the fingerprint of an allocation.
///
/// The hash covers, in order: team count, then for each team its label,
/// member count, and members. Team order and within-team member order both
/// affect the result.
#[must_use]
pub fn compute_allocation_digest(allocation: &TeamAllocation) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"teamdraft:allocation:v1:");
    hasher.update((allocation.teams.len() as u64).to_le_bytes());

    for team in &allocation.teams {
        hasher.update((team.label.len() as u64).to_le_bytes());
        hasher.update(team.label.as_bytes());
        hasher.update((team.members.len() as u64).to_le_bytes());
        for member in &team.members {
            hasher.update((member.len() as u64).to_le_bytes());
            hasher.update(member.as_bytes());
        }
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Recompute the digest and compare with the expected value.
#[must_use]
pub fn verify_allocation_digest(allocation: &TeamAllocation, expected: &[u8; 32]) -> bool {
    compute_allocation_digest(allocation) == *expected
}

/// Short hex prefix of a digest, for logs.
#[must_use]
pub fn digest_prefix(digest: &[u8; 32]) -> String {
    hex::encode(&digest[..4])
}
