//! # teamdraft-engine
//!
//! **Pure draft allocation engine for TeamDraft.**
//!
//! The engine is the compute plane -- it takes a match roster and a team
//! count and produces a balanced, randomly populated partition. It has:
//!
//! - **Zero side effects**: no DB access, no locking, no logging
//! - **Deterministic output under seed**: same seed + same roster order
//!   -> same allocation, on every run
//! - **Defensive filtering**: unconfirmed participants are dropped even
//!   if the caller forgot to
//! - **Guaranteed balance**: round-robin assignment keeps every pair of
//!   team sizes within 1 of each other

pub mod allocator;
pub mod digest;
pub mod shuffle;

pub use allocator::allocate;
pub use digest::{compute_allocation_digest, digest_prefix, verify_allocation_digest};
pub use shuffle::shuffled;
