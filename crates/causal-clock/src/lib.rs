//! # causal-clock
//!
//! Logical clocks for the causal store.
//!
//! - [`VersionVector`] - per-replica counters with partial-order comparison and merge
//! - [`CausalOrder`] - outcome of comparing two vectors
//!
//! ## Merge Guarantees
//!
//! [`VersionVector::merge`] is component-wise max and satisfies:
//! 1. **Commutativity**: `merge(A, B) == merge(B, A)`
//! 2. **Associativity**: `merge(A, merge(B, C)) == merge(merge(A, B), C)`
//! 3. **Idempotency**: `merge(A, A) == A`

pub mod order;
pub mod vector;

pub use order::CausalOrder;
pub use vector::VersionVector;
