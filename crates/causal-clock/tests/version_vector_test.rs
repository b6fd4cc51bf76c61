//! VersionVector behavior and algebraic laws.

use causal_clock::{CausalOrder, VersionVector};
use proptest::prelude::*;

fn vv(entries: &[(&str, u64)]) -> VersionVector {
    entries.iter().map(|(k, v)| (*k, *v)).collect()
}

// =============================================================================
// Increment
// =============================================================================

#[test]
fn increment_touches_only_its_entry() {
    let mut clock = vv(&[("DC2", 7)]);
    clock.increment("DC1");
    clock.increment("DC1");
    assert_eq!(clock.get("DC1"), 2);
    assert_eq!(clock.get("DC2"), 7);
    assert_eq!(clock.len(), 2);
}

// =============================================================================
// is_causally_before
// =============================================================================

#[test]
fn causally_before_is_reflexive() {
    let a = vv(&[("DC1", 3), ("DC2", 1)]);
    assert!(a.is_causally_before(&a));
    assert!(VersionVector::new().is_causally_before(&VersionVector::new()));
}

#[test]
fn causally_before_fails_when_any_entry_exceeds() {
    let a = vv(&[("DC1", 3), ("DC2", 1)]);
    let b = vv(&[("DC1", 2), ("DC2", 5)]);
    assert!(!a.is_causally_before(&b));
    assert!(!b.is_causally_before(&a));
}

#[test]
fn causally_before_treats_absent_in_other_as_zero() {
    let a = vv(&[("DC1", 1)]);
    let b = vv(&[("DC2", 1)]);
    assert!(!a.is_causally_before(&b));
}

#[test]
fn empty_vector_is_before_everything() {
    let empty = VersionVector::new();
    assert!(empty.is_causally_before(&vv(&[("DC1", 1)])));
}

#[test]
fn dominates_mirrors_causally_before() {
    let a = vv(&[("DC1", 1)]);
    let b = vv(&[("DC1", 2), ("DC2", 1)]);
    assert!(b.dominates(&a));
    assert!(!a.dominates(&b));
    assert!(a.dominates(&a));
}

// =============================================================================
// compare / happens_before / concurrent_with
// =============================================================================

#[test]
fn compare_covers_all_orders() {
    let a = vv(&[("DC1", 1)]);
    let b = vv(&[("DC1", 2)]);
    let c = vv(&[("DC2", 1)]);

    assert_eq!(a.compare(&a), CausalOrder::Equal);
    assert_eq!(a.compare(&b), CausalOrder::Before);
    assert_eq!(b.compare(&a), CausalOrder::After);
    assert_eq!(a.compare(&c), CausalOrder::Concurrent);
    assert_eq!(a.compare(&b).reverse(), b.compare(&a));
}

#[test]
fn happens_before_is_strict() {
    let a = vv(&[("DC1", 1)]);
    let mut b = a.clone();
    b.increment("DC2");

    assert!(a.happens_before(&b));
    assert!(!b.happens_before(&a));
    assert!(!a.happens_before(&a));
}

#[test]
fn concurrent_vectors_detected() {
    let a = vv(&[("DC1", 2), ("DC2", 1)]);
    let b = vv(&[("DC1", 1), ("DC2", 2)]);
    assert!(a.concurrent_with(&b));
    assert!(b.concurrent_with(&a));
    assert!(!a.concurrent_with(&a));
}

// =============================================================================
// merge
// =============================================================================

#[test]
fn merge_is_component_wise_max() {
    let mut a = vv(&[("DC1", 2), ("DC2", 1)]);
    let b = vv(&[("DC1", 1), ("DC2", 2), ("DC3", 1)]);
    a.merge(&b);
    assert_eq!(a, vv(&[("DC1", 2), ("DC2", 2), ("DC3", 1)]));
    assert!(b.is_causally_before(&a));
}

// =============================================================================
// rendering / serde
// =============================================================================

#[test]
fn display_is_sorted_by_replica() {
    let a = vv(&[("DC2", 1), ("DC1", 2)]);
    assert_eq!(a.to_string(), "{DC1: 2, DC2: 1}");
    assert_eq!(a.replicas(), vec!["DC1", "DC2"]);
}

#[test]
fn serializes_as_plain_json_object() {
    let mut a = VersionVector::new();
    a.increment("DC1");
    assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"DC1":1}"#);
    let back: VersionVector = serde_json::from_str(r#"{"DC1":1,"DC2":3}"#).unwrap();
    assert_eq!(back.get("DC2"), 3);
}

// =============================================================================
// Property tests
// =============================================================================

fn arb_vector() -> impl Strategy<Value = VersionVector> {
    prop::collection::btree_map("DC[1-4]", 0u64..20, 0..4)
        .prop_map(|m| m.into_iter().collect::<VersionVector>())
}

proptest! {
    #[test]
    fn prop_causally_before_reflexive(a in arb_vector()) {
        prop_assert!(a.is_causally_before(&a));
    }

    #[test]
    fn prop_increment_strictly_advances_own_entry(a in arb_vector(), id in "DC[1-4]") {
        let mut next = a.clone();
        let before = a.get(&id);
        next.increment(&id);
        prop_assert_eq!(next.get(&id), before + 1);
        prop_assert!(a.is_causally_before(&next));
        prop_assert!(!next.is_causally_before(&a));
        for replica in a.replicas() {
            if replica != id {
                prop_assert_eq!(next.get(replica), a.get(replica));
            }
        }
    }

    #[test]
    fn prop_merge_commutative(a in arb_vector(), b in arb_vector()) {
        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);
        prop_assert_eq!(ab.compare(&ba), CausalOrder::Equal);
    }

    #[test]
    fn prop_merge_idempotent(a in arb_vector()) {
        let mut aa = a.clone();
        aa.merge(&a);
        prop_assert_eq!(aa, a);
    }

    #[test]
    fn prop_merge_dominates_inputs(a in arb_vector(), b in arb_vector()) {
        let mut merged = a.clone();
        merged.merge(&b);
        prop_assert!(merged.dominates(&a));
        prop_assert!(merged.dominates(&b));
    }

    #[test]
    fn prop_compare_antisymmetric(a in arb_vector(), b in arb_vector()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }
}
