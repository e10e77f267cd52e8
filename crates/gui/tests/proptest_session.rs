//! Property-based tests for dimension edits on a fit session
//!
//! Validates edit invariants:
//! - Applying the same valid triple twice yields the same inner box and report
//! - A triple with any non-numeric field changes neither the store nor the scene
//! - After any applied edit there is exactly one inner node, placed by the anchor rule

use cuboid_fit_lib::harness::TestHarness;
use proptest::prelude::*;
use shared::{anchor_inner, BoxDimensions, BoxRole};

fn extent_text() -> impl Strategy<Value = (f64, String)> {
    (0.0f64..15.0).prop_map(|v| (v, v.to_string()))
}

fn non_numeric() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("NaN".to_string()),
        Just("inf".to_string()),
        "[a-zA-Z][a-zA-Z0-9 ]{0,6}",
        " *[.+-]{1,2}",
    ]
}

proptest! {
    /// Property: repeating a valid edit is idempotent
    #[test]
    fn repeated_edit_is_idempotent(
        (w, ws) in extent_text(),
        (h, hs) in extent_text(),
        (d, ds) in extent_text(),
    ) {
        let mut harness = TestHarness::new();
        let first = harness.apply(&ws, &hs, &ds);
        let inner_first = harness.inner();
        let second = harness.apply(&ws, &hs, &ds);

        prop_assert!(first.is_applied());
        prop_assert_eq!(first, second);
        prop_assert_eq!(inner_first, BoxDimensions::new(w, h, d));
        prop_assert_eq!(harness.inner(), inner_first);
        prop_assert_eq!(harness.node_count(), 3);
    }

    /// Property: any non-numeric field makes the edit a no-op
    #[test]
    fn non_numeric_field_changes_nothing(
        (_, ws) in extent_text(),
        (_, hs) in extent_text(),
        (_, ds) in extent_text(),
        bad in non_numeric(),
        slot in 0usize..3,
    ) {
        let mut harness = TestHarness::new();
        let inner_before = harness.inner();
        let report_before = harness.report().clone();
        let version_before = harness.scene_version();

        let mut fields = [ws, hs, ds];
        fields[slot] = bad;
        let outcome = harness.apply(&fields[0], &fields[1], &fields[2]);

        prop_assert!(!outcome.is_applied());
        prop_assert_eq!(harness.inner(), inner_before);
        prop_assert_eq!(harness.report(), &report_before);
        prop_assert_eq!(harness.scene_version(), version_before);
    }

    /// Property: the inner node always follows the anchor rule
    #[test]
    fn inner_node_anchored_after_edit(
        (w, ws) in extent_text(),
        (h, hs) in extent_text(),
        (d, ds) in extent_text(),
    ) {
        let mut harness = TestHarness::new();
        harness.apply(&ws, &hs, &ds);

        prop_assert_eq!(harness.session.scene().count_role(BoxRole::Inner), 1);
        let node = harness.node(BoxRole::Inner).unwrap();
        let outer = *harness.session.dimensions().outer();
        let inner = BoxDimensions::new(w, h, d);
        prop_assert_eq!(node.position, anchor_inner(&inner, &outer));
    }
}
