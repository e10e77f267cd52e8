//! Integration tests for the fit session through the headless harness.
//!
//! Covers the edit pipeline end to end: raw text -> store -> scene -> report.

use cuboid_fit_lib::fixtures::{as_inputs, harness_with_inner, outer_sized_box};
use cuboid_fit_lib::harness::TestHarness;
use cuboid_fit_lib::session::EditOutcome;
use shared::{BoxDimensions, BoxRole, DEFAULT_INNER, DOES_NOT_FIT_MESSAGE, FITS_MESSAGE};

#[test]
fn test_initial_defaults_fit() {
    let h = TestHarness::new();
    assert_eq!(h.inner(), DEFAULT_INNER);
    assert!(h.report().fits);
    assert_eq!(h.report().message, FITS_MESSAGE);
}

#[test]
fn test_unit_edit_fits_and_updates_inner() {
    let mut h = TestHarness::new();
    let outcome = h.apply("1", "1", "1");

    assert!(outcome.is_applied());
    assert_eq!(h.inner(), BoxDimensions::new(1.0, 1.0, 1.0));
    assert!(h.report().fits);
    assert_eq!(h.report().message, FITS_MESSAGE);
}

#[test]
fn test_wide_edit_does_not_fit() {
    let mut h = TestHarness::new();
    let outcome = h.apply("3", "1", "1");

    let report = outcome.report().unwrap();
    assert!(!report.fits);
    assert_eq!(report.message, DOES_NOT_FIT_MESSAGE);
    assert_eq!(h.report(), report);
}

#[test]
fn test_each_axis_can_break_the_fit() {
    for inputs in [["2.36", "1", "1"], ["1", "2.4", "1"], ["1", "1", "12.04"]] {
        let mut h = TestHarness::new();
        let outcome = h.apply(inputs[0], inputs[1], inputs[2]);
        assert!(!outcome.report().unwrap().fits, "{inputs:?} should not fit");
    }
}

#[test]
fn test_equal_extents_fit() {
    let mut h = TestHarness::new();
    let [w, hh, d] = as_inputs(&outer_sized_box());
    assert!(h.apply(&w, &hh, &d).report().unwrap().fits);
}

#[test]
fn test_non_numeric_input_is_silent_noop() {
    let mut h = TestHarness::new();
    h.apply("3", "1", "1");
    let inner_before = h.inner();
    let report_before = h.report().clone();
    let node_before = h.node(BoxRole::Inner).unwrap().id.clone();
    let version_before = h.scene_version();

    for bad in [["abc", "1", "1"], ["1", "", "1"], ["1", "1", "NaN"], ["1", "1", "inf"]] {
        let outcome = h.apply(bad[0], bad[1], bad[2]);
        assert!(matches!(outcome, EditOutcome::Rejected(_)));
    }

    assert_eq!(h.inner(), inner_before);
    assert_eq!(*h.report(), report_before);
    assert_eq!(h.node(BoxRole::Inner).unwrap().id, node_before);
    assert_eq!(h.scene_version(), version_before);
    assert_eq!(h.session.applied_edits(), 1);
}

#[test]
fn test_repeated_edit_is_idempotent() {
    let mut h = TestHarness::new();
    let first = h.apply("1.5", "0.75", "4").report().cloned();
    let inner_first = h.inner();
    let second = h.apply("1.5", "0.75", "4").report().cloned();

    assert_eq!(first, second);
    assert_eq!(h.inner(), inner_first);
    assert_eq!(h.node_count(), 3);
}

#[test]
fn test_edit_replaces_inner_node_with_anchor_placement() {
    let mut h = TestHarness::new();
    let old_id = h.node(BoxRole::Inner).unwrap().id.clone();

    h.apply("1", "1", "1");

    let scene = h.session.scene();
    assert_eq!(scene.count_role(BoxRole::Inner), 1);
    assert!(scene.get_node(&old_id).is_none());

    let inner = h.node(BoxRole::Inner).unwrap();
    assert_ne!(inner.id, old_id);
    assert_eq!(inner.id, h.session.inner_node_id());
    assert_eq!(inner.dimensions, BoxDimensions::new(1.0, 1.0, 1.0));
    let expected_x = 2.35 / 2.0 - 0.5;
    assert!((inner.position[0] - expected_x).abs() < 1e-12);
    assert_eq!(inner.position[1], -1.0);
    assert_eq!(inner.position[2], 0.0);
}

#[test]
fn test_edit_leaves_outer_and_secondary_alone() {
    let mut h = TestHarness::new();
    let outer_before = h.node(BoxRole::Outer).unwrap().clone();
    let secondary_before = h.node(BoxRole::Secondary).unwrap().clone();

    h.apply("0.5", "2", "6");

    assert_eq!(*h.node(BoxRole::Outer).unwrap(), outer_before);
    assert_eq!(*h.node(BoxRole::Secondary).unwrap(), secondary_before);
}

#[test]
fn test_whitespace_around_numbers_is_accepted() {
    let mut h = TestHarness::new();
    assert!(h.apply(" 1 ", "\t2", "3\n").is_applied());
    assert_eq!(h.inner(), BoxDimensions::new(1.0, 2.0, 3.0));
}

#[test]
fn test_oversized_start_recovers_after_edit() {
    let mut h = harness_with_inner(BoxDimensions::new(5.0, 5.0, 5.0));
    assert!(!h.report().fits);
    h.apply("1", "1", "1");
    assert!(h.report().fits);
}

#[test]
fn test_trailing_text_after_number_is_ignored() {
    let mut h = TestHarness::new();
    let outcome = h.apply("3abc", "2.5cm", ".5x");

    assert!(outcome.is_applied());
    assert_eq!(h.inner(), BoxDimensions::new(3.0, 2.5, 0.5));
    assert_eq!(h.report().message, DOES_NOT_FIT_MESSAGE);
}

#[test]
fn test_comma_decimal_reads_integer_part() {
    let mut h = TestHarness::new();
    assert!(h.apply("1,5", "1", "1").is_applied());
    assert_eq!(h.inner().width, 1.0);
}
