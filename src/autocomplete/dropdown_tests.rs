//! Tests for the dropdown state machine

use std::collections::HashSet;

use super::*;
use crate::test_utils::test_helpers::{RecordingTarget, RenderOp};
use crate::tokenizer::existing_tags;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn dropdown() -> Dropdown<RecordingTarget> {
    Dropdown::new(RecordingTarget::default())
}

#[test]
fn test_new_dropdown_is_hidden() {
    let dropdown = dropdown();
    assert_eq!(dropdown.status(), &DropdownStatus::Hidden);
    assert!(!dropdown.is_visible());
    assert_eq!(dropdown.target().ops, vec![RenderOp::Clear, RenderOp::Hide]);
}

#[test]
fn test_show_loading() {
    let mut dropdown = dropdown();
    dropdown.show_loading();
    assert_eq!(dropdown.status(), &DropdownStatus::Loading);
    assert!(dropdown.is_visible());
    assert_eq!(
        dropdown.target().last_message(),
        Some((MessageKind::Loading, LOADING_MESSAGE.to_string()))
    );
}

#[test]
fn test_results_keep_server_order() {
    let mut dropdown = dropdown();
    dropdown.show_loading();
    dropdown.show_results(names(&["zeta", "alpha", "mid"]), &HashSet::new());

    assert_eq!(dropdown.status(), &DropdownStatus::Results);
    assert_eq!(dropdown.rendered(), names(&["zeta", "alpha", "mid"]).as_slice());
    assert_eq!(dropdown.target().visible_items(), names(&["zeta", "alpha", "mid"]));
    assert_eq!(dropdown.target().ops.last(), Some(&RenderOp::Show));
}

#[test]
fn test_results_exclude_existing_case_insensitive() {
    let mut dropdown = dropdown();
    dropdown.show_results(
        names(&["python", "pytorch", "php"]),
        &existing_tags("PHP, Web"),
    );
    assert_eq!(dropdown.rendered(), names(&["python", "pytorch"]).as_slice());
    assert_eq!(dropdown.suggestions().len(), 3);
}

#[test]
fn test_empty_list_shows_no_matches() {
    let mut dropdown = dropdown();
    dropdown.show_results(Vec::new(), &HashSet::new());
    assert_eq!(
        dropdown.status(),
        &DropdownStatus::Empty(EmptyReason::NoMatches)
    );
    assert_eq!(
        dropdown.target().last_message(),
        Some((MessageKind::Empty, NO_MATCHES_MESSAGE.to_string()))
    );
}

#[test]
fn test_all_filtered_shows_all_selected() {
    let mut dropdown = dropdown();
    dropdown.show_results(names(&["Rust", "web"]), &existing_tags("rust, WEB"));
    assert_eq!(
        dropdown.status(),
        &DropdownStatus::Empty(EmptyReason::AllSelected)
    );
    assert_eq!(
        dropdown.target().last_message(),
        Some((MessageKind::Empty, ALL_SELECTED_MESSAGE.to_string()))
    );
    assert_ne!(NO_MATCHES_MESSAGE, ALL_SELECTED_MESSAGE);
}

#[test]
fn test_error_is_distinct_from_empty() {
    let mut dropdown = dropdown();
    dropdown.show_loading();
    dropdown.show_error(&FetchError::Status(502));
    assert!(matches!(dropdown.status(), DropdownStatus::Error(msg) if msg.contains("502")));
    assert_eq!(
        dropdown.target().last_message(),
        Some((MessageKind::Error, ERROR_MESSAGE.to_string()))
    );
}

#[test]
fn test_new_results_replace_old_and_reset_selection() {
    let mut dropdown = dropdown();
    dropdown.show_results(names(&["a", "b", "c"]), &HashSet::new());
    dropdown.select_next();
    dropdown.select_next();
    assert_eq!(dropdown.selected(), Some(1));

    dropdown.show_results(names(&["x"]), &HashSet::new());
    assert_eq!(dropdown.selected(), None);
    assert_eq!(dropdown.suggestions(), names(&["x"]).as_slice());
    assert_eq!(dropdown.target().visible_items(), names(&["x"]));
}

#[test]
fn test_hide_resets_selection() {
    let mut dropdown = dropdown();
    dropdown.show_results(names(&["a", "b"]), &HashSet::new());
    dropdown.select_previous();
    assert_eq!(dropdown.selected_name(), Some("b"));

    dropdown.hide();
    assert_eq!(dropdown.status(), &DropdownStatus::Hidden);
    assert_eq!(dropdown.selected(), None);
    assert_eq!(dropdown.target().ops.last(), Some(&RenderOp::Hide));
}

#[test]
fn test_navigation_marks_target() {
    let mut dropdown = dropdown();
    dropdown.show_results(names(&["a", "b"]), &HashSet::new());
    dropdown.select_next();
    assert_eq!(
        dropdown.target().ops.last(),
        Some(&RenderOp::MarkSelected(Some(0)))
    );
}

#[test]
fn test_navigation_noop_without_rows() {
    let mut dropdown = dropdown();
    dropdown.show_loading();
    dropdown.select_next();
    dropdown.select_previous();
    assert_eq!(dropdown.selected(), None);
}

#[test]
fn test_select_only_in_results_state() {
    let mut dropdown = dropdown();
    assert!(!dropdown.select(0));

    dropdown.show_results(names(&["a", "b"]), &HashSet::new());
    assert!(dropdown.select(1));
    assert_eq!(dropdown.selected_name(), Some("b"));
    assert!(!dropdown.select(2));
    assert_eq!(dropdown.selected_name(), Some("b"));
}
