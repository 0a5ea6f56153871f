//! Tests for app state

use std::time::Instant;

use ratatui::crossterm::event::KeyCode;

use super::*;
use crate::autocomplete::DropdownStatus;
use crate::suggest::FetchError;
use crate::test_utils::test_helpers::{StaticService, key, ms, settle, test_app};

#[test]
fn test_new_binds_tag_field() {
    let app = test_app("Hello", "PHP, Web", StaticService::new());
    assert_eq!(app.tags_index, 1);
    assert_eq!(app.tags().unwrap().field().value(), "PHP, Web");
    assert_eq!(app.form.focus(), 0);
    assert!(!app.should_quit());
    assert!(app.submitted().is_none());
}

#[test]
fn test_draft_trims_title_and_parses_tags() {
    let app = test_app("  Hello world ", "PHP, Web, , php ,Web", StaticService::new());
    assert_eq!(
        app.draft(),
        Draft {
            title: "Hello world".to_string(),
            tags: vec!["PHP".to_string(), "Web".to_string(), "php".to_string()],
        }
    );
}

#[test]
fn test_submit_records_draft_and_quits() {
    let mut app = test_app("Hello", "rust", StaticService::new());
    app.submit();
    assert!(app.should_quit());
    assert_eq!(app.submitted().unwrap().tags, vec!["rust".to_string()]);
}

#[test]
fn test_draft_serializes_as_json() {
    let draft = Draft {
        title: "Hello".to_string(),
        tags: vec!["rust".to_string(), "tui".to_string()],
    };
    assert_eq!(
        serde_json::to_string(&draft).unwrap(),
        r#"{"title":"Hello","tags":["rust","tui"]}"#
    );
}

#[test]
fn test_focus_fetch_round_trips_through_worker() {
    let service = StaticService::new().answer("Web", &["Webpack", "Web", "WebGL"]);
    let mut app = test_app("Hello", "PHP, Web", service);

    let request = app.form.set_focus(1, Instant::now());
    app.dispatch(request);
    assert!(settle(&mut app));

    let dropdown = app.tags().unwrap().dropdown();
    assert_eq!(dropdown.status(), &DropdownStatus::Results);
    assert_eq!(dropdown.rendered(), ["Webpack", "WebGL"]);
}

#[test]
fn test_tick_dispatches_debounced_fetch() {
    let service = StaticService::new().answer("go", &["golang"]);
    let mut app = test_app("Hello", "", service);
    let start = Instant::now();

    app.form.adopt_focus(1);
    app.handle_key_event(key(KeyCode::Char('g')), start);
    app.handle_key_event(key(KeyCode::Char('o')), start + ms(50));

    app.tick(start + ms(100));
    assert!(app.tags().unwrap().in_flight().is_none());

    app.tick(start + ms(350));
    assert!(app.tags().unwrap().in_flight().is_some());
    assert!(settle(&mut app));
    assert_eq!(app.tags().unwrap().dropdown().rendered(), ["golang"]);
}

#[test]
fn test_stale_response_ignored() {
    let mut app = test_app("Hello", "PHP", StaticService::new());
    let stale = FetchResponse {
        generation: 999,
        result: Err(FetchError::Status(500)),
    };
    assert!(!app.apply_response(stale));
    assert!(!app.tags().unwrap().dropdown().is_visible());
}
