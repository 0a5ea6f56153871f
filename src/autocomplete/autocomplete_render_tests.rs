//! Tests for tag dropdown rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use super::*;
use crate::autocomplete::RenderTarget;

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 12;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render(target: &ListTarget) -> (String, Option<(Rect, usize)>) {
    let mut terminal = create_test_terminal(TEST_WIDTH, TEST_HEIGHT);
    let mut drawn = None;
    terminal
        .draw(|f| {
            let anchor = Rect::new(0, 0, TEST_WIDTH, 3);
            drawn = render_dropdown(f, anchor, target);
        })
        .unwrap();
    (terminal.backend().to_string(), drawn)
}

fn results(names: &[&str], selected: Option<usize>) -> ListTarget {
    let mut target = ListTarget::new();
    target.clear();
    for name in names {
        target.append_item(name);
    }
    target.mark_selected(selected);
    target.show();
    target
}

#[test]
fn test_hidden_renders_nothing() {
    let (output, drawn) = render(&ListTarget::new());
    assert!(drawn.is_none());
    assert!(!output.contains("Tags"));
}

#[test]
fn test_results_listed_below_anchor() {
    let (output, drawn) = render(&results(&["python", "pytorch"], None));

    let (area, rows) = drawn.unwrap();
    assert_eq!(rows, 2);
    assert_eq!(area.y, 3);
    assert_eq!(area.x, 2);
    assert_eq!(area.height, 4);
    assert!(output.contains("python"));
    assert!(output.contains("pytorch"));
    assert!(!output.contains("►"));
}

#[test]
fn test_selected_row_marked() {
    let (output, _) = render(&results(&["python", "pytorch"], Some(1)));
    assert!(output.contains("► pytorch"));
    assert!(output.contains("  python"));
}

#[test]
fn test_message_has_no_rows() {
    let mut target = ListTarget::new();
    target.show_message(MessageKind::Empty, "No matching tags found");

    let (output, drawn) = render(&target);
    let (area, rows) = drawn.unwrap();
    assert_eq!(rows, 0);
    assert_eq!(area.height, 3);
    assert!(output.contains("No matching tags found"));
}

#[test]
fn test_width_grows_with_longest_name() {
    let long = "a-really-quite-long-tag-name-for-testing";
    let (_, drawn) = render(&results(&["go", long], None));
    let (area, _) = drawn.unwrap();
    assert_eq!(area.width as usize, long.len() + 2 + POPUP_PADDING as usize);
}

#[test]
fn test_width_has_floor() {
    let (_, drawn) = render(&results(&["go"], None));
    assert_eq!(drawn.unwrap().0.width, MIN_POPUP_WIDTH);
}
