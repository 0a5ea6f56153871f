//! Tag dropdown rendering
//!
//! Paints a [`ListTarget`] as a bordered popup just below the tag field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::{ListTarget, MessageKind};
use crate::widgets::popup;

// Dropdown display constants
const MIN_POPUP_WIDTH: u16 = 24;
const MAX_POPUP_WIDTH: u16 = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Render the dropdown below `anchor`
///
/// Returns the popup area and the number of clickable rows, or `None` when
/// the dropdown is hidden.
pub fn render_dropdown(frame: &mut Frame, anchor: Rect, target: &ListTarget) -> Option<(Rect, usize)> {
    if !target.is_visible() {
        return None;
    }

    let (items, rows, text_width): (Vec<ListItem>, usize, usize) = match target.message() {
        Some((kind, text)) => (vec![message_item(kind, text)], 0, text.width()),
        None => {
            let width = target
                .items()
                .iter()
                .map(|name| name.width() + SELECTED_MARKER.width())
                .max()
                .unwrap_or(0);
            let items = target
                .items()
                .iter()
                .enumerate()
                .map(|(i, name)| tag_item(name, target.selected() == Some(i)))
                .collect();
            (items, target.items().len(), width)
        }
    };
    if items.is_empty() {
        return None;
    }

    let popup_width = (text_width as u16)
        .saturating_add(POPUP_PADDING)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_height = (items.len() as u16).saturating_add(POPUP_BORDER_HEIGHT);
    let popup_area = popup::popup_below_anchor(
        frame.area(),
        anchor,
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tags ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    Some((popup_area, rows))
}

fn tag_item(name: &str, selected: bool) -> ListItem<'static> {
    let line = if selected {
        // Highlight selected item with high contrast colors
        Line::from(Span::styled(
            format!("{}{}", SELECTED_MARKER, name),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("{}{}", UNSELECTED_MARKER, name),
            Style::default().fg(Color::White).bg(Color::Black),
        ))
    };
    ListItem::new(line)
}

fn message_item(kind: MessageKind, text: &str) -> ListItem<'static> {
    let style = match kind {
        MessageKind::Loading => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        MessageKind::Empty => Style::default().fg(Color::Yellow),
        MessageKind::Error => Style::default().fg(Color::Red),
    };
    ListItem::new(Line::from(Span::styled(format!(" {}", text), style)))
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
