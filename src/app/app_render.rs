use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::autocomplete::render_dropdown;
use crate::form::TextField;

const FIELD_HEIGHT: u16 = 3;
const HELP_TEXT: &str =
    " Tab: next field | ↑↓: choose tag | Enter: accept / submit | Esc: close / quit ";

impl App {
    /// Render the UI and record where everything landed for mouse hits
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); self.form.len()];
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let layout = Layout::vertical(constraints).split(frame.area());

        let focus = self.form.focus();
        for index in 0..self.form.len() {
            let area = layout[index];
            if let Some(field) = self.form.field_mut(index) {
                render_field(frame, area, field.text_mut(), index == focus);
            }
            self.layout_regions.push_field(area);
        }

        let help_area = layout[layout.len() - 1];
        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        // Drawn last so it sits on top of the fields below the tag field
        let anchor = self.layout_regions.field(self.tags_index);
        let drawn = match (self.form.controller(self.tags_index), anchor) {
            (Some(controller), Some(anchor)) => {
                render_dropdown(frame, anchor, controller.dropdown().target())
            }
            _ => None,
        };
        if let Some((area, rows)) = drawn {
            self.layout_regions.set_dropdown(area, rows);
        }
    }
}

fn render_field(frame: &mut Frame, area: Rect, field: &mut TextField, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title = format!(" {} ", field.label());

    let textarea = field.textarea_mut();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
    textarea.set_style(Style::default().fg(Color::White));
    // Only the focused field shows a cursor
    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    textarea.set_cursor_style(cursor_style);

    frame.render_widget(&*textarea, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
