use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::form::FormField;
use crate::layout::region_at;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    /// Handle key press events
    ///
    /// The tag dropdown sees keys first while its field is focused; whatever
    /// it does not consume falls through to the form.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.form.focus() == self.tags_index
            && self
                .tags_mut()
                .is_some_and(|controller| controller.handle_key(key, now))
        {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                let request = self.form.focus_next(now);
                self.dispatch(request);
            }
            KeyCode::BackTab => {
                let request = self.form.focus_previous(now);
                self.dispatch(request);
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            _ => self.edit_focused(key, now),
        }
    }

    fn edit_focused(&mut self, key: KeyEvent, now: Instant) {
        match self.form.focused_mut() {
            Some(FormField::Text(field)) => {
                field.apply_key(key);
            }
            Some(FormField::Tags(controller)) => {
                controller.edit(key, now);
            }
            None => {}
        }
    }

    /// Handle mouse events; only left clicks do anything
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region, now);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
