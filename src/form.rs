//! Form fields and the surface the tag autocomplete binds to
//!
//! A [`Form`] is an ordered set of single-line text inputs addressed by id.
//! Binding tag autocomplete to one of them wraps that field in an
//! [`InputController`], which from then on owns the field's value.

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::autocomplete::{AutocompleteOptions, InputController, RenderTarget};
use crate::error::TagError;
use crate::suggest::FetchRequest;

/// What a key press did to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The value changed
    Changed,
    /// Only the cursor moved
    Moved,
    /// The key is not an editing key
    Ignored,
}

/// Single-line text input backed by a `TextArea`
///
/// The cursor is a character offset in `0..=value.chars().count()`.
#[derive(Debug, Clone)]
pub struct TextField {
    id: String,
    label: String,
    textarea: TextArea<'static>,
}

fn create_field_textarea(value: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value]);
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}

impl TextField {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            textarea: create_field_textarea(String::new()),
        }
    }

    /// Set the initial value, with the cursor at its end
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.textarea = create_field_textarea(value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// Replace the value and cursor, clamping the cursor into range
    pub fn set(&mut self, value: String, cursor: usize) {
        // Delete entire line, not just up to cursor, to avoid leaving text after cursor
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(value.replace('\n', " "));

        let column = u16::try_from(cursor).unwrap_or(u16::MAX);
        self.textarea.move_cursor(CursorMove::Jump(0, column));
    }

    /// Apply an editing key to the field
    ///
    /// Only single-line editing keys reach the textarea; Enter, Tab and
    /// Ctrl/Alt chords are left to the host.
    pub fn apply_key(&mut self, key: KeyEvent) -> EditOutcome {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return EditOutcome::Ignored;
        }

        match key.code {
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete => {
                if self.textarea.input(key) {
                    EditOutcome::Changed
                } else {
                    EditOutcome::Ignored
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => {
                self.textarea.input(key);
                EditOutcome::Moved
            }
            _ => EditOutcome::Ignored,
        }
    }
}

/// A form input, plain or wrapped by tag autocomplete
#[derive(Debug)]
pub enum FormField<R: RenderTarget> {
    Text(TextField),
    Tags(InputController<R>),
}

impl<R: RenderTarget> FormField<R> {
    pub fn text(&self) -> &TextField {
        match self {
            FormField::Text(field) => field,
            FormField::Tags(controller) => controller.field(),
        }
    }

    pub fn text_mut(&mut self) -> &mut TextField {
        match self {
            FormField::Text(field) => field,
            FormField::Tags(controller) => controller.field_mut(),
        }
    }

    pub fn controller(&self) -> Option<&InputController<R>> {
        match self {
            FormField::Tags(controller) => Some(controller),
            FormField::Text(_) => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut InputController<R>> {
        match self {
            FormField::Tags(controller) => Some(controller),
            FormField::Text(_) => None,
        }
    }
}

/// Ordered set of fields with one focused field
#[derive(Debug)]
pub struct Form<R: RenderTarget> {
    fields: Vec<FormField<R>>,
    focus: usize,
}

impl<R: RenderTarget> Form<R> {
    pub fn new(fields: Vec<TextField>) -> Self {
        Self {
            fields: fields.into_iter().map(FormField::Text).collect(),
            focus: 0,
        }
    }

    /// Resolve a selector (`#id` or a bare id) to a field index
    pub fn find(&self, selector: &str) -> Option<usize> {
        let id = selector.strip_prefix('#').unwrap_or(selector).trim();
        self.fields.iter().position(|f| f.text().id() == id)
    }

    /// Wrap the field matching `selector` with tag autocomplete
    ///
    /// Fails when the selector does not resolve or the field is already bound.
    pub fn bind_tag_autocomplete(
        &mut self,
        selector: &str,
        options: AutocompleteOptions,
        target: R,
    ) -> Result<usize, TagError> {
        let index = self
            .find(selector)
            .ok_or_else(|| TagError::MissingBindTarget(selector.to_string()))?;

        let slot = &mut self.fields[index];
        let field = match slot {
            FormField::Text(field) => field.clone(),
            FormField::Tags(_) => return Err(TagError::AlreadyBound(selector.to_string())),
        };
        *slot = FormField::Tags(InputController::new(field, options, target));
        log::debug!("bound tag autocomplete to {}", selector);
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FormField<R>] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FormField<R>> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField<R>> {
        self.fields.get_mut(index)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_mut(&mut self) -> Option<&mut FormField<R>> {
        self.fields.get_mut(self.focus)
    }

    /// Controller of the field at `index`, if it is bound
    pub fn controller(&self, index: usize) -> Option<&InputController<R>> {
        self.fields.get(index).and_then(FormField::controller)
    }

    /// Move focus to `index`, blurring the previous field
    ///
    /// Returns the fetch a newly focused tag field wants issued.
    pub fn set_focus(&mut self, index: usize, now: Instant) -> Option<FetchRequest> {
        if index >= self.fields.len() || index == self.focus {
            return None;
        }

        if let Some(controller) = self
            .fields
            .get_mut(self.focus)
            .and_then(FormField::controller_mut)
        {
            controller.on_blur(now);
        }
        self.focus = index;
        self.fields[index]
            .controller_mut()
            .map(|controller| controller.on_focus(now))
    }

    /// Move focus to a field that already took focus on its own
    ///
    /// No controller is notified; used after a dropdown click commits.
    pub fn adopt_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    pub fn focus_next(&mut self, now: Instant) -> Option<FetchRequest> {
        if self.fields.is_empty() {
            return None;
        }
        self.set_focus((self.focus + 1) % self.fields.len(), now)
    }

    pub fn focus_previous(&mut self, now: Instant) -> Option<FetchRequest> {
        if self.fields.is_empty() {
            return None;
        }
        let len = self.fields.len();
        self.set_focus((self.focus + len - 1) % len, now)
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
