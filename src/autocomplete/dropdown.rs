//! Suggestion dropdown state machine
//!
//! `Hidden -> Loading -> {Results | Empty | Error} -> Hidden`
//!
//! The dropdown owns the fetched suggestion list, the filtered rows actually
//! shown, and the selection cursor over those rows. It is driven only by the
//! input controller.

use std::collections::HashSet;

use super::render_target::{MessageKind, RenderTarget};
use super::selection::SelectionState;
use crate::suggest::FetchError;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_MATCHES_MESSAGE: &str = "No matching tags found";
pub const ALL_SELECTED_MESSAGE: &str = "All suggested tags are already selected";
pub const ERROR_MESSAGE: &str = "Failed to load tags, try again later";

/// Why a fetch rendered no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The service returned nothing
    NoMatches,
    /// Every returned tag is already in the field
    AllSelected,
}

impl EmptyReason {
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::NoMatches => NO_MATCHES_MESSAGE,
            EmptyReason::AllSelected => ALL_SELECTED_MESSAGE,
        }
    }
}

/// Visibility state of the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownStatus {
    Hidden,
    Loading,
    Results,
    Empty(EmptyReason),
    Error(String),
}

#[derive(Debug)]
pub struct Dropdown<R: RenderTarget> {
    target: R,
    status: DropdownStatus,
    /// List from the last fetch, in server order
    suggestions: Vec<String>,
    /// Rows actually rendered, after excluding tags already in the field
    rendered: Vec<String>,
    selection: SelectionState,
}

impl<R: RenderTarget> Dropdown<R> {
    pub fn new(mut target: R) -> Self {
        target.clear();
        target.hide();
        Self {
            target,
            status: DropdownStatus::Hidden,
            suggestions: Vec::new(),
            rendered: Vec::new(),
            selection: SelectionState::new(),
        }
    }

    pub fn status(&self) -> &DropdownStatus {
        &self.status
    }

    pub fn is_visible(&self) -> bool {
        self.status != DropdownStatus::Hidden
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn rendered(&self) -> &[String] {
        &self.rendered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.get_selected()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected()
            .and_then(|index| self.rendered.get(index))
            .map(String::as_str)
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn show_loading(&mut self) {
        self.rendered.clear();
        self.selection.clear_selection();
        self.status = DropdownStatus::Loading;
        self.target.show_message(MessageKind::Loading, LOADING_MESSAGE);
    }

    /// Store a fresh suggestion list and render it
    ///
    /// The previous list is discarded, never merged. Names whose lowercase
    /// form is in `existing` are left out; the rest keep server order.
    pub fn show_results(&mut self, suggestions: Vec<String>, existing: &HashSet<String>) {
        self.suggestions = suggestions;
        self.selection.clear_selection();
        self.rendered = self
            .suggestions
            .iter()
            .filter(|name| !existing.contains(&name.to_lowercase()))
            .cloned()
            .collect();

        if self.rendered.is_empty() {
            let reason = if self.suggestions.is_empty() {
                EmptyReason::NoMatches
            } else {
                EmptyReason::AllSelected
            };
            self.status = DropdownStatus::Empty(reason);
            self.target.show_message(MessageKind::Empty, reason.message());
            return;
        }

        self.status = DropdownStatus::Results;
        self.target.clear();
        for name in &self.rendered {
            self.target.append_item(name);
        }
        self.target.mark_selected(None);
        self.target.show();
    }

    pub fn show_error(&mut self, error: &FetchError) {
        log::debug!("suggestion fetch failed: {}", error);
        self.rendered.clear();
        self.selection.clear_selection();
        self.status = DropdownStatus::Error(error.to_string());
        self.target.show_message(MessageKind::Error, ERROR_MESSAGE);
    }

    pub fn hide(&mut self) {
        self.selection.clear_selection();
        self.status = DropdownStatus::Hidden;
        self.target.hide();
    }

    pub fn select_next(&mut self) {
        self.selection.navigate_next(self.rendered.len());
        self.target.mark_selected(self.selection.get_selected());
    }

    pub fn select_previous(&mut self) {
        self.selection.navigate_previous(self.rendered.len());
        self.target.mark_selected(self.selection.get_selected());
    }

    /// Point the selection at row `index` (pointer hover/click)
    pub fn select(&mut self, index: usize) -> bool {
        if self.status != DropdownStatus::Results
            || !self.selection.select_index(index, self.rendered.len())
        {
            return false;
        }
        self.target.mark_selected(Some(index));
        true
    }
}

#[cfg(test)]
#[path = "dropdown_tests.rs"]
mod dropdown_tests;
