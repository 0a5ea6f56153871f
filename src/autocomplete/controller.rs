//! Tag input controller
//!
//! Owns the tag field, the debounce and blur timers, and the dropdown. Time
//! is passed in by the host so the timing rules are deterministic: the host
//! calls [`InputController::tick`] from its event loop and forwards any
//! returned [`FetchRequest`] to a suggestion worker.
//!
//! Every pending asynchronous operation (debounce timer, blur-hide timer,
//! in-flight fetch) captures the current generation when it is scheduled.
//! Any event that changes intent advances the generation, so a completion
//! whose captured generation is no longer current is dropped without
//! touching state.

use std::collections::HashSet;
use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::dropdown::Dropdown;
use super::options::AutocompleteOptions;
use super::render_target::RenderTarget;
use crate::form::{EditOutcome, TextField};
use crate::suggest::{FetchError, FetchRequest};
use crate::tokenizer::{self, TokenSpan};

/// Timer waiting to fire
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingTimer {
    Fetch {
        generation: u64,
        due: Instant,
        keyword: String,
    },
    Hide {
        generation: u64,
        due: Instant,
    },
}

#[derive(Debug)]
pub struct InputController<R: RenderTarget> {
    field: TextField,
    dropdown: Dropdown<R>,
    options: AutocompleteOptions,
    generation: u64,
    pending: Option<PendingTimer>,
    in_flight: Option<u64>,
    focused: bool,
}

impl<R: RenderTarget> InputController<R> {
    pub fn new(field: TextField, options: AutocompleteOptions, target: R) -> Self {
        Self {
            field,
            dropdown: Dropdown::new(target),
            options,
            generation: 0,
            pending: None,
            in_flight: None,
            focused: false,
        }
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    /// Mutable field access for rendering
    ///
    /// Value changes must still go through [`edit`](Self::edit) or
    /// [`on_text_changed`](Self::on_text_changed).
    pub fn field_mut(&mut self) -> &mut TextField {
        &mut self.field
    }

    pub fn dropdown(&self) -> &Dropdown<R> {
        &self.dropdown
    }

    pub fn options(&self) -> &AutocompleteOptions {
        &self.options
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Generation of the fetch still awaited, if any
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Whether a debounced fetch is waiting for its quiet period
    pub fn has_pending_fetch(&self) -> bool {
        matches!(self.pending, Some(PendingTimer::Fetch { .. }))
    }

    /// Whether a blur-triggered hide is waiting for its grace period
    pub fn has_pending_hide(&self) -> bool {
        matches!(self.pending, Some(PendingTimer::Hide { .. }))
    }

    pub fn token_span(&self) -> TokenSpan {
        tokenizer::token_span(self.field.value(), self.field.cursor())
    }

    /// Trimmed token under the cursor
    pub fn current_token(&self) -> &str {
        self.token_span().token(self.field.value())
    }

    /// Lowercased set of tags already in the field
    pub fn existing_tags(&self) -> HashSet<String> {
        tokenizer::existing_tags(self.field.value())
    }

    fn advance_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// React to a new field value
    ///
    /// An empty token cancels everything pending and hides the dropdown.
    /// Otherwise a fetch for the token is scheduled one debounce delay from
    /// `now`, replacing any earlier schedule.
    pub fn on_text_changed(&mut self, value: String, cursor: usize, now: Instant) {
        self.field.set(value, cursor);
        self.reschedule(now);
    }

    fn reschedule(&mut self, now: Instant) {
        let generation = self.advance_generation();
        self.in_flight = None;

        let keyword = self.current_token().to_string();
        if keyword.is_empty() {
            self.pending = None;
            self.dropdown.hide();
            return;
        }

        self.pending = Some(PendingTimer::Fetch {
            generation,
            due: now + self.options.debounce_delay(),
            keyword,
        });
    }

    /// Apply an editing key to the field
    ///
    /// A changed value reschedules the fetch exactly like
    /// [`on_text_changed`](Self::on_text_changed); cursor moves only move.
    pub fn edit(&mut self, key: KeyEvent, now: Instant) -> EditOutcome {
        let outcome = self.field.apply_key(key);
        if outcome == EditOutcome::Changed {
            self.reschedule(now);
        }
        outcome
    }

    /// Field gained focus: fetch for the current token right away
    ///
    /// An empty token fetches with the empty keyword, which asks the service
    /// for the most used tags.
    pub fn on_focus(&mut self, _now: Instant) -> FetchRequest {
        self.focused = true;
        let keyword = self.current_token().to_string();
        self.issue_fetch(keyword)
    }

    /// Field lost focus: hide after the grace delay
    ///
    /// The delay lets a pointer click on a dropdown row land first; the
    /// commit it triggers advances the generation and voids the hide.
    pub fn on_blur(&mut self, now: Instant) {
        self.focused = false;
        let generation = self.advance_generation();
        self.in_flight = None;
        self.pending = Some(PendingTimer::Hide {
            generation,
            due: now + self.options.blur_grace(),
        });
    }

    /// Fire any due timer
    ///
    /// Returns the fetch to issue when the debounce period has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<FetchRequest> {
        let due = match &self.pending {
            Some(PendingTimer::Fetch { due, .. }) | Some(PendingTimer::Hide { due, .. }) => *due,
            None => return None,
        };
        if now < due {
            return None;
        }

        match self.pending.take()? {
            PendingTimer::Fetch {
                generation,
                keyword,
                ..
            } if generation == self.generation => Some(self.issue_fetch(keyword)),
            PendingTimer::Hide { generation, .. } if generation == self.generation => {
                self.dropdown.hide();
                None
            }
            stale => {
                log::debug!("dropping stale timer {:?}", stale);
                None
            }
        }
    }

    fn issue_fetch(&mut self, keyword: String) -> FetchRequest {
        let generation = self.advance_generation();
        self.pending = None;
        self.in_flight = Some(generation);
        self.dropdown.show_loading();
        log::debug!("fetching suggestions for {:?} (generation {})", keyword, generation);
        FetchRequest {
            generation,
            keyword,
        }
    }

    /// Deliver the outcome of a fetch
    ///
    /// Returns false when the result belongs to a superseded generation and
    /// was dropped.
    pub fn on_fetch_result(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, FetchError>,
    ) -> bool {
        if generation != self.generation || self.in_flight != Some(generation) {
            log::debug!(
                "discarding stale suggestions for generation {} (current: {})",
                generation,
                self.generation
            );
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(mut names) => {
                names.truncate(self.options.max_suggestions);
                let existing = self.existing_tags();
                self.dropdown.show_results(names, &existing);
            }
            Err(FetchError::Cancelled) => return false,
            Err(error) => self.dropdown.show_error(&error),
        }
        true
    }

    /// Dropdown keyboard navigation
    ///
    /// Returns true when the key was consumed. Keys are only consumed while
    /// the dropdown is visible; Enter and Tab pass through unless a row is
    /// selected. Escape only hides the dropdown: a pending debounced fetch
    /// still fires and reopens it.
    pub fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> bool {
        if !self.dropdown.is_visible() {
            return false;
        }

        match key.code {
            KeyCode::Down => {
                self.dropdown.select_next();
                true
            }
            KeyCode::Up => {
                self.dropdown.select_previous();
                true
            }
            KeyCode::Enter | KeyCode::Tab => match self.dropdown.selected_name() {
                Some(name) => {
                    let name = name.to_string();
                    self.commit(&name);
                    true
                }
                None => false,
            },
            KeyCode::Esc => {
                self.dropdown.hide();
                true
            }
            _ => false,
        }
    }

    /// Pointer click on rendered row `index`: select it, then commit it
    pub fn click_item(&mut self, index: usize) -> bool {
        if !self.dropdown.select(index) {
            return false;
        }
        match self.dropdown.selected_name() {
            Some(name) => {
                let name = name.to_string();
                self.commit(&name);
                true
            }
            None => false,
        }
    }

    /// Close the dropdown without touching the field (outside click, commit)
    ///
    /// Anything still pending or in flight is superseded so it cannot reopen
    /// the dropdown.
    pub fn dismiss(&mut self) {
        self.advance_generation();
        self.pending = None;
        self.in_flight = None;
        self.dropdown.hide();
    }

    /// Replace the current token with `tag` and normalize separators
    ///
    /// Leaves the cursor after the separator, hides the dropdown and keeps
    /// focus on the field.
    pub fn commit(&mut self, tag: &str) {
        let committed = tokenizer::commit_tag(self.field.value(), self.token_span(), tag);
        self.field.set(committed.value, committed.cursor);
        self.dismiss();
        self.focused = true;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
