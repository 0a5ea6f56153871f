use std::time::Instant;

use serde::Serialize;

use crate::autocomplete::{AutocompleteOptions, InputController, ListTarget};
use crate::error::TagError;
use crate::form::{Form, FormField, TextField};
use crate::layout::LayoutRegions;
use crate::suggest::{FetchRequest, FetchResponse, SuggestionService, SuggestionWorker};
use crate::tokenizer::parse_tags;

pub const TITLE_FIELD: &str = "title";
pub const TAGS_FIELD: &str = "tags";

/// What the form submits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub title: String,
    pub tags: Vec<String>,
}

/// Application state
pub struct App {
    pub form: Form<ListTarget>,
    pub tags_index: usize,
    pub layout_regions: LayoutRegions,
    pub(super) should_quit: bool,
    pub(super) submitted: Option<Draft>,
    worker: SuggestionWorker,
}

impl App {
    /// Build the draft form and start the suggestion worker
    pub fn new<S: SuggestionService>(
        title: &str,
        tags: &str,
        options: AutocompleteOptions,
        service: S,
    ) -> Result<Self, TagError> {
        let mut form = Form::new(vec![
            TextField::new(TITLE_FIELD, "Title").with_value(title),
            TextField::new(TAGS_FIELD, "Tags").with_value(tags),
        ]);
        let tags_index =
            form.bind_tag_autocomplete(&format!("#{}", TAGS_FIELD), options, ListTarget::new())?;

        Ok(Self {
            form,
            tags_index,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            submitted: None,
            worker: SuggestionWorker::spawn(service),
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The draft, if the form was submitted
    pub fn submitted(&self) -> Option<&Draft> {
        self.submitted.as_ref()
    }

    /// Current form contents as a draft
    pub fn draft(&self) -> Draft {
        let value = |index: usize| {
            self.form
                .field(index)
                .map(|f| f.text().value().to_string())
                .unwrap_or_default()
        };
        let title_index = self.form.find(TITLE_FIELD).unwrap_or(0);

        Draft {
            title: value(title_index).trim().to_string(),
            tags: parse_tags(&value(self.tags_index)),
        }
    }

    pub fn tags(&self) -> Option<&InputController<ListTarget>> {
        self.form.controller(self.tags_index)
    }

    pub(super) fn tags_mut(&mut self) -> Option<&mut InputController<ListTarget>> {
        self.form
            .field_mut(self.tags_index)
            .and_then(FormField::controller_mut)
    }

    pub(super) fn submit(&mut self) {
        let draft = self.draft();
        log::debug!("submitting draft with {} tags", draft.tags.len());
        self.submitted = Some(draft);
        self.should_quit = true;
    }

    /// Hand a fetch to the worker
    pub(super) fn dispatch(&mut self, request: Option<FetchRequest>) {
        let Some(request) = request else {
            return;
        };
        if !self.worker.send(request) {
            log::warn!("suggestion worker is gone, fetch dropped");
        }
    }

    /// Fire due timers and apply finished fetches
    pub fn tick(&mut self, now: Instant) {
        let request = self.tags_mut().and_then(|controller| controller.tick(now));
        self.dispatch(request);

        while let Some(response) = self.worker.try_recv() {
            self.apply_response(response);
        }
    }

    /// Route a finished fetch to the tag field; false when it was stale
    pub fn apply_response(&mut self, response: FetchResponse) -> bool {
        match self.tags_mut() {
            Some(controller) => controller.on_fetch_result(response.generation, response.result),
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn worker(&self) -> &SuggestionWorker {
        &self.worker
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
