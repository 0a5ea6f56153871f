//! Comma-separated tag input with server-backed autocomplete
//!
//! The core is [`autocomplete::InputController`], an explicit state machine
//! over a tag field and its suggestion dropdown. Suggestions come from any
//! [`suggest::SuggestionService`]: an HTTP endpoint or a local
//! [`suggest::TagIndex`]. The [`app`] module puts the controller on screen as
//! an article-draft form.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod form;
pub mod layout;
pub mod suggest;
pub mod tokenizer;
pub mod widgets;

#[cfg(test)]
mod test_utils;
