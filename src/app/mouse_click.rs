//! Mouse click handling
//!
//! Routes left clicks to dropdown rows, form fields, or the empty area.

use std::time::Instant;

use super::app_state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, now: Instant) {
    match region {
        Some(Region::DropdownItem(index)) => click_dropdown_item(app, index),
        // Border or message line: keep the dropdown as it is
        Some(Region::Dropdown) => {}
        Some(Region::Field(index)) => click_field(app, index, now),
        None => click_outside(app),
    }
}

fn click_dropdown_item(app: &mut App, index: usize) {
    let committed = app
        .tags_mut()
        .is_some_and(|controller| controller.click_item(index));

    // The commit refocuses the tag field itself, without a new fetch.
    if committed {
        app.form.adopt_focus(app.tags_index);
    }
}

fn click_field(app: &mut App, index: usize, now: Instant) {
    if app.form.focus() != index {
        let request = app.form.set_focus(index, now);
        app.dispatch(request);
    }
}

fn click_outside(app: &mut App) {
    if let Some(controller) = app.tags_mut() {
        controller.dismiss();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
