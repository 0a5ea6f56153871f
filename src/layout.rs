//! Region tracking for position-aware mouse interactions
//!
//! `LayoutRegions` records where each form field and the dropdown were drawn
//! on the last frame, and `region_at()` maps a screen position back to them.

use ratatui::layout::{Position, Rect};

/// Clickable part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Form field by index
    Field(usize),
    /// Dropdown row by rendered index
    DropdownItem(usize),
    /// Dropdown border, message line or padding
    Dropdown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    fields: Vec<Rect>,
    dropdown: Option<Rect>,
    dropdown_items: usize,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.dropdown = None;
        self.dropdown_items = 0;
    }

    pub fn push_field(&mut self, area: Rect) {
        self.fields.push(area);
    }

    pub fn field(&self, index: usize) -> Option<Rect> {
        self.fields.get(index).copied()
    }

    /// Record the bordered dropdown area and how many rows it lists
    pub fn set_dropdown(&mut self, area: Rect, items: usize) {
        self.dropdown = Some(area);
        self.dropdown_items = items;
    }

    pub fn dropdown(&self) -> Option<Rect> {
        self.dropdown
    }
}

/// Region under `(column, row)`
///
/// The dropdown is drawn over the fields, so it is tested first.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    if let Some(area) = regions.dropdown.filter(|area| area.contains(position)) {
        // Rows start one line below the top border.
        let inner_top = area.y + 1;
        let inner_bottom = area.bottom().saturating_sub(1);
        if row >= inner_top && row < inner_bottom {
            let index = (row - inner_top) as usize;
            if index < regions.dropdown_items {
                return Some(Region::DropdownItem(index));
            }
        }
        return Some(Region::Dropdown);
    }

    regions
        .fields
        .iter()
        .position(|area| area.contains(position))
        .map(Region::Field)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
