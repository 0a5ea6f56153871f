//! Display surface capability for the suggestion dropdown
//!
//! The dropdown never draws anything itself; it drives a [`RenderTarget`].
//! [`ListTarget`] keeps the drawn state in memory for the TUI to paint.

/// Kind of informational line shown instead of suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Empty,
    Error,
}

/// Capability the dropdown renders through
pub trait RenderTarget {
    /// Remove all items and messages
    fn clear(&mut self);

    /// Append one suggestion row
    fn append_item(&mut self, name: &str);

    /// Highlight the row at `index`, or none
    fn mark_selected(&mut self, index: Option<usize>);

    /// Replace the contents with a single message line and show it
    fn show_message(&mut self, kind: MessageKind, text: &str);

    /// Make the appended items visible
    fn show(&mut self);

    /// Hide the dropdown container
    fn hide(&mut self);
}

/// In-memory render target painted by the TUI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTarget {
    visible: bool,
    items: Vec<String>,
    selected: Option<usize>,
    message: Option<(MessageKind, String)>,
}

impl ListTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn message(&self) -> Option<(MessageKind, &str)> {
        self.message
            .as_ref()
            .map(|(kind, text)| (*kind, text.as_str()))
    }
}

impl RenderTarget for ListTarget {
    fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
        self.message = None;
    }

    fn append_item(&mut self, name: &str) {
        self.items.push(name.to_string());
    }

    fn mark_selected(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        self.clear();
        self.message = Some((kind, text.to_string()));
        self.visible = true;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }
}
