mod autocomplete_render;
mod controller;
mod dropdown;
mod options;
mod render_target;
mod selection;

pub use autocomplete_render::render_dropdown;
pub use controller::InputController;
pub use dropdown::{
    ALL_SELECTED_MESSAGE, Dropdown, DropdownStatus, ERROR_MESSAGE, EmptyReason, LOADING_MESSAGE,
    NO_MATCHES_MESSAGE,
};
pub use options::{
    AutocompleteOptions, DEFAULT_BLUR_GRACE_MS, DEFAULT_DEBOUNCE_DELAY_MS, DEFAULT_MAX_SUGGESTIONS,
};
pub use render_target::{ListTarget, MessageKind, RenderTarget};
pub use selection::SelectionState;
