mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

// Re-export public types
pub use app_state::{App, Draft, TAGS_FIELD, TITLE_FIELD};
