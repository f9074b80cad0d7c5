//! Reusable TUI widgets.

pub mod form;
pub mod key_hints;
pub mod menu;

pub use form::{FIELD_HEIGHT, draw_fields};
pub use key_hints::draw_key_hints;
pub use menu::draw_menu;
