//! TUI screen implementations, one per group of phases.

pub mod connecting;
pub mod form_input;
pub mod welcome;

pub use connecting::{draw_connecting, draw_connection_failed};
pub use form_input::draw_form_input;
pub use welcome::draw_welcome;
