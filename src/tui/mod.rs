//! TUI: event loop, background producers, screens, widgets.

pub mod app;
pub mod error;
pub mod event;
pub mod screens;
pub mod terminal;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::App;
pub use error::AppError;
pub use theme::Theme;
