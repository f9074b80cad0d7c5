//! Raw mode and alternate screen lifecycle.

use std::io::{self, Stdout, stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::error::AppError;

/// The concrete terminal the binary draws to.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// Any failure is reported as [`AppError::RenderSetup`] after a best-effort restore.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn setup() -> Result<Tui, AppError> {
    let result = enable_raw_mode()
        .and_then(|()| execute!(stdout(), EnterAlternateScreen))
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout())));
    result.map_err(|e| {
        let _ = restore();
        AppError::RenderSetup(e)
    })
}

/// Leaves the alternate screen and raw mode.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn restore() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}

/// Restores the terminal before the default panic output is printed.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        original_hook(info);
    }));
}
