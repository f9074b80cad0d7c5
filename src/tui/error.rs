/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred while drawing or reading events.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal could not be prepared for drawing.
    #[error("terminal setup failed: {0}")]
    RenderSetup(#[source] std::io::Error),

    /// Terminal input failed or ended while the wizard was running.
    #[error("terminal input closed")]
    InputClosed,
}
