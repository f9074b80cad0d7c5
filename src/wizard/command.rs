use crate::model::Credentials;

/// Side effects requested by [`dispatch`](super::dispatch).
///
/// The state machine never performs I/O itself; the event loop executes these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a connection attempt, replacing any pending one.
    Connect(Credentials),
    /// Start posting [`Event::Tick`](super::Event::Tick) for the spinner.
    StartSpinner,
    /// Stop the spinner ticks.
    StopSpinner,
    /// Leave the event loop.
    Quit,
}
