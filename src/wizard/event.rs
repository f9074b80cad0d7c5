use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::connection::ConnectionResult;

/// Everything the wizard reacts to, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The spinner interval elapsed.
    Tick,
    /// A connection attempt resolved.
    Connection(ConnectionResult),
    /// The terminal was resized; only triggers a redraw.
    Resize(u16, u16),
    /// Terminal input failed or ended; no further keys will arrive.
    InputClosed,
}

/// Producer side of the event queue. Cloned into every background task.
pub type EventSender = mpsc::UnboundedSender<Event>;
